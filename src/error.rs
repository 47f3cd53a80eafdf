//! Error types for budget loading and validation

use thiserror::Error;

/// Result type alias for budget operations
pub type Result<T> = std::result::Result<T, BudgetError>;

#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Unknown budget field: {0}")]
    UnknownField(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid query pattern: {0}")]
    Pattern(#[from] regex::Error),
}
