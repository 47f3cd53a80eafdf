//! CFO Helper - Budget projection engine for runway and cash-flow planning
//!
//! This library provides:
//! - Point-in-time metrics (runway, burn, profit) from a budget snapshot
//! - Month-by-month cash-flow projections with early stop on depletion
//! - Scenario comparison with zero-safe percent deltas
//! - A rule-based query assistant producing partial budget updates
//! - JSON export documents and persistence row types

pub mod error;
pub mod budget;
pub mod projection;
pub mod scenario;
pub mod assistant;
pub mod format;
pub mod export;

// Re-export commonly used types
pub use error::{BudgetError, Result};
pub use budget::{BudgetInputs, BudgetField, BudgetUpdate};
pub use projection::{derive_metrics, project_cash_flow, FinancialMetrics, MonthlyProjection, ProjectionEngine, Runway};
pub use scenario::{compare_scenarios, MetricDelta, ScenarioImpact, ScenarioRunner};
pub use assistant::{Assistant, Suggestion};
pub use export::ExportDocument;
