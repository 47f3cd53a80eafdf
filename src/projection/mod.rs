//! Projection engine: point-in-time metrics and monthly cash-flow series

mod state;
mod metrics;
mod engine;
mod cashflows;

pub use state::ProjectionState;
pub use metrics::{derive_metrics, FinancialMetrics, Runway, RUNWAY_SENTINEL_MONTHS};
pub use engine::{project_cash_flow, ProjectionEngine, ProjectionConfig, DEFAULT_PROJECTION_MONTHS};
pub use cashflows::{MonthlyProjection, ProjectionResult, ProjectionSummary};
