//! Core projection engine for monthly cash-flow projections

use log::debug;

use super::cashflows::{MonthlyProjection, ProjectionResult};
use super::metrics::{derive_metrics, FinancialMetrics};
use super::state::ProjectionState;
use crate::budget::BudgetInputs;

/// Horizon the dashboard charts by default
pub const DEFAULT_PROJECTION_MONTHS: u32 = 24;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of months to project after month 0
    pub projection_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            projection_months: DEFAULT_PROJECTION_MONTHS,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run projection for a single budget snapshot
    pub fn project(&self, inputs: &BudgetInputs) -> ProjectionResult {
        let metrics = derive_metrics(inputs);
        let (projections, depleted_at) = run_months(inputs, &metrics, self.config.projection_months);

        ProjectionResult {
            inputs: *inputs,
            metrics,
            projections,
            horizon_months: self.config.projection_months,
            depleted_at,
        }
    }
}

/// Project month-by-month cash for `months` months after month 0.
///
/// Revenue, expenses and profit are held at their steady-state values. Under
/// a sustained loss the sequence stops at the month cash is depleted; that
/// month's row is still emitted with its cash floored at zero, one row more
/// than a loop that stops as soon as the running cash turns non-positive.
/// With a non-negative profit all `months + 1` rows are returned.
pub fn project_cash_flow(inputs: &BudgetInputs, months: u32) -> Vec<MonthlyProjection> {
    let metrics = derive_metrics(inputs);
    run_months(inputs, &metrics, months).0
}

fn run_months(inputs: &BudgetInputs, metrics: &FinancialMetrics, months: u32) -> (Vec<MonthlyProjection>, Option<u32>) {
    let mut state = ProjectionState::new(inputs.initial_cash, metrics.monthly_profit);
    // Grows with the rows actually emitted; a loss can stop long before `months`
    let mut projections = Vec::new();

    loop {
        projections.push(MonthlyProjection::steady_state(state.month, state.display_cash(), metrics));

        if state.is_depleted() {
            debug!(
                "cash depleted at month {} of {} (running cash {:.2})",
                state.month, months, state.cash
            );
            return (projections, Some(state.month));
        }
        if state.month >= months {
            return (projections, None);
        }

        state.advance_month();
    }
}
