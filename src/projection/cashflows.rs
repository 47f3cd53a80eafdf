//! Projection output structures

use serde::{Deserialize, Serialize};

use super::metrics::FinancialMetrics;
use crate::budget::BudgetInputs;

/// A single row of projection output for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// Zero-based month index
    pub month: u32,

    /// Cash balance at this month, floored at zero
    pub cash: f64,

    // Steady-state values, identical on every row
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

impl MonthlyProjection {
    /// Row for `month` with the steady-state values from `metrics`
    pub fn steady_state(month: u32, cash: f64, metrics: &FinancialMetrics) -> Self {
        Self {
            month,
            cash,
            revenue: metrics.projected_revenue,
            expenses: metrics.total_expenses,
            profit: metrics.monthly_profit,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Snapshot the projection was run for
    pub inputs: BudgetInputs,

    /// Metrics derived once for the whole horizon
    pub metrics: FinancialMetrics,

    /// Monthly rows, month 0 first
    pub projections: Vec<MonthlyProjection>,

    /// Horizon that was requested
    pub horizon_months: u32,

    /// Month at which cash ran out under a loss, if it did within the horizon
    pub depleted_at: Option<u32>,
}

impl ProjectionResult {
    /// Whether the sequence stopped before the requested horizon
    pub fn is_truncated(&self) -> bool {
        (self.projections.len() as u64) < self.horizon_months as u64 + 1
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_profit: f64 = self.projections.iter().map(|r| r.profit).sum();
        let final_cash = self.projections.last().map(|r| r.cash).unwrap_or(0.0);
        ProjectionSummary {
            months_emitted: self.projections.len() as u32,
            final_cash,
            depletion_month: self.depleted_at,
            total_profit,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months_emitted: u32,
    pub final_cash: f64,
    pub depletion_month: Option<u32>,
    pub total_profit: f64,
}
