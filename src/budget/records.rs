//! Row types for the `budgets` and `scenarios` tables
//!
//! Storage itself lives elsewhere; these types only describe the layout and
//! fill the denormalized snapshot columns that the engine is responsible for.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BudgetInputs;
use crate::projection::derive_metrics;

/// One named base budget owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub initial_cash: f64,
    pub monthly_revenue: f64,
    pub monthly_expenses: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One named scenario owned by a budget, with the last computed results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub id: String,
    pub budget_id: String,
    pub name: String,
    pub engineers_count: u32,
    pub engineer_salary: f64,
    pub marketing_spend: f64,
    pub price_increase_percent: f64,

    // Snapshot columns, recomputed by the engine on every save
    pub calculated_runway: f64,
    pub calculated_monthly_burn: f64,
    pub calculated_profit: f64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BudgetRecord {
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, name: impl Into<String>, inputs: &BudgetInputs, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name: name.into(),
            initial_cash: inputs.initial_cash,
            monthly_revenue: inputs.monthly_revenue,
            monthly_expenses: inputs.monthly_expenses,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild the full input snapshot a scenario row describes
    pub fn inputs_for(&self, scenario: &ScenarioRecord) -> BudgetInputs {
        BudgetInputs {
            initial_cash: self.initial_cash,
            monthly_revenue: self.monthly_revenue,
            monthly_expenses: self.monthly_expenses,
            engineers_count: scenario.engineers_count,
            engineer_salary: scenario.engineer_salary,
            marketing_spend: scenario.marketing_spend,
            price_increase_percent: scenario.price_increase_percent,
        }
    }
}

impl ScenarioRecord {
    /// Build a row for `inputs` under `budget`, computing the snapshot columns
    pub fn snapshot(id: impl Into<String>, budget: &BudgetRecord, name: impl Into<String>, inputs: &BudgetInputs, now: DateTime<Utc>) -> Self {
        let metrics = derive_metrics(inputs);

        Self {
            id: id.into(),
            budget_id: budget.id.clone(),
            name: name.into(),
            engineers_count: inputs.engineers_count,
            engineer_salary: inputs.engineer_salary,
            marketing_spend: inputs.marketing_spend,
            price_increase_percent: inputs.price_increase_percent,
            calculated_runway: metrics.runway.as_months(),
            calculated_monthly_burn: metrics.monthly_burn,
            calculated_profit: metrics.monthly_profit,
            created_at: now,
            updated_at: now,
        }
    }

    /// Recompute the snapshot columns against the owning budget
    pub fn refresh(&mut self, budget: &BudgetRecord, now: DateTime<Utc>) {
        let metrics = derive_metrics(&budget.inputs_for(self));
        self.calculated_runway = metrics.runway.as_months();
        self.calculated_monthly_burn = metrics.monthly_burn;
        self.calculated_profit = metrics.monthly_profit;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_snapshot_columns_come_from_engine() {
        let base = BudgetInputs::default();
        let budget = BudgetRecord::new("b1", "u1", "Seed round", &base, fixed_time());

        let hiring = BudgetInputs {
            engineers_count: 5,
            ..base
        };
        let row = ScenarioRecord::snapshot("s1", &budget, "Hire five", &hiring, fixed_time());

        assert_eq!(row.budget_id, "b1");
        assert_eq!(row.calculated_runway, 50.0);
        assert_eq!(row.calculated_monthly_burn, 100_000.0);
        assert_eq!(row.calculated_profit, -100_000.0);
        assert_eq!(budget.inputs_for(&row), hiring);
    }

    #[test]
    fn test_profitable_snapshot_uses_sentinel() {
        let base = BudgetInputs::default();
        let budget = BudgetRecord::new("b1", "u1", "Base", &base, fixed_time());
        let row = ScenarioRecord::snapshot("s1", &budget, "As is", &base, fixed_time());

        assert_eq!(row.calculated_runway, 999.0);
        assert_eq!(row.calculated_monthly_burn, 0.0);
        assert_eq!(row.calculated_profit, 400_000.0);
    }

    #[test]
    fn test_refresh_after_budget_change() {
        let base = BudgetInputs::default();
        let mut budget = BudgetRecord::new("b1", "u1", "Base", &base, fixed_time());
        let mut row = ScenarioRecord::snapshot("s1", &budget, "As is", &base, fixed_time());

        budget.monthly_revenue = 100_000.0;
        let later = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        row.refresh(&budget, later);

        assert_eq!(row.calculated_profit, -300_000.0);
        assert_eq!(row.updated_at, later);
        assert_eq!(row.created_at, fixed_time());
    }
}
