//! Point-in-time financial metrics derived from a budget snapshot

use serde::{Deserialize, Serialize};

use crate::budget::BudgetInputs;

/// Numeric stand-in for an indefinite runway in exported documents and
/// stored snapshot columns
pub const RUNWAY_SENTINEL_MONTHS: f64 = 999.0;

/// Months of cash remaining at the current burn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub enum Runway {
    /// Break-even or profitable: cash never runs out
    Indefinite,
    /// Cash is depleted after this many months (never negative)
    Finite(f64),
}

impl Runway {
    /// Runway on the numeric scale used for deltas and exports.
    ///
    /// `Indefinite` maps to [`RUNWAY_SENTINEL_MONTHS`].
    pub fn as_months(&self) -> f64 {
        match self {
            Runway::Indefinite => RUNWAY_SENTINEL_MONTHS,
            Runway::Finite(months) => *months,
        }
    }

    pub fn is_indefinite(&self) -> bool {
        matches!(self, Runway::Indefinite)
    }
}

impl From<f64> for Runway {
    /// Reads the numeric scale back: exactly 999 (or infinity) becomes
    /// `Indefinite`, so a finite runway of exactly 999 months does not
    /// survive a round trip.
    fn from(months: f64) -> Self {
        if months == RUNWAY_SENTINEL_MONTHS || months.is_infinite() {
            Runway::Indefinite
        } else {
            Runway::Finite(months.max(0.0))
        }
    }
}

impl From<Runway> for f64 {
    fn from(runway: Runway) -> Self {
        runway.as_months()
    }
}

/// Derived metrics; recomputed from scratch whenever the inputs change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub runway: Runway,

    /// Magnitude of the monthly loss, zero when profitable or break-even
    pub monthly_burn: f64,

    /// Signed monthly net: projected revenue minus total expenses
    pub monthly_profit: f64,

    /// Currently an echo of initial cash
    pub cash_buffer: f64,

    /// Revenue after the price increase
    pub projected_revenue: f64,

    /// Baseline expenses plus engineering cost plus marketing spend
    pub total_expenses: f64,
}

/// Derive the metrics summary for a budget snapshot.
///
/// Total over any numbers: inputs are not validated here, so out-of-range
/// values flow straight through the arithmetic.
pub fn derive_metrics(inputs: &BudgetInputs) -> FinancialMetrics {
    let projected_revenue = inputs.monthly_revenue * (1.0 + inputs.price_increase_percent / 100.0);

    let engineering_cost = inputs.engineering_cost();
    let total_expenses = inputs.monthly_expenses + engineering_cost + inputs.marketing_spend;

    let monthly_profit = projected_revenue - total_expenses;
    let monthly_burn = if monthly_profit < 0.0 { -monthly_profit } else { 0.0 };

    let runway = if monthly_burn > 0.0 {
        Runway::Finite((inputs.initial_cash / monthly_burn).max(0.0))
    } else {
        Runway::Indefinite
    };

    FinancialMetrics {
        runway,
        monthly_burn,
        monthly_profit,
        cash_buffer: inputs.initial_cash,
        projected_revenue,
        total_expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn profitable_budget() -> BudgetInputs {
        BudgetInputs {
            initial_cash: 5_000_000.0,
            monthly_revenue: 800_000.0,
            monthly_expenses: 400_000.0,
            engineers_count: 0,
            engineer_salary: 100_000.0,
            marketing_spend: 0.0,
            price_increase_percent: 0.0,
        }
    }

    #[test]
    fn test_profitable_budget_has_indefinite_runway() {
        let m = derive_metrics(&profitable_budget());

        assert_eq!(m.monthly_profit, 400_000.0);
        assert_eq!(m.monthly_burn, 0.0);
        assert_eq!(m.runway, Runway::Indefinite);
        assert_eq!(m.runway.as_months(), 999.0);
        assert_eq!(m.cash_buffer, 5_000_000.0);
    }

    #[test]
    fn test_hiring_creates_burn_and_finite_runway() {
        let inputs = BudgetInputs {
            engineers_count: 5,
            ..profitable_budget()
        };
        let m = derive_metrics(&inputs);

        assert_eq!(inputs.engineering_cost(), 500_000.0);
        assert_eq!(m.total_expenses, 900_000.0);
        assert_eq!(m.monthly_profit, -100_000.0);
        assert_eq!(m.monthly_burn, 100_000.0);
        assert_eq!(m.runway, Runway::Finite(50.0));
    }

    #[test]
    fn test_break_even_is_indefinite() {
        let inputs = BudgetInputs {
            monthly_revenue: 400_000.0,
            ..profitable_budget()
        };
        let m = derive_metrics(&inputs);

        assert_eq!(m.monthly_profit, 0.0);
        assert_eq!(m.monthly_burn, 0.0);
        assert!(m.runway.is_indefinite());
    }

    #[test]
    fn test_identities_hold_exactly() {
        let inputs = BudgetInputs {
            initial_cash: 1_234_567.0,
            monthly_revenue: 333_333.33,
            monthly_expenses: 123_456.78,
            engineers_count: 7,
            engineer_salary: 87_654.32,
            marketing_spend: 45_000.5,
            price_increase_percent: 12.5,
        };
        let m = derive_metrics(&inputs);

        let revenue = 333_333.33 * (1.0 + 12.5 / 100.0);
        let expenses = 123_456.78 + 7.0 * 87_654.32 + 45_000.5;
        assert_eq!(m.projected_revenue, revenue);
        assert_eq!(m.total_expenses, expenses);
        assert_eq!(m.monthly_profit, revenue - expenses);
        assert_eq!(m.monthly_burn, expenses - revenue);
        assert_relative_eq!(m.runway.as_months(), 1_234_567.0 / (expenses - revenue));
    }

    #[test]
    fn test_price_increase_scales_revenue() {
        let inputs = BudgetInputs {
            price_increase_percent: 25.0,
            ..profitable_budget()
        };
        let m = derive_metrics(&inputs);
        assert_relative_eq!(m.projected_revenue, 1_000_000.0);
        assert_relative_eq!(m.monthly_profit, 600_000.0);
    }

    #[test]
    fn test_negative_cash_clamps_runway() {
        // Not rejected by the engine; runway is floored at zero
        let inputs = BudgetInputs {
            initial_cash: -100_000.0,
            monthly_expenses: 900_000.0,
            ..profitable_budget()
        };
        let m = derive_metrics(&inputs);
        assert_eq!(m.runway, Runway::Finite(0.0));
    }

    #[test]
    fn test_runway_serializes_as_number() {
        let m = derive_metrics(&profitable_budget());
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["runway"], 999.0);
        assert_eq!(json["monthlyProfit"], 400_000.0);

        let finite: Runway = serde_json::from_str("50.0").unwrap();
        assert_eq!(finite, Runway::Finite(50.0));
        let sentinel: Runway = serde_json::from_str("999").unwrap();
        assert_eq!(sentinel, Runway::Indefinite);
    }

    #[test]
    fn test_finite_999_months_reads_back_indefinite() {
        let json = serde_json::to_string(&Runway::Finite(999.0)).unwrap();
        let back: Runway = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Runway::Indefinite);
        assert_eq!(Runway::from(998.5), Runway::Finite(998.5));
    }
}
