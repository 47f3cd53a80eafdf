//! Budget input snapshot and field metadata matching the dashboard controls

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, Result};

/// A complete set of budget parameters at one point in time.
///
/// The snapshot is never edited in place: every change produces a new value
/// (see [`BudgetInputs::with`] and [`BudgetUpdate::apply`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetInputs {
    /// Cash on hand at month 0
    pub initial_cash: f64,

    /// Recurring monthly revenue before any price adjustment
    pub monthly_revenue: f64,

    /// Baseline monthly cost, excluding new hires and marketing
    pub monthly_expenses: f64,

    /// Additional engineers being modeled
    pub engineers_count: u32,

    /// Fully-loaded monthly cost per engineer
    pub engineer_salary: f64,

    /// Additional monthly marketing spend
    pub marketing_spend: f64,

    /// Uniform price increase applied to revenue (0-100)
    pub price_increase_percent: f64,
}

impl Default for BudgetInputs {
    /// Starting budget shown by the dashboard
    fn default() -> Self {
        Self {
            initial_cash: 5_000_000.0,
            monthly_revenue: 800_000.0,
            monthly_expenses: 400_000.0,
            engineers_count: 0,
            engineer_salary: 100_000.0,
            marketing_spend: 0.0,
            price_increase_percent: 0.0,
        }
    }
}

impl BudgetInputs {
    /// Monthly cost of the modeled hires
    pub fn engineering_cost(&self) -> f64 {
        self.engineers_count as f64 * self.engineer_salary
    }

    /// Read a field as a plain number
    pub fn get(&self, field: BudgetField) -> f64 {
        match field {
            BudgetField::InitialCash => self.initial_cash,
            BudgetField::MonthlyRevenue => self.monthly_revenue,
            BudgetField::MonthlyExpenses => self.monthly_expenses,
            BudgetField::EngineersCount => self.engineers_count as f64,
            BudgetField::EngineerSalary => self.engineer_salary,
            BudgetField::MarketingSpend => self.marketing_spend,
            BudgetField::PriceIncreasePercent => self.price_increase_percent,
        }
    }

    /// Return a new snapshot with one field replaced.
    ///
    /// Engineer counts are rounded to the nearest whole hire and floored at zero.
    pub fn with(&self, field: BudgetField, value: f64) -> Self {
        let mut next = *self;
        match field {
            BudgetField::InitialCash => next.initial_cash = value,
            BudgetField::MonthlyRevenue => next.monthly_revenue = value,
            BudgetField::MonthlyExpenses => next.monthly_expenses = value,
            BudgetField::EngineersCount => next.engineers_count = value.max(0.0).round() as u32,
            BudgetField::EngineerSalary => next.engineer_salary = value,
            BudgetField::MarketingSpend => next.marketing_spend = value,
            BudgetField::PriceIncreasePercent => next.price_increase_percent = value,
        }
        next
    }

    /// Boundary check for snapshots arriving from outside the controls.
    ///
    /// The engine itself never calls this; derivations accept any numbers.
    pub fn validate(&self) -> Result<()> {
        for field in BudgetField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(BudgetError::InvalidInput {
                    field: field.key(),
                    value,
                    reason: "must be a finite number",
                });
            }
            if value < 0.0 {
                return Err(BudgetError::InvalidInput {
                    field: field.key(),
                    value,
                    reason: "must be non-negative",
                });
            }
        }

        if self.price_increase_percent > 100.0 {
            return Err(BudgetError::InvalidInput {
                field: BudgetField::PriceIncreasePercent.key(),
                value: self.price_increase_percent,
                reason: "must not exceed 100 percent",
            });
        }

        Ok(())
    }

    /// Fields whose value lies outside the range the slider control offers
    pub fn out_of_bounds_fields(&self) -> Vec<BudgetField> {
        BudgetField::ALL
            .into_iter()
            .filter(|field| !field.bounds().contains(self.get(*field)))
            .collect()
    }
}

/// Range configuration of the slider that edits a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The seven recognized budget parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetField {
    InitialCash,
    MonthlyRevenue,
    MonthlyExpenses,
    EngineersCount,
    EngineerSalary,
    MarketingSpend,
    PriceIncreasePercent,
}

impl BudgetField {
    pub const ALL: [BudgetField; 7] = [
        BudgetField::InitialCash,
        BudgetField::MonthlyRevenue,
        BudgetField::MonthlyExpenses,
        BudgetField::EngineersCount,
        BudgetField::EngineerSalary,
        BudgetField::MarketingSpend,
        BudgetField::PriceIncreasePercent,
    ];

    /// Key used in exported documents
    pub fn key(&self) -> &'static str {
        match self {
            BudgetField::InitialCash => "initialCash",
            BudgetField::MonthlyRevenue => "monthlyRevenue",
            BudgetField::MonthlyExpenses => "monthlyExpenses",
            BudgetField::EngineersCount => "engineersCount",
            BudgetField::EngineerSalary => "engineerSalary",
            BudgetField::MarketingSpend => "marketingSpend",
            BudgetField::PriceIncreasePercent => "priceIncreasePercent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetField::InitialCash => "Initial Cash",
            BudgetField::MonthlyRevenue => "Monthly Revenue",
            BudgetField::MonthlyExpenses => "Monthly Expenses",
            BudgetField::EngineersCount => "Number of Engineers to Hire",
            BudgetField::EngineerSalary => "Average Engineer Salary",
            BudgetField::MarketingSpend => "Additional Marketing Spend",
            BudgetField::PriceIncreasePercent => "Product Price Increase",
        }
    }

    pub fn bounds(&self) -> SliderBounds {
        let (min, max, step) = match self {
            BudgetField::InitialCash => (0.0, 50_000_000.0, 100_000.0),
            BudgetField::MonthlyRevenue => (0.0, 5_000_000.0, 50_000.0),
            BudgetField::MonthlyExpenses => (0.0, 5_000_000.0, 50_000.0),
            BudgetField::EngineersCount => (0.0, 20.0, 1.0),
            BudgetField::EngineerSalary => (0.0, 300_000.0, 10_000.0),
            BudgetField::MarketingSpend => (0.0, 2_000_000.0, 50_000.0),
            BudgetField::PriceIncreasePercent => (0.0, 100.0, 5.0),
        };
        SliderBounds { min, max, step }
    }

    /// Whether the field holds a currency amount (as opposed to a count or percentage)
    pub fn is_currency(&self) -> bool {
        !matches!(self, BudgetField::EngineersCount | BudgetField::PriceIncreasePercent)
    }
}

impl fmt::Display for BudgetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BudgetField {
    type Err = BudgetError;

    /// Accepts `initialCash`, `initial_cash`, `initial-cash` and case variants
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        BudgetField::ALL
            .into_iter()
            .find(|field| field.key().to_lowercase() == wanted)
            .ok_or_else(|| BudgetError::UnknownField(s.to_string()))
    }
}

/// Partial change to a budget; unset fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_cash: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_expenses: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engineers_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engineer_salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_spend: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_increase_percent: Option<f64>,
}

impl BudgetUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge onto a snapshot, producing the next snapshot
    pub fn apply(&self, base: &BudgetInputs) -> BudgetInputs {
        BudgetInputs {
            initial_cash: self.initial_cash.unwrap_or(base.initial_cash),
            monthly_revenue: self.monthly_revenue.unwrap_or(base.monthly_revenue),
            monthly_expenses: self.monthly_expenses.unwrap_or(base.monthly_expenses),
            engineers_count: self.engineers_count.unwrap_or(base.engineers_count),
            engineer_salary: self.engineer_salary.unwrap_or(base.engineer_salary),
            marketing_spend: self.marketing_spend.unwrap_or(base.marketing_spend),
            price_increase_percent: self
                .price_increase_percent
                .unwrap_or(base.price_increase_percent),
        }
    }

    /// Fields this update touches, in declaration order
    pub fn fields(&self) -> Vec<BudgetField> {
        let set = [
            self.initial_cash.is_some(),
            self.monthly_revenue.is_some(),
            self.monthly_expenses.is_some(),
            self.engineers_count.is_some(),
            self.engineer_salary.is_some(),
            self.marketing_spend.is_some(),
            self.price_increase_percent.is_some(),
        ];
        BudgetField::ALL
            .into_iter()
            .zip(set)
            .filter_map(|(field, is_set)| is_set.then_some(field))
            .collect()
    }
}
