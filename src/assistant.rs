//! Rule-based query assistant
//!
//! Maps a handful of phrasings ("hire 5 engineers", "spend 2 lakh on
//! marketing", ...) to a partial budget update plus an explanation. Rules are
//! tried in a fixed order and the first match wins.

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::budget::{BudgetInputs, BudgetUpdate};
use crate::error::Result;
use crate::format::format_number;

const DEFAULT_HIRES: f64 = 3.0;
const DEFAULT_MARKETING_INCREASE: f64 = 200_000.0;
const DEFAULT_PRICE_INCREASE: f64 = 10.0;
const LAKH: f64 = 100_000.0;
const COST_REDUCTION_FACTOR: f64 = 0.85;

const HELP_TEXT: &str = "I can help you with:
- Hiring decisions (e.g., \"Should I hire 5 engineers?\")
- Marketing budget (e.g., \"What if I spend 2 lakh more on marketing?\")
- Pricing strategy (e.g., \"Increase price by 15%\")
- Cost reduction (e.g., \"How can I reduce costs?\")
- Break-even analysis (e.g., \"How can I become profitable?\")";

/// Which rule produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Hiring,
    Marketing,
    Pricing,
    CostReduction,
    BreakEven,
    Help,
}

/// Reply to a query: an explanation and the changes to apply, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
    pub update: BudgetUpdate,
}

impl Suggestion {
    /// Budget after applying the suggested changes
    pub fn apply(&self, current: &BudgetInputs) -> BudgetInputs {
        self.update.apply(current)
    }
}

pub struct Assistant {
    number: Regex,
    lakh_amount: Regex,
}

impl Assistant {
    pub fn new() -> Result<Self> {
        Ok(Self {
            number: Regex::new(r"\d+")?,
            lakh_amount: Regex::new(r"(?i)(\d+(?:,\d+)*(?:\.\d+)?)\s*(?:lakh|lac|l)")?,
        })
    }

    /// Answer a query against the current budget; `None` for a blank query
    pub fn respond(&self, query: &str, current: &BudgetInputs) -> Option<Suggestion> {
        if query.trim().is_empty() {
            return None;
        }

        let q = query.to_lowercase();
        let suggestion = if q.contains("hire") && q.contains("engineer") {
            self.hiring(&q, current)
        } else if q.contains("marketing") || q.contains("spend") {
            self.marketing(&q, current)
        } else if q.contains("price") || q.contains("increase") {
            self.pricing(&q, current)
        } else if q.contains("reduce") && q.contains("cost") {
            cost_reduction(current)
        } else if q.contains("profitable") || q.contains("break even") {
            break_even(current)
        } else {
            Suggestion {
                kind: SuggestionKind::Help,
                message: HELP_TEXT.to_string(),
                update: BudgetUpdate::default(),
            }
        };

        debug!("query {:?} matched {:?}", query, suggestion.kind);
        Some(suggestion)
    }

    /// First run of digits, kept at full magnitude (no integer overflow)
    fn first_integer(&self, q: &str) -> Option<f64> {
        self.number.find(q).and_then(|m| m.as_str().parse().ok())
    }

    fn hiring(&self, q: &str, current: &BudgetInputs) -> Suggestion {
        let count = self.first_integer(q).unwrap_or(DEFAULT_HIRES);
        let added_cost = count * current.engineer_salary;

        Suggestion {
            kind: SuggestionKind::Hiring,
            message: format!(
                "I suggest hiring {} engineers. This will increase your monthly expenses by ₹{} and reduce your runway.",
                count,
                format_number(added_cost)
            ),
            update: BudgetUpdate {
                // `as` saturates counts beyond u32::MAX
                engineers_count: Some(current.engineers_count.saturating_add(count as u32)),
                ..Default::default()
            },
        }
    }

    fn marketing(&self, q: &str, current: &BudgetInputs) -> Suggestion {
        let amount = self
            .lakh_amount
            .captures(q)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
            .map(|lakhs| lakhs * LAKH)
            .unwrap_or(DEFAULT_MARKETING_INCREASE);

        Suggestion {
            kind: SuggestionKind::Marketing,
            message: format!(
                "Increasing marketing spend by ₹{} could help boost revenue. Monitor the impact on your runway carefully.",
                format_number(amount)
            ),
            update: BudgetUpdate {
                marketing_spend: Some(current.marketing_spend + amount),
                ..Default::default()
            },
        }
    }

    fn pricing(&self, q: &str, current: &BudgetInputs) -> Suggestion {
        let percent = self.first_integer(q).unwrap_or(DEFAULT_PRICE_INCREASE);

        Suggestion {
            kind: SuggestionKind::Pricing,
            message: format!(
                "A {}% price increase could improve profitability. Consider testing this with a subset of customers first.",
                percent
            ),
            update: BudgetUpdate {
                price_increase_percent: Some((current.price_increase_percent + percent).min(100.0)),
                ..Default::default()
            },
        }
    }
}

fn cost_reduction(current: &BudgetInputs) -> Suggestion {
    Suggestion {
        kind: SuggestionKind::CostReduction,
        message: "Reducing operational costs by 15% could extend your runway significantly. Focus on non-essential expenses first."
            .to_string(),
        update: BudgetUpdate {
            monthly_expenses: Some((current.monthly_expenses * COST_REDUCTION_FACTOR).max(0.0)),
            ..Default::default()
        },
    }
}

/// Compares raw revenue against baseline expenses only
fn break_even(current: &BudgetInputs) -> Suggestion {
    let deficit = current.monthly_expenses - current.monthly_revenue;
    let message = if deficit > 0.0 {
        format!(
            "To break even, you need to either increase revenue by ₹{}/month or reduce expenses by the same amount. Consider a combination of both strategies.",
            format_number(deficit)
        )
    } else {
        format!(
            "Great news! You're already profitable with a monthly profit of ₹{}.",
            format_number(current.monthly_revenue - current.monthly_expenses)
        )
    };

    Suggestion {
        kind: SuggestionKind::BreakEven,
        message,
        update: BudgetUpdate::default(),
    }
}
