//! Load budget snapshots from JSON and scenario batches from CSV

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Reader;
use log::debug;
use serde::{Deserialize, Serialize};

use super::BudgetInputs;
use crate::error::Result;

/// A scenario as listed in a batch file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub inputs: BudgetInputs,
}

/// Raw CSV row; column names follow the `scenarios` table.
///
/// Base budget columns are optional and fall back to the base snapshot.
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    #[serde(default)]
    initial_cash: Option<f64>,
    #[serde(default)]
    monthly_revenue: Option<f64>,
    #[serde(default)]
    monthly_expenses: Option<f64>,
    #[serde(default)]
    engineers_count: Option<u32>,
    #[serde(default)]
    engineer_salary: Option<f64>,
    #[serde(default)]
    marketing_spend: Option<f64>,
    #[serde(default)]
    price_increase_percent: Option<f64>,
}

impl CsvRow {
    fn into_scenario(self, base: &BudgetInputs) -> Result<NamedScenario> {
        let inputs = BudgetInputs {
            initial_cash: self.initial_cash.unwrap_or(base.initial_cash),
            monthly_revenue: self.monthly_revenue.unwrap_or(base.monthly_revenue),
            monthly_expenses: self.monthly_expenses.unwrap_or(base.monthly_expenses),
            engineers_count: self.engineers_count.unwrap_or(base.engineers_count),
            engineer_salary: self.engineer_salary.unwrap_or(base.engineer_salary),
            marketing_spend: self.marketing_spend.unwrap_or(base.marketing_spend),
            price_increase_percent: self
                .price_increase_percent
                .unwrap_or(base.price_increase_percent),
        };
        inputs.validate()?;

        Ok(NamedScenario {
            name: self.name,
            inputs,
        })
    }
}

/// Load a budget snapshot from a JSON file (camelCase keys, missing keys default)
pub fn load_budget<P: AsRef<Path>>(path: P) -> Result<BudgetInputs> {
    let file = File::open(path)?;
    load_budget_from_reader(file)
}

/// Load a budget snapshot from any reader
pub fn load_budget_from_reader<R: Read>(reader: R) -> Result<BudgetInputs> {
    let inputs: BudgetInputs = serde_json::from_reader(reader)?;
    inputs.validate()?;
    Ok(inputs)
}

/// Load all scenarios from a CSV file, filling unspecified columns from `base`
pub fn load_scenarios<P: AsRef<Path>>(path: P, base: &BudgetInputs) -> Result<Vec<NamedScenario>> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file, base)
}

/// Load scenarios from any reader (e.g., string buffer)
pub fn load_scenarios_from_reader<R: Read>(reader: R, base: &BudgetInputs) -> Result<Vec<NamedScenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(base)?);
    }

    debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BudgetError;

    #[test]
    fn test_load_budget_from_reader() {
        let json = r#"{
            "initialCash": 1000000,
            "monthlyRevenue": 200000,
            "monthlyExpenses": 500000
        }"#;
        let budget = load_budget_from_reader(json.as_bytes()).unwrap();

        assert_eq!(budget.initial_cash, 1_000_000.0);
        assert_eq!(budget.monthly_expenses, 500_000.0);
        assert_eq!(budget.engineer_salary, 100_000.0);
    }

    #[test]
    fn test_load_budget_rejects_negative_values() {
        let json = r#"{"initialCash": -5}"#;
        assert!(matches!(
            load_budget_from_reader(json.as_bytes()),
            Err(BudgetError::InvalidInput { field: "initialCash", .. })
        ));
    }

    #[test]
    fn test_load_scenarios_fills_from_base() {
        let csv = "\
name,engineers_count,marketing_spend,price_increase_percent
Hire five,5,,
Marketing push,,300000,
Price bump,,,15
";
        let base = BudgetInputs::default();
        let scenarios = load_scenarios_from_reader(csv.as_bytes(), &base).unwrap();

        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0].name, "Hire five");
        assert_eq!(scenarios[0].inputs.engineers_count, 5);
        assert_eq!(scenarios[0].inputs.marketing_spend, 0.0);
        assert_eq!(scenarios[1].inputs.marketing_spend, 300_000.0);
        assert_eq!(scenarios[2].inputs.price_increase_percent, 15.0);
        assert_eq!(scenarios[2].inputs.initial_cash, base.initial_cash);
    }

    #[test]
    fn test_load_scenarios_with_base_columns() {
        let csv = "\
name,initial_cash,monthly_revenue,monthly_expenses
Lean,1000000,100000,400000
";
        let scenarios = load_scenarios_from_reader(csv.as_bytes(), &BudgetInputs::default()).unwrap();
        assert_eq!(scenarios[0].inputs.initial_cash, 1_000_000.0);
        assert_eq!(scenarios[0].inputs.monthly_revenue, 100_000.0);
    }

    #[test]
    fn test_load_scenarios_rejects_bad_number() {
        let csv = "name,marketing_spend\nBroken,lots\n";
        assert!(matches!(
            load_scenarios_from_reader(csv.as_bytes(), &BudgetInputs::default()),
            Err(BudgetError::Csv(_))
        ));
    }
}
