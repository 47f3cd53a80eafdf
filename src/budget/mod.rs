//! Budget inputs, field metadata, loading and storage rows

mod data;
pub mod loader;
pub mod records;

pub use data::{BudgetInputs, BudgetField, BudgetUpdate, SliderBounds};
pub use loader::{NamedScenario, load_budget, load_scenarios};
pub use records::{BudgetRecord, ScenarioRecord};
