//! Scenario comparison against a base budget
//!
//! Each scenario is evaluated on its own; the base is only consulted when
//! computing display deltas.

use serde::{Deserialize, Serialize};

use crate::budget::{BudgetInputs, NamedScenario};
use crate::projection::{derive_metrics, FinancialMetrics, ProjectionConfig, ProjectionEngine, ProjectionResult};

/// A scenario paired with its derived metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMetrics {
    pub scenario: BudgetInputs,
    pub metrics: FinancialMetrics,
}

/// Derive metrics for each scenario, in input order.
///
/// `_base` is accepted for symmetry with the comparison display and is not
/// used: scenarios are not deltas against it.
pub fn compare_scenarios(_base: &BudgetInputs, scenarios: &[BudgetInputs]) -> Vec<ScenarioMetrics> {
    scenarios
        .iter()
        .map(|scenario| ScenarioMetrics {
            scenario: *scenario,
            metrics: derive_metrics(scenario),
        })
        .collect()
}

/// Direction of a change, by sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Trend::Up
        } else if value < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }

    /// Arrow used in text summaries
    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "–",
        }
    }
}

/// Change of one metric between a base and a current value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    pub base: f64,
    pub current: f64,
    pub diff: f64,
    /// Relative change in percent; 0 when the base is 0
    pub percent_change: f64,
}

impl MetricDelta {
    pub fn between(current: f64, base: f64) -> Self {
        let diff = current - base;
        let percent_change = if base != 0.0 { diff / base * 100.0 } else { 0.0 };

        Self {
            base,
            current,
            diff,
            percent_change,
        }
    }

    pub fn trend(&self) -> Trend {
        Trend::of(self.diff)
    }
}

/// Runway, profit and cash-buffer changes of a scenario against the base
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioImpact {
    /// Compared on the numeric scale, so an indefinite runway counts as 999 months
    pub runway: MetricDelta,
    pub monthly_profit: MetricDelta,
    pub cash_buffer: MetricDelta,
}

impl ScenarioImpact {
    pub fn between(base: &FinancialMetrics, current: &FinancialMetrics) -> Self {
        Self {
            runway: MetricDelta::between(current.runway.as_months(), base.runway.as_months()),
            monthly_profit: MetricDelta::between(current.monthly_profit, base.monthly_profit),
            cash_buffer: MetricDelta::between(current.cash_buffer, base.cash_buffer),
        }
    }
}

/// Runs projections and comparisons against a fixed base budget
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: BudgetInputs,
    base_metrics: FinancialMetrics,
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(base: BudgetInputs, config: ProjectionConfig) -> Self {
        Self {
            base_metrics: derive_metrics(&base),
            base,
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn base(&self) -> &BudgetInputs {
        &self.base
    }

    pub fn base_metrics(&self) -> &FinancialMetrics {
        &self.base_metrics
    }

    /// Project a single scenario with the runner's horizon
    pub fn run(&self, inputs: &BudgetInputs) -> ProjectionResult {
        self.engine.project(inputs)
    }

    /// Project several scenarios, in order
    pub fn run_batch(&self, scenarios: &[BudgetInputs]) -> Vec<ProjectionResult> {
        scenarios.iter().map(|s| self.engine.project(s)).collect()
    }

    /// Deltas of `inputs` against the base budget
    pub fn impact(&self, inputs: &BudgetInputs) -> ScenarioImpact {
        ScenarioImpact::between(&self.base_metrics, &derive_metrics(inputs))
    }

    /// Metrics and impact for every named scenario
    pub fn compare_named(&self, scenarios: &[NamedScenario]) -> Vec<(String, ScenarioMetrics, ScenarioImpact)> {
        let inputs: Vec<BudgetInputs> = scenarios.iter().map(|s| s.inputs).collect();

        compare_scenarios(&self.base, &inputs)
            .into_iter()
            .zip(scenarios)
            .map(|(result, named)| {
                let impact = ScenarioImpact::between(&self.base_metrics, &result.metrics);
                (named.name.clone(), result, impact)
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(BudgetInputs::default(), ProjectionConfig::default())
    }
}
