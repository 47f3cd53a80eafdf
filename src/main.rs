//! CFO Helper CLI
//!
//! Command-line front end for budget metrics, projections, scenario
//! comparison, the query assistant and JSON export

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use cfo_helper::budget::{load_budget, load_scenarios, BudgetInputs, BudgetUpdate};
use cfo_helper::format::{format_currency, format_runway};
use cfo_helper::projection::{derive_metrics, FinancialMetrics, ProjectionConfig, ProjectionEngine, DEFAULT_PROJECTION_MONTHS};
use cfo_helper::scenario::{MetricDelta, ScenarioImpact, ScenarioRunner};
use cfo_helper::{Assistant, ExportDocument};

#[derive(Parser)]
#[command(name = "cfo-helper", version, about = "Interactive financial planning and simulation")]
struct Cli {
    /// Budget snapshot to start from (JSON with camelCase keys)
    #[arg(long, global = true, env = "CFO_BUDGET")]
    budget: Option<PathBuf>,

    #[command(flatten)]
    overrides: BudgetOverrides,

    #[command(subcommand)]
    command: Command,
}

/// Per-field overrides applied on top of the loaded or default budget
#[derive(Args)]
struct BudgetOverrides {
    #[arg(long, global = true, env = "CFO_INITIAL_CASH")]
    initial_cash: Option<f64>,
    #[arg(long, global = true, env = "CFO_MONTHLY_REVENUE")]
    monthly_revenue: Option<f64>,
    #[arg(long, global = true, env = "CFO_MONTHLY_EXPENSES")]
    monthly_expenses: Option<f64>,
    #[arg(long, global = true, env = "CFO_ENGINEERS_COUNT")]
    engineers_count: Option<u32>,
    #[arg(long, global = true, env = "CFO_ENGINEER_SALARY")]
    engineer_salary: Option<f64>,
    #[arg(long, global = true, env = "CFO_MARKETING_SPEND")]
    marketing_spend: Option<f64>,
    #[arg(long, global = true, env = "CFO_PRICE_INCREASE_PERCENT")]
    price_increase_percent: Option<f64>,
}

impl BudgetOverrides {
    fn to_update(&self) -> BudgetUpdate {
        BudgetUpdate {
            initial_cash: self.initial_cash,
            monthly_revenue: self.monthly_revenue,
            monthly_expenses: self.monthly_expenses,
            engineers_count: self.engineers_count,
            engineer_salary: self.engineer_salary,
            marketing_spend: self.marketing_spend,
            price_increase_percent: self.price_increase_percent,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Show runway, burn and profit for the budget
    Metrics,

    /// Print the month-by-month cash projection
    Project {
        #[arg(long, default_value_t = DEFAULT_PROJECTION_MONTHS)]
        months: u32,

        /// Also write the rows to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Compare scenarios from a CSV file against the budget
    Compare {
        scenarios: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Ask the assistant a question about the budget
    Ask {
        query: String,
    },

    /// Write the export document (budget, metrics, projections, timestamp)
    Export {
        #[arg(long, default_value_t = DEFAULT_PROJECTION_MONTHS)]
        months: u32,

        /// Output file; defaults to cfo-helper-scenario-<millis>.json in the current directory
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let budget = resolve_budget(&cli)?;

    match cli.command {
        Command::Metrics => print_metrics(&budget, &derive_metrics(&budget)),
        Command::Project { months, csv } => project(&budget, months, csv)?,
        Command::Compare { scenarios, json } => compare(&budget, &scenarios, json)?,
        Command::Ask { query } => ask(&budget, &query)?,
        Command::Export { months, output, stdout } => export(&budget, months, output, stdout)?,
    }

    Ok(())
}

fn resolve_budget(cli: &Cli) -> Result<BudgetInputs> {
    let base = match &cli.budget {
        Some(path) => load_budget(path).with_context(|| format!("loading budget from {}", path.display()))?,
        None => BudgetInputs::default(),
    };

    let budget = cli.overrides.to_update().apply(&base);
    budget.validate().context("budget overrides")?;

    for field in budget.out_of_bounds_fields() {
        let bounds = field.bounds();
        let value = budget.get(field);
        let shown = if field.is_currency() { format_currency(value) } else { value.to_string() };
        warn!(
            "{} = {} is outside the usual range {}..{}",
            field.label(),
            shown,
            bounds.min,
            bounds.max
        );
    }

    Ok(budget)
}

fn print_metrics(budget: &BudgetInputs, metrics: &FinancialMetrics) {
    println!("Runway:              {}", format_runway(&metrics.runway));
    println!("Monthly Profit/Loss: {}", format_currency(metrics.monthly_profit));
    println!("Monthly Burn:        {}", format_currency(metrics.monthly_burn));
    println!("Cash Buffer:         {}", format_currency(metrics.cash_buffer));
    println!();
    println!("Revenue (adjusted):  {}", format_currency(metrics.projected_revenue));
    println!("Total Expenses:      {}", format_currency(metrics.total_expenses));
    println!("Engineering Cost:    {}", format_currency(budget.engineering_cost()));
    println!("Marketing Cost:      {}", format_currency(budget.marketing_spend));
}

fn project(budget: &BudgetInputs, months: u32, csv_path: Option<PathBuf>) -> Result<()> {
    let engine = ProjectionEngine::new(ProjectionConfig { projection_months: months });
    let result = engine.project(budget);

    println!("{:>5} {:>16} {:>14} {:>14} {:>14}", "Month", "Cash", "Revenue", "Expenses", "Profit");
    println!("{}", "-".repeat(67));
    for row in &result.projections {
        println!(
            "{:>5} {:>16} {:>14} {:>14} {:>14}",
            row.month,
            format_currency(row.cash),
            format_currency(row.revenue),
            format_currency(row.expenses),
            format_currency(row.profit),
        );
    }

    let summary = result.summary();
    if let Some(month) = summary.depletion_month {
        println!("\nCash runs out at month {}", month);
    }

    if let Some(path) = csv_path {
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        for row in &result.projections {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!("wrote {} rows to {}", result.projections.len(), path.display());
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

fn describe_change(label: &str, delta: &MetricDelta, base: String, current: String) {
    println!(
        "  {:<14} {} -> {}  {} {:+.1} ({:+.1}%)",
        label,
        base,
        current,
        delta.trend().symbol(),
        delta.diff,
        delta.percent_change
    );
}

fn print_impact(base: &FinancialMetrics, current: &FinancialMetrics, impact: &ScenarioImpact) {
    describe_change("Runway", &impact.runway, format_runway(&base.runway), format_runway(&current.runway));
    describe_change(
        "Monthly Profit",
        &impact.monthly_profit,
        format_currency(base.monthly_profit),
        format_currency(current.monthly_profit),
    );
    describe_change(
        "Cash Buffer",
        &impact.cash_buffer,
        format_currency(base.cash_buffer),
        format_currency(current.cash_buffer),
    );
}

fn compare(budget: &BudgetInputs, path: &Path, json: bool) -> Result<()> {
    let scenarios = load_scenarios(path, budget)
        .with_context(|| format!("loading scenarios from {}", path.display()))?;
    let runner = ScenarioRunner::new(*budget, ProjectionConfig::default());
    let rows = runner.compare_named(&scenarios);

    if json {
        let body: Vec<_> = rows
            .iter()
            .map(|(name, result, impact)| {
                serde_json::json!({
                    "name": name,
                    "scenario": result.scenario,
                    "metrics": result.metrics,
                    "impact": impact,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    for (name, result, impact) in &rows {
        println!("{}", name);
        print_impact(runner.base_metrics(), &result.metrics, impact);
        println!();
    }

    Ok(())
}

fn ask(budget: &BudgetInputs, query: &str) -> Result<()> {
    let assistant = Assistant::new()?;
    let Some(suggestion) = assistant.respond(query, budget) else {
        bail!("the query is empty");
    };

    println!("{}", suggestion.message);

    if !suggestion.update.is_empty() {
        let next = suggestion.apply(budget);
        let base = derive_metrics(budget);
        let current = derive_metrics(&next);

        println!("\nApplying suggestion:");
        print_impact(&base, &current, &ScenarioImpact::between(&base, &current));
    }

    Ok(())
}

fn export(budget: &BudgetInputs, months: u32, output: Option<PathBuf>, stdout: bool) -> Result<()> {
    let engine = ProjectionEngine::new(ProjectionConfig { projection_months: months });
    let document = ExportDocument::new(&engine.project(budget), Utc::now());

    if stdout {
        println!("{}", document.to_json()?);
        return Ok(());
    }

    let path = match output {
        Some(path) => {
            document.write_to(&path)?;
            path
        }
        None => document.write_to_dir(".")?,
    };
    println!("Export written to: {}", path.display());

    Ok(())
}
