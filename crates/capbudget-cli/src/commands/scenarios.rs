//! Scenarios command implementation.
//!
//! Evaluates several projects side by side, either from a JSON file or as
//! optimistic / neutral / pessimistic variations of one project.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use capbudget_analytics::scenarios::{evaluate_scenarios, Scenario, ScenarioResult, ScenarioSet};

use crate::cli::OutputFormat;
use crate::commands::{read_json, Context, ProjectArgs};
use crate::error::CliError;
use crate::output::{emit, format_currency, format_irr, format_payback, print_header};

/// Arguments for the scenarios command.
#[derive(Args, Debug)]
pub struct ScenariosArgs {
    /// JSON file with a list of `{ "name", "inputs" }` scenarios
    #[arg(long, conflicts_with = "spread")]
    pub scenarios: Option<PathBuf>,

    /// Build optimistic/neutral/pessimistic cases by scaling the cash flows
    /// of the project by 1 ± spread
    #[arg(long)]
    pub spread: Option<f64>,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Serialize, Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Scenario")]
    name: String,
    #[tabled(rename = "NPV")]
    npv: String,
    #[tabled(rename = "IRR")]
    irr: String,
    #[tabled(rename = "Payback")]
    payback: String,
    #[tabled(rename = "PI")]
    pi: String,
}

/// Flat record for CSV output.
#[derive(Serialize)]
struct ScenarioRecord<'a> {
    name: &'a str,
    npv: f64,
    irr: Option<f64>,
    payback: Option<f64>,
    profitability_index: Option<f64>,
}

/// Execute the scenarios command.
pub fn execute(args: ScenariosArgs, ctx: &Context) -> Result<()> {
    let scenarios: Vec<Scenario> = match (&args.scenarios, args.spread) {
        (Some(path), _) => read_json(path)?,
        (None, Some(spread)) => {
            let base = args.project.resolve(&ctx.config)?;
            ScenarioSet::optimistic_neutral_pessimistic(&base, spread)?
        }
        (None, None) => {
            return Err(CliError::MissingArgument("--scenarios or --spread".into()).into())
        }
    };

    let results = evaluate_scenarios(&scenarios, &ctx.config.irr);

    if ctx.format == OutputFormat::Csv {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        for result in &results {
            wtr.serialize(record(result))?;
        }
        wtr.flush()?;
        return Ok(());
    }

    let out = &ctx.config.output;
    let rows: Vec<ScenarioRow> = results
        .iter()
        .map(|r| ScenarioRow {
            name: r.name.clone(),
            npv: format_currency(r.metrics.npv, out),
            irr: format_irr(&r.metrics.irr),
            payback: format_payback(&r.metrics.payback),
            pi: r
                .metrics
                .profitability_index
                .map_or_else(|| "N/A".to_string(), |pi| format!("{pi:.4}")),
        })
        .collect();

    let minimal = results
        .iter()
        .map(|r| format!("{} {:.6}", r.name, r.metrics.npv))
        .collect::<Vec<_>>()
        .join("\n");

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        print_header(&format!("{} scenario(s)", results.len()));
    }

    emit(ctx.format, ctx.quiet, "Scenario Comparison", &rows, &results, &minimal)
}

fn record(result: &ScenarioResult) -> ScenarioRecord<'_> {
    ScenarioRecord {
        name: &result.name,
        npv: result.metrics.npv,
        irr: result.metrics.irr.rate(),
        payback: result.metrics.payback.periods(),
        profitability_index: result.metrics.profitability_index,
    }
}
