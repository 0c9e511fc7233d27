//! Profitability index command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use capbudget_analytics::profitability::compute_profitability_index;

use crate::commands::{Context, ProjectArgs};
use crate::output::{emit, KeyValue};

/// Arguments for the pi command.
#[derive(Args, Debug)]
pub struct PiArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Execute the pi command.
pub fn execute(args: PiArgs, ctx: &Context) -> Result<()> {
    let inputs = args.project.resolve(&ctx.config)?;
    let pi = compute_profitability_index(
        inputs.initial_investment(),
        inputs.cash_flows(),
        inputs.discount_rate(),
    )?;

    let rows = [KeyValue::new("Profitability Index", format!("{pi:.4}"))];
    let data = json!({ "profitability_index": pi });

    emit(
        ctx.format,
        ctx.quiet,
        "Profitability Index",
        &rows,
        &data,
        &format!("{pi:.6}"),
    )
}
