//! Payback command implementation.

use anyhow::Result;
use clap::Args;

use capbudget_analytics::payback::compute_payback_period;

use crate::commands::{Context, ProjectArgs};
use crate::output::{emit, format_payback, minimal_payback, KeyValue};

/// Arguments for the payback command.
#[derive(Args, Debug)]
pub struct PaybackArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Execute the payback command.
pub fn execute(args: PaybackArgs, ctx: &Context) -> Result<()> {
    let inputs = args.project.resolve(&ctx.config)?;
    let payback = compute_payback_period(inputs.initial_investment(), inputs.cash_flows());

    let rows = [KeyValue::new("Payback Period", format_payback(&payback))];

    emit(
        ctx.format,
        ctx.quiet,
        "Payback Period",
        &rows,
        &payback,
        &minimal_payback(&payback),
    )
}
