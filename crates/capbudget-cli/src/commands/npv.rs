//! NPV command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use capbudget_analytics::npv::compute_npv;
use capbudget_analytics::terminal_value::npv_with_terminal_value;

use crate::commands::{Context, ProjectArgs};
use crate::output::{emit, KeyValue};

/// Arguments for the npv command.
#[derive(Args, Debug)]
pub struct NpvArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Perpetual growth rate; adds the discounted Gordon terminal value
    #[arg(long, allow_negative_numbers = true)]
    pub terminal_growth: Option<f64>,
}

/// Execute the npv command.
pub fn execute(args: NpvArgs, ctx: &Context) -> Result<()> {
    let inputs = args.project.resolve(&ctx.config)?;

    let npv = match args.terminal_growth {
        Some(growth) => npv_with_terminal_value(&inputs, growth)?,
        None => compute_npv(
            inputs.initial_investment(),
            inputs.cash_flows(),
            inputs.discount_rate(),
        )?,
    };

    let rows = [
        KeyValue::from_percent("Discount Rate", inputs.discount_rate()),
        KeyValue::from_currency("NPV", npv, &ctx.config.output),
    ];
    let data = json!({
        "discount_rate": inputs.discount_rate(),
        "terminal_growth": args.terminal_growth,
        "npv": npv,
    });

    emit(
        ctx.format,
        ctx.quiet,
        "Net Present Value",
        &rows,
        &data,
        &format!("{npv:.6}"),
    )
}
