//! WACC command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use capbudget_analytics::wacc::WaccInputs;

use crate::commands::Context;
use crate::output::{emit, print_warning, KeyValue};

/// Arguments for the wacc command.
#[derive(Args, Debug)]
pub struct WaccArgs {
    /// Cost of equity as a decimal
    #[arg(long)]
    pub equity_cost: f64,

    /// Pre-tax cost of debt as a decimal
    #[arg(long)]
    pub debt_cost: f64,

    /// Tax rate as a decimal
    #[arg(long, default_value = "0")]
    pub tax_rate: f64,

    /// Equity share of the capital structure
    #[arg(long)]
    pub equity_weight: f64,

    /// Debt share of the capital structure (default: 1 - equity weight)
    #[arg(long)]
    pub debt_weight: Option<f64>,
}

/// Execute the wacc command.
pub fn execute(args: WaccArgs, ctx: &Context) -> Result<()> {
    let inputs = WaccInputs::new(
        args.equity_cost,
        args.debt_cost,
        args.tax_rate,
        args.equity_weight,
        args.debt_weight.unwrap_or(1.0 - args.equity_weight),
    );
    let wacc = inputs.compute();

    let weights = inputs.weights_sum();
    if !ctx.quiet && (weights - 1.0).abs() > 1e-9 {
        print_warning(&format!("weights sum to {weights}, not 1"));
    }

    let rows = [
        KeyValue::from_percent("Cost of Equity", inputs.equity_cost),
        KeyValue::from_percent("After-tax Cost of Debt", inputs.after_tax_debt_cost()),
        KeyValue::new("Equity Weight", format!("{:.4}", inputs.equity_weight)),
        KeyValue::new("Debt Weight", format!("{:.4}", inputs.debt_weight)),
        KeyValue::from_percent("WACC", wacc),
    ];
    let data = json!({ "inputs": inputs, "wacc": wacc });

    emit(
        ctx.format,
        ctx.quiet,
        "Weighted Average Cost of Capital",
        &rows,
        &data,
        &format!("{wacc:.6}"),
    )
}
