//! Metrics command implementation.
//!
//! Computes NPV, IRR, payback and profitability index for one project.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use capbudget_analytics::metrics::compute_financial_metrics_with;
use capbudget_analytics::plausibility::{check_plausibility, PlausibilityWarning};
use capbudget_analytics::terminal_value::npv_with_terminal_value;
use capbudget_core::types::FinancialMetrics;

use crate::commands::{Context, ProjectArgs};
use crate::output::{
    emit, format_currency, format_irr, format_payback, print_warning, KeyValue,
};

/// Arguments for the metrics command.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Perpetual growth rate for a Gordon terminal value
    #[arg(long, allow_negative_numbers = true)]
    pub terminal_growth: Option<f64>,

    /// Skip the plausibility check
    #[arg(long)]
    pub no_checks: bool,
}

#[derive(Serialize)]
struct MetricsReport<'a> {
    #[serde(flatten)]
    metrics: &'a FinancialMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    npv_with_terminal_value: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<PlausibilityWarning>,
}

/// Execute the metrics command.
pub fn execute(args: MetricsArgs, ctx: &Context) -> Result<()> {
    let inputs = args.project.resolve(&ctx.config)?;
    let metrics = compute_financial_metrics_with(&inputs, &ctx.config.irr);

    let npv_tv = args
        .terminal_growth
        .map(|g| npv_with_terminal_value(&inputs, g))
        .transpose()?;

    let warnings = if args.no_checks {
        Vec::new()
    } else {
        check_plausibility(&metrics, &ctx.config.plausibility)
    };

    let out = &ctx.config.output;
    let mut rows = vec![
        KeyValue::from_currency("Initial Investment", inputs.initial_investment(), out),
        KeyValue::from_percent("Discount Rate", inputs.discount_rate()),
        KeyValue::new("Periods", inputs.cash_flows().len().to_string()),
        KeyValue::from_currency("NPV", metrics.npv, out),
        KeyValue::new("IRR", format_irr(&metrics.irr)),
        KeyValue::new("Payback Period", format_payback(&metrics.payback)),
        KeyValue::new(
            "Profitability Index",
            metrics
                .profitability_index
                .map_or_else(|| "N/A (zero investment)".to_string(), |pi| format!("{pi:.4}")),
        ),
    ];
    if let Some(solution) = metrics.irr.solution() {
        for (i, root) in solution.other_roots.iter().enumerate() {
            rows.push(KeyValue::from_percent(format!("Other IRR #{}", i + 1), *root));
        }
    }
    if let Some(value) = npv_tv {
        rows.push(KeyValue::new(
            "NPV incl. Terminal Value",
            format_currency(value, out),
        ));
    }

    if !ctx.quiet {
        for warning in &warnings {
            print_warning(&warning.to_string());
        }
    }

    let report = MetricsReport {
        metrics: &metrics,
        npv_with_terminal_value: npv_tv,
        warnings,
    };
    let minimal = format!("{:.6}", metrics.npv);

    emit(ctx.format, ctx.quiet, "Financial Metrics", &rows, &report, &minimal)
}
