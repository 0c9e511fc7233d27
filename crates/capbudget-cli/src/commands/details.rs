//! Details command implementation.
//!
//! Shows how each period contributes to the NPV.

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use capbudget_analytics::npv::{present_value_breakdown, PresentValueRow};
use capbudget_config::OutputSettings;

use crate::cli::OutputFormat;
use crate::commands::{Context, ProjectArgs};
use crate::output::{emit, format_currency, print_header};

/// Arguments for the details command.
#[derive(Args, Debug)]
pub struct DetailsArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// One breakdown line for display.
#[derive(Debug, serde::Serialize, Tabled)]
struct DetailRow {
    #[tabled(rename = "Period")]
    period: u32,
    #[tabled(rename = "Cash Flow")]
    cash_flow: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
    #[tabled(rename = "Present Value")]
    present_value: String,
    #[tabled(rename = "Cumulative NPV")]
    cumulative_npv: String,
}

impl DetailRow {
    fn new(row: &PresentValueRow, settings: &OutputSettings) -> Self {
        Self {
            period: row.period,
            cash_flow: format_currency(row.cash_flow, settings),
            discount_factor: format!("{:.6}", row.discount_factor),
            present_value: format_currency(row.present_value, settings),
            cumulative_npv: format_currency(row.cumulative_npv, settings),
        }
    }
}

/// Execute the details command.
pub fn execute(args: DetailsArgs, ctx: &Context) -> Result<()> {
    let inputs = args.project.resolve(&ctx.config)?;
    let rows = present_value_breakdown(&inputs);
    let npv = rows.last().map_or(0.0, |row| row.cumulative_npv);

    // CSV carries the raw numbers
    if ctx.format == OutputFormat::Csv {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        for row in &rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        return Ok(());
    }

    let display: Vec<DetailRow> = rows
        .iter()
        .map(|row| DetailRow::new(row, &ctx.config.output))
        .collect();

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        print_header(&format!(
            "Discounted at {:.2}%",
            inputs.discount_rate() * 100.0
        ));
    }

    emit(
        ctx.format,
        ctx.quiet,
        "Present Value Breakdown",
        &display,
        &rows,
        &format!("{npv:.6}"),
    )
}
