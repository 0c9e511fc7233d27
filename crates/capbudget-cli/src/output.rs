//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use capbudget_config::OutputSettings;
use capbudget_core::types::{IrrOutcome, Payback};

use crate::cli::OutputFormat;

/// Prints a result in the requested format.
///
/// `rows` drive the table and CSV renderings, `data` the JSON rendering, and
/// `minimal` is printed as-is.
pub fn emit<R, T>(
    format: OutputFormat,
    quiet: bool,
    title: &str,
    rows: &[R],
    data: &T,
    minimal: &str,
) -> anyhow::Result<()>
where
    R: Serialize + Tabled,
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header(title);
            }
            print_table(rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Minimal => println!("{minimal}"),
    }
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats an amount with thousands separators, e.g. `-$1,234.50`.
pub fn format_currency(value: f64, settings: &OutputSettings) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = settings.decimal_places);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Avoid "-$0.00" for values that round to zero
    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{sign}{}{grouped}.{frac}", settings.currency_symbol),
        None => format!("{sign}{}{grouped}", settings.currency_symbol),
    }
}

/// Formats a decimal rate as a percentage, e.g. `0.0889634` → `8.8963%`.
pub fn format_percent(rate: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", rate * 100.0)
}

/// Human-readable IRR.
pub fn format_irr(irr: &IrrOutcome) -> String {
    match irr {
        IrrOutcome::Rate(solution) => {
            let rate = format_percent(solution.rate, 4);
            if solution.has_multiple_roots() {
                format!("{rate} (multiple roots)")
            } else {
                rate
            }
        }
        IrrOutcome::NotComputable { reason } => format!("Not computable: {reason}"),
    }
}

/// Human-readable payback.
pub fn format_payback(payback: &Payback) -> String {
    match payback {
        Payback::Recovered { periods } => format!("{periods:.2} periods"),
        Payback::NeverRecovered => "Never recovered".to_string(),
    }
}

/// Raw IRR for minimal output.
pub fn minimal_irr(irr: &IrrOutcome) -> String {
    irr.rate()
        .map_or_else(|| "not_computable".to_string(), |rate| format!("{rate:.6}"))
}

/// Raw payback for minimal output.
pub fn minimal_payback(payback: &Payback) -> String {
    payback
        .periods()
        .map_or_else(|| "never_recovered".to_string(), |p| format!("{p:.6}"))
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair formatted as currency.
    pub fn from_currency(key: impl Into<String>, value: f64, settings: &OutputSettings) -> Self {
        Self::new(key, format_currency(value, settings))
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_percent(value, 4))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
