//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{
    ConfigArgs, DetailsArgs, IrrArgs, MetricsArgs, NpvArgs, PaybackArgs, PiArgs, ScenariosArgs,
    WaccArgs,
};

/// Capbudget - Capital budgeting analytics CLI
#[derive(Parser)]
#[command(name = "capbudget")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (TOML or JSON)
    #[arg(short, long, global = true, env = "CAPBUDGET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// NPV, IRR, payback and profitability index for a project
    Metrics(MetricsArgs),

    /// Net present value
    Npv(NpvArgs),

    /// Internal rate of return
    Irr(IrrArgs),

    /// Payback period
    Payback(PaybackArgs),

    /// Profitability index
    Pi(PiArgs),

    /// Weighted average cost of capital
    Wacc(WaccArgs),

    /// Present value of each period
    Details(DetailsArgs),

    /// Evaluate a batch of scenarios
    Scenarios(ScenariosArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
