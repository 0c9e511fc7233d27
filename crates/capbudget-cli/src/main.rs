//! Capbudget CLI - Command-line interface for capital budgeting analytics.
//!
//! # Usage
//!
//! ```bash
//! # All metrics for a project
//! capbudget metrics --investment 1000 --flows 300,400,500 --rate 0.10
//!
//! # IRR from a JSON project file
//! capbudget irr --input project.json
//!
//! # WACC
//! capbudget wacc --equity-cost 0.12 --debt-cost 0.06 --tax-rate 0.25 \
//!     --equity-weight 0.6 --debt-weight 0.4
//!
//! # Optimistic / neutral / pessimistic cases
//! capbudget scenarios --investment 1000 --flows 300,400,500 --spread 0.2
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use capbudget_config::EngineConfig;
use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = EngineConfig::load(cli.config.as_deref())?;
    debug!("effective configuration: {config:?}");

    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
        config,
    };

    // Execute command
    match cli.command {
        Commands::Metrics(args) => commands::metrics::execute(args, &ctx)?,
        Commands::Npv(args) => commands::npv::execute(args, &ctx)?,
        Commands::Irr(args) => commands::irr::execute(args, &ctx)?,
        Commands::Payback(args) => commands::payback::execute(args, &ctx)?,
        Commands::Pi(args) => commands::pi::execute(args, &ctx)?,
        Commands::Wacc(args) => commands::wacc::execute(args, &ctx)?,
        Commands::Details(args) => commands::details::execute(args, &ctx)?,
        Commands::Scenarios(args) => commands::scenarios::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx, cli.config.as_deref())?,
    }

    Ok(())
}

/// Logs go to stderr so that stdout carries only results. `RUST_LOG` wins
/// over the verbosity flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
