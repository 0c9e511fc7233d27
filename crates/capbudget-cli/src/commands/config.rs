//! Config command implementation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use capbudget_config::{default_path, ConfigFormat, EngineConfig};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::print_success;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Write a configuration file with default values
    Init {
        /// Destination (default: the configuration file location)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context, config_path: Option<&Path>) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let format = match ctx.format {
                OutputFormat::Json => ConfigFormat::Json,
                _ => ConfigFormat::Toml,
            };
            println!("{}", ctx.config.to_string_with_format(format)?.trim_end());
        }
        ConfigAction::Path => {
            let path = match config_path {
                Some(path) => path.to_path_buf(),
                None => default_path()?,
            };
            println!("{}", path.display());
        }
        ConfigAction::Init { path, force } => {
            let path = match path.or_else(|| config_path.map(Path::to_path_buf)) {
                Some(path) => path,
                None => default_path()?,
            };
            if path.exists() && !force {
                return Err(CliError::AlreadyExists(path).into());
            }

            EngineConfig::default().save(&path)?;
            if !ctx.quiet {
                print_success(&format!("Wrote {}", path.display()));
            }
        }
    }
    Ok(())
}
