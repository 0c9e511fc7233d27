//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Conflicting inputs.
    #[error("Conflicting inputs: {0}")]
    Conflict(String),

    /// Input file with an unknown extension.
    #[error("Unsupported input file {0}: use .json or .csv")]
    UnsupportedInput(PathBuf),

    /// Input file could not be read or parsed.
    #[error("Cannot read {path}: {reason}")]
    InputFile {
        /// File involved.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Refusing to overwrite an existing file.
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
