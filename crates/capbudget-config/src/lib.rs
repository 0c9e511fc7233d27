//! Capbudget Configuration Layer
//!
//! Settings for the capital budgeting engine and its command-line front end.
//!
//! # Features
//!
//! - **IRR Solver**: seed list, tolerance, iteration budget, rate bounds,
//!   bracketing fallback and multiple-root detection
//! - **Plausibility**: ranges used to flag suspicious metrics
//! - **Output**: decimal places and currency symbol
//! - **Files**: TOML or JSON, validated on load, default location under the
//!   platform configuration directory
//!
//! # Example
//!
//! ```rust
//! use capbudget_config::{EngineConfig, ConfigFormat, Validate};
//!
//! let config = EngineConfig::default();
//! assert!(config.is_valid());
//!
//! let text = config.to_string_with_format(ConfigFormat::Toml).unwrap();
//! let parsed = EngineConfig::from_str_with_format(&text, ConfigFormat::Toml).unwrap();
//! assert_eq!(parsed, config);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod error;
pub mod loader;

pub use engine::{EngineConfig, OutputSettings};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use loader::{default_path, ConfigFormat};
