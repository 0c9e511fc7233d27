//! # Capbudget Math
//!
//! Numerical root finding for the Capbudget capital budgeting library.
//!
//! This crate provides:
//!
//! - **Solvers**: domain-bounded Newton-Raphson, Brent
//! - **Bracketing**: Grid scans that locate every sign change of a function
//!
//! The IRR solver in `capbudget-analytics` is built from these pieces: a
//! bounded Newton iteration per seed, with a bracket scan plus Brent refinement
//! as fallback and for multiple-root detection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        brent, newton_raphson_bounded, roots_in_range, scan_brackets, Bracket, SolverConfig,
        SolverResult,
    };
}

pub use error::{MathError, MathResult};
