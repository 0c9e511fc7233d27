//! Root-finding algorithms.
//!
//! This module provides numerical solvers for finding roots of equations:
//!
//! - [`newton_raphson_bounded`]: Newton with a derivative floor and an admissible domain
//! - [`brent`]: Robust method combining bisection, secant, and inverse quadratic
//! - [`scan_brackets`] / [`roots_in_range`]: Locate every sign change on a grid
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Brent | Fast (superlinear) | Guaranteed | Bracket |
//!
//! # Example: rate of return on a two-period project
//!
//! ```rust
//! use capbudget_math::solvers::{newton_raphson_bounded, SolverConfig};
//!
//! // Pay 100 today, receive 60 after one and two periods.
//! let npv = |r: f64| -100.0 + 60.0 / (1.0 + r) + 60.0 / (1.0 + r).powi(2);
//! let d_npv = |r: f64| -60.0 / (1.0 + r).powi(2) - 120.0 / (1.0 + r).powi(3);
//!
//! let config = SolverConfig::default();
//! let result = newton_raphson_bounded(npv, d_npv, 0.1, (-0.99, 10.0), 1e-10, &config).unwrap();
//! assert!(npv(result.root).abs() < 1e-8);
//! ```

mod bracket;
mod brent;
mod newton;

pub use bracket::{roots_in_range, scan_brackets, Bracket};
pub use brent::brent;
pub use newton::newton_raphson_bounded;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
