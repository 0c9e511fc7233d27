//! # Capbudget Analytics
//!
//! Investment-decision metrics for capital projects.
//!
//! - **NPV**: [`npv::compute_npv`] and a per-period present value breakdown
//! - **IRR**: [`irr::IrrSolver`], multi-seed Newton-Raphson with a bracketing
//!   fallback and multiple-root detection
//! - **Payback**: [`payback::compute_payback_period`]
//! - **Profitability index**: [`profitability::compute_profitability_index`]
//! - **WACC**: [`wacc::compute_wacc`]
//! - **Aggregation**: [`metrics::compute_financial_metrics`] and scenario
//!   batches in [`scenarios`]
//! - **Terminal value**: Gordon growth in [`terminal_value`]
//! - **Plausibility**: range checks on computed metrics in [`plausibility`]
//!
//! Every function is pure. Identical inputs give identical results, and
//! independent projects can be evaluated concurrently; enable the `parallel`
//! feature to run scenario batches on rayon.
//!
//! ## Usage
//!
//! ```rust
//! use capbudget_analytics::prelude::*;
//! use capbudget_core::prelude::*;
//!
//! let flows = CashFlowSeries::from_amounts(&[500.0, 500.0, 500.0]).unwrap();
//! let inputs = ProjectInputs::new(1000.0, flows, 0.10).unwrap();
//!
//! let metrics = compute_financial_metrics(&inputs);
//! assert!(metrics.npv > 0.0);
//! assert!(metrics.irr.rate().unwrap() > 0.10);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::{AnalyticsError, AnalyticsResult};

// ============================================================================
// MODULES
// ============================================================================

pub mod irr;
pub mod metrics;
pub mod npv;
pub mod payback;
pub mod plausibility;
pub mod profitability;
pub mod scenarios;
pub mod terminal_value;
pub mod wacc;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::irr::{compute_irr, IrrSolver, IrrSolverConfig};
    pub use crate::metrics::{compute_financial_metrics, compute_financial_metrics_with};
    pub use crate::npv::{compute_npv, present_value_breakdown, PresentValueRow};
    pub use crate::payback::compute_payback_period;
    pub use crate::plausibility::{check_plausibility, PlausibilityBounds, PlausibilityWarning};
    pub use crate::profitability::compute_profitability_index;
    pub use crate::scenarios::{evaluate_scenarios, Scenario, ScenarioResult, ScenarioSet};
    pub use crate::terminal_value::{gordon_terminal_value, npv_with_terminal_value};
    pub use crate::wacc::{compute_wacc, WaccInputs};
}
