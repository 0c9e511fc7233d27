//! # Capbudget Core
//!
//! Core types for the Capbudget capital budgeting library.
//!
//! - [`types::CashFlowSeries`]: ordered per-period cash flows (periods 1-based,
//!   strictly increasing)
//! - [`types::ProjectInputs`]: initial investment, cash flows and discount rate,
//!   validated at construction
//! - [`types::IrrOutcome`] / [`types::Payback`]: tagged results for metrics that
//!   may legitimately have no value
//! - [`types::FinancialMetrics`]: the per-scenario result bundle
//!
//! Everything here is plain data. The calculators live in
//! `capbudget-analytics`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        CashFlowEntry, CashFlowSeries, FinancialMetrics, IrrMethod, IrrOutcome, IrrSolution,
        NotComputableReason, Payback, ProjectInputs,
    };
    pub use crate::validation::{validate_discount_rate, validate_investment};
}
