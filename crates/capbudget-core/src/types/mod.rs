//! Domain types for capital budgeting.
//!
//! - [`CashFlowEntry`]: one period's net cash flow
//! - [`CashFlowSeries`]: ordered, validated sequence of entries
//! - [`ProjectInputs`]: investment, series and discount rate
//! - [`IrrOutcome`], [`Payback`]: tagged metric results
//! - [`FinancialMetrics`]: aggregated result bundle

mod cashflow;
mod metrics;
mod outcome;
mod project;

pub use cashflow::{CashFlowEntry, CashFlowSeries};
pub use metrics::FinancialMetrics;
pub use outcome::{IrrMethod, IrrOutcome, IrrSolution, NotComputableReason, Payback};
pub use project::ProjectInputs;
