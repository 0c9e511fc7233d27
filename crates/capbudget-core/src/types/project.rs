//! Project inputs.

use serde::{Deserialize, Serialize};

use super::CashFlowSeries;
use crate::error::{CoreError, CoreResult};
use crate::validation::{validate_discount_rate, validate_investment};

/// Everything needed to evaluate a capital project.
///
/// The investment is paid at t=0; every entry of `cash_flows` arrives at the
/// end of its period. Construction rejects negative investments and discount
/// rates at or below -1.
///
/// # Example
///
/// ```rust
/// use capbudget_core::types::{CashFlowSeries, ProjectInputs};
///
/// let flows = CashFlowSeries::from_amounts(&[300.0, 400.0, 500.0]).unwrap();
/// let project = ProjectInputs::new(1000.0, flows, 0.10).unwrap();
/// assert_eq!(project.initial_investment(), 1000.0);
///
/// let flows = CashFlowSeries::from_amounts(&[300.0]).unwrap();
/// assert!(ProjectInputs::new(-1.0, flows, 0.10).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectInputs")]
pub struct ProjectInputs {
    initial_investment: f64,
    cash_flows: CashFlowSeries,
    discount_rate: f64,
}

impl ProjectInputs {
    /// Creates validated project inputs.
    pub fn new(
        initial_investment: f64,
        cash_flows: CashFlowSeries,
        discount_rate: f64,
    ) -> CoreResult<Self> {
        Ok(Self {
            initial_investment: validate_investment(initial_investment)?,
            cash_flows,
            discount_rate: validate_discount_rate(discount_rate)?,
        })
    }

    /// Amount paid at t=0.
    #[must_use]
    pub fn initial_investment(&self) -> f64 {
        self.initial_investment
    }

    /// Per-period cash flows.
    #[must_use]
    pub fn cash_flows(&self) -> &CashFlowSeries {
        &self.cash_flows
    }

    /// Per-period discount rate as a decimal.
    #[must_use]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Returns a copy discounted at `rate`.
    pub fn with_discount_rate(&self, rate: f64) -> CoreResult<Self> {
        Self::new(self.initial_investment, self.cash_flows.clone(), rate)
    }

    /// Returns a copy with a different cash flow series.
    #[must_use]
    pub fn with_cash_flows(&self, cash_flows: CashFlowSeries) -> Self {
        Self {
            initial_investment: self.initial_investment,
            cash_flows,
            discount_rate: self.discount_rate,
        }
    }
}

#[derive(Deserialize)]
struct RawProjectInputs {
    #[serde(alias = "initialInvestment")]
    initial_investment: f64,
    #[serde(alias = "cashFlows")]
    cash_flows: CashFlowSeries,
    #[serde(alias = "discountRate")]
    discount_rate: f64,
}

impl TryFrom<RawProjectInputs> for ProjectInputs {
    type Error = CoreError;

    fn try_from(raw: RawProjectInputs) -> Result<Self, Self::Error> {
        Self::new(raw.initial_investment, raw.cash_flows, raw.discount_rate)
    }
}
