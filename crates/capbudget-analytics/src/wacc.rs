//! Weighted average cost of capital.

use log::debug;
use serde::{Deserialize, Serialize};

/// Weights that differ from one by more than this are logged.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Capital structure and costs.
///
/// Weights are taken as given; they are not normalized and need not sum to
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaccInputs {
    /// Cost of equity.
    pub equity_cost: f64,
    /// Pre-tax cost of debt.
    pub debt_cost: f64,
    /// Marginal tax rate applied to the debt cost.
    pub tax_rate: f64,
    /// Share of equity in the capital structure.
    pub equity_weight: f64,
    /// Share of debt in the capital structure.
    pub debt_weight: f64,
}

impl WaccInputs {
    /// Creates WACC inputs.
    #[must_use]
    pub fn new(
        equity_cost: f64,
        debt_cost: f64,
        tax_rate: f64,
        equity_weight: f64,
        debt_weight: f64,
    ) -> Self {
        Self {
            equity_cost,
            debt_cost,
            tax_rate,
            equity_weight,
            debt_weight,
        }
    }

    /// `kd · (1 - t)`.
    #[must_use]
    pub fn after_tax_debt_cost(&self) -> f64 {
        self.debt_cost * (1.0 - self.tax_rate)
    }

    /// `we + wd`.
    #[must_use]
    pub fn weights_sum(&self) -> f64 {
        self.equity_weight + self.debt_weight
    }

    /// `ke · we + kd · (1 - t) · wd`.
    #[must_use]
    pub fn compute(&self) -> f64 {
        let sum = self.weights_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            debug!("WACC weights sum to {sum}, not 1");
        }
        self.equity_cost * self.equity_weight + self.after_tax_debt_cost() * self.debt_weight
    }
}

/// Computes the weighted average cost of capital.
///
/// # Example
///
/// ```rust
/// use capbudget_analytics::wacc::compute_wacc;
///
/// // 60% equity at 12%, 40% debt at 6% with a 25% tax shield
/// let wacc = compute_wacc(0.12, 0.06, 0.25, 0.6, 0.4);
/// assert!((wacc - 0.09).abs() < 1e-12);
/// ```
#[must_use]
pub fn compute_wacc(
    equity_cost: f64,
    debt_cost: f64,
    tax_rate: f64,
    equity_weight: f64,
    debt_weight: f64,
) -> f64 {
    WaccInputs::new(equity_cost, debt_cost, tax_rate, equity_weight, debt_weight).compute()
}
