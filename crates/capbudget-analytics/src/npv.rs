//! Net present value.
//!
//! `npv = -I + Σ cf_t / (1 + r)^t`, with the investment `I` paid at t=0 and
//! each cash flow at the end of its period.

use serde::{Deserialize, Serialize};

use capbudget_core::types::{CashFlowSeries, ProjectInputs};
use capbudget_core::validation::{validate_discount_rate, validate_investment};

use crate::error::AnalyticsResult;

/// Discount factor `1 / (1 + r)^t`.
#[inline]
pub fn discount_factor(rate: f64, period: u32) -> f64 {
    (1.0 + rate).powf(f64::from(period)).recip()
}

/// Unchecked NPV kernel.
///
/// Callers must ensure `rate > -1`; below that the result is meaningless and
/// at exactly `-1` it is infinite.
#[inline]
pub fn npv_at_rate(initial_investment: f64, cash_flows: &CashFlowSeries, rate: f64) -> f64 {
    let base = 1.0 + rate;
    cash_flows.iter().fold(-initial_investment, |acc, cf| {
        acc + cf.amount / base.powf(f64::from(cf.period))
    })
}

/// Derivative of NPV with respect to the rate:
/// `-Σ cf_t · t / (1 + r)^(t + 1)`.
///
/// The investment is a constant and drops out.
#[inline]
pub fn npv_derivative(cash_flows: &CashFlowSeries, rate: f64) -> f64 {
    let base = 1.0 + rate;
    cash_flows.iter().fold(0.0, |acc, cf| {
        let t = f64::from(cf.period);
        acc - cf.amount * t / base.powf(t + 1.0)
    })
}

/// Computes the net present value of a project.
///
/// # Errors
///
/// Rejects a discount rate that is non-finite or `<= -1`, and a negative or
/// non-finite investment.
///
/// # Example
///
/// ```rust
/// use capbudget_analytics::npv::compute_npv;
/// use capbudget_core::types::CashFlowSeries;
///
/// let flows = CashFlowSeries::from_amounts(&[300.0, 400.0, 500.0]).unwrap();
/// let npv = compute_npv(1000.0, &flows, 0.10).unwrap();
/// assert!((npv - (-21.0368)).abs() < 1e-4);
/// ```
pub fn compute_npv(
    initial_investment: f64,
    cash_flows: &CashFlowSeries,
    discount_rate: f64,
) -> AnalyticsResult<f64> {
    validate_investment(initial_investment)?;
    validate_discount_rate(discount_rate)?;
    Ok(npv_at_rate(initial_investment, cash_flows, discount_rate))
}

/// NPV of already-validated project inputs.
pub fn project_npv(inputs: &ProjectInputs) -> f64 {
    npv_at_rate(
        inputs.initial_investment(),
        inputs.cash_flows(),
        inputs.discount_rate(),
    )
}

/// One line of a present value breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresentValueRow {
    /// Period (0 is the investment).
    pub period: u32,
    /// Nominal cash flow.
    pub cash_flow: f64,
    /// `1 / (1 + r)^period`.
    pub discount_factor: f64,
    /// `cash_flow * discount_factor`.
    pub present_value: f64,
    /// Running NPV up to and including this period.
    pub cumulative_npv: f64,
}

/// Per-period present values, starting with the investment at period 0.
///
/// The last row's `cumulative_npv` equals the project NPV.
pub fn present_value_breakdown(inputs: &ProjectInputs) -> Vec<PresentValueRow> {
    let rate = inputs.discount_rate();
    let investment = inputs.initial_investment();

    let mut rows = Vec::with_capacity(inputs.cash_flows().len() + 1);
    rows.push(PresentValueRow {
        period: 0,
        cash_flow: -investment,
        discount_factor: 1.0,
        present_value: -investment,
        cumulative_npv: -investment,
    });

    let mut cumulative = -investment;
    for cf in inputs.cash_flows() {
        let factor = discount_factor(rate, cf.period);
        let pv = cf.amount * factor;
        cumulative += pv;
        rows.push(PresentValueRow {
            period: cf.period,
            cash_flow: cf.amount,
            discount_factor: factor,
            present_value: pv,
            cumulative_npv: cumulative,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;
    use approx::assert_relative_eq;
    use capbudget_core::CoreError;

    fn series(amounts: &[f64]) -> CashFlowSeries {
        CashFlowSeries::from_amounts(amounts).unwrap()
    }

    #[test]
    fn test_three_year_project() {
        let npv = compute_npv(1000.0, &series(&[300.0, 400.0, 500.0]), 0.10).unwrap();
        // -1000 + 272.7273 + 330.5785 + 375.6574
        assert_relative_eq!(npv, -21.036814, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_rate_is_undiscounted_sum() {
        let flows = series(&[-500.0, 100.0, 300.0, 600.0, 900.0]);
        let npv = compute_npv(2000.0, &flows, 0.0).unwrap();
        assert_relative_eq!(npv, -600.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_series() {
        let npv = compute_npv(250.0, &series(&[]), 0.08).unwrap();
        assert_relative_eq!(npv, -250.0);
    }

    #[test]
    fn test_negative_rate() {
        let npv = compute_npv(100.0, &series(&[100.0]), -0.5).unwrap();
        assert_relative_eq!(npv, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_rate_at_minus_one() {
        let err = compute_npv(100.0, &series(&[100.0]), -1.0).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::Core(CoreError::InvalidDiscountRate { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_investment() {
        assert!(compute_npv(-1.0, &series(&[100.0]), 0.1).is_err());
    }

    #[test]
    fn test_gapped_periods_discount_by_period() {
        use capbudget_core::types::CashFlowEntry;
        let flows = CashFlowSeries::new(vec![CashFlowEntry::new(2, 121.0)]).unwrap();
        let npv = compute_npv(0.0, &flows, 0.10).unwrap();
        assert_relative_eq!(npv, 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let flows = series(&[300.0, 400.0, 500.0]);
        let r = 0.12;
        let h = 1e-6;
        let numeric =
            (npv_at_rate(1000.0, &flows, r + h) - npv_at_rate(1000.0, &flows, r - h)) / (2.0 * h);
        assert_relative_eq!(npv_derivative(&flows, r), numeric, epsilon = 1e-4);
    }

    #[test]
    fn test_breakdown_ends_at_npv() {
        let inputs = ProjectInputs::new(1000.0, series(&[300.0, 400.0, 500.0]), 0.10).unwrap();
        let rows = present_value_breakdown(&inputs);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].period, 0);
        assert_relative_eq!(rows[0].present_value, -1000.0);
        assert_relative_eq!(rows[1].discount_factor, 1.0 / 1.1, epsilon = 1e-12);
        assert_relative_eq!(rows[2].present_value, 400.0 / 1.21, epsilon = 1e-9);
        assert_relative_eq!(rows[3].cumulative_npv, project_npv(&inputs), epsilon = 1e-9);
    }
}
