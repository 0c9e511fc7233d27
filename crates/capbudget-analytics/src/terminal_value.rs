//! Gordon growth terminal value.
//!
//! Values every cash flow beyond the last period as a perpetuity growing at
//! `g`: `TV = cf_last · (1 + g) / (r - g)`, measured at the last period.

use capbudget_core::types::{CashFlowSeries, ProjectInputs};
use capbudget_core::validation::{validate_discount_rate, validate_finite};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::npv::{discount_factor, project_npv};

/// Terminal value at the last period of `cash_flows`.
///
/// # Errors
///
/// [`AnalyticsError::TerminalValueUndefined`] when `rate <= growth`,
/// [`AnalyticsError::EmptySeries`] when there is no last cash flow.
///
/// # Example
///
/// ```rust
/// use capbudget_analytics::terminal_value::gordon_terminal_value;
/// use capbudget_core::types::CashFlowSeries;
///
/// let flows = CashFlowSeries::from_amounts(&[100.0, 100.0]).unwrap();
/// let tv = gordon_terminal_value(&flows, 0.10, 0.02).unwrap();
/// assert!((tv - 1275.0).abs() < 1e-9);
/// ```
pub fn gordon_terminal_value(
    cash_flows: &CashFlowSeries,
    discount_rate: f64,
    growth_rate: f64,
) -> AnalyticsResult<f64> {
    validate_discount_rate(discount_rate)?;
    validate_finite("growth rate", growth_rate)?;
    if discount_rate <= growth_rate {
        return Err(AnalyticsError::TerminalValueUndefined {
            rate: discount_rate,
            growth: growth_rate,
        });
    }
    let last = cash_flows.last().ok_or(AnalyticsError::EmptySeries)?;
    Ok(last.amount * (1.0 + growth_rate) / (discount_rate - growth_rate))
}

/// Project NPV including the discounted terminal value.
pub fn npv_with_terminal_value(inputs: &ProjectInputs, growth_rate: f64) -> AnalyticsResult<f64> {
    let rate = inputs.discount_rate();
    let tv = gordon_terminal_value(inputs.cash_flows(), rate, growth_rate)?;
    let last_period = inputs
        .cash_flows()
        .last()
        .map(|cf| cf.period)
        .ok_or(AnalyticsError::EmptySeries)?;
    Ok(project_npv(inputs) + tv * discount_factor(rate, last_period))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(amounts: &[f64]) -> CashFlowSeries {
        CashFlowSeries::from_amounts(amounts).unwrap()
    }

    #[test]
    fn test_gordon_formula() {
        let tv = gordon_terminal_value(&series(&[50.0, 200.0]), 0.08, 0.03).unwrap();
        assert_relative_eq!(tv, 200.0 * 1.03 / 0.05, epsilon = 1e-9);
    }

    #[test]
    fn test_rate_not_above_growth() {
        let flows = series(&[100.0]);
        assert!(matches!(
            gordon_terminal_value(&flows, 0.05, 0.05),
            Err(AnalyticsError::TerminalValueUndefined { .. })
        ));
        assert!(matches!(
            gordon_terminal_value(&flows, 0.03, 0.05),
            Err(AnalyticsError::TerminalValueUndefined { .. })
        ));
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(
            gordon_terminal_value(&series(&[]), 0.1, 0.02),
            Err(AnalyticsError::EmptySeries)
        );
    }

    #[test]
    fn test_npv_with_terminal_value() {
        let inputs = ProjectInputs::new(1000.0, series(&[300.0, 400.0, 500.0]), 0.10).unwrap();
        let with_tv = npv_with_terminal_value(&inputs, 0.02).unwrap();

        let tv = 500.0 * 1.02 / 0.08;
        let expected = project_npv(&inputs) + tv / 1.1f64.powi(3);
        assert_relative_eq!(with_tv, expected, epsilon = 1e-9);
        assert!(with_tv > 0.0);
    }

    #[test]
    fn test_zero_growth_is_perpetuity() {
        let tv = gordon_terminal_value(&series(&[100.0]), 0.05, 0.0).unwrap();
        assert_relative_eq!(tv, 2000.0, epsilon = 1e-9);
    }
}
