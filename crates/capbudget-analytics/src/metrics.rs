//! Metric aggregation.

use log::debug;

use capbudget_core::types::{FinancialMetrics, ProjectInputs};

use crate::irr::{IrrSolver, IrrSolverConfig};
use crate::npv::project_npv;
use crate::payback::compute_payback_period;
use crate::profitability::profitability_index_from_npv;

/// Computes NPV, IRR, payback and profitability index with the default IRR
/// solver settings.
///
/// # Example
///
/// ```rust
/// use capbudget_analytics::metrics::compute_financial_metrics;
/// use capbudget_core::types::{CashFlowSeries, ProjectInputs};
///
/// let flows = CashFlowSeries::from_amounts(&[300.0, 400.0, 500.0]).unwrap();
/// let inputs = ProjectInputs::new(1000.0, flows, 0.10).unwrap();
///
/// let metrics = compute_financial_metrics(&inputs);
/// assert!(metrics.npv < 0.0);
/// assert!(metrics.irr.rate().unwrap() < 0.10);
/// assert_eq!(metrics.payback.periods(), Some(2.6));
/// ```
pub fn compute_financial_metrics(inputs: &ProjectInputs) -> FinancialMetrics {
    compute_financial_metrics_with(inputs, &IrrSolverConfig::default())
}

/// Computes all four metrics with an explicit IRR solver configuration.
///
/// Each metric is computed independently from the same inputs. A zero
/// investment leaves the profitability index empty without affecting the
/// others.
pub fn compute_financial_metrics_with(
    inputs: &ProjectInputs,
    irr_config: &IrrSolverConfig,
) -> FinancialMetrics {
    let npv = project_npv(inputs);
    let irr = IrrSolver::new(irr_config.clone()).solve_project(inputs);
    let payback = compute_payback_period(inputs.initial_investment(), inputs.cash_flows());
    let profitability_index = match profitability_index_from_npv(npv, inputs.initial_investment()) {
        Ok(pi) => Some(pi),
        Err(err) => {
            debug!("profitability index omitted: {err}");
            None
        }
    };

    FinancialMetrics {
        npv,
        irr,
        payback,
        profitability_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use capbudget_core::types::{CashFlowSeries, IrrOutcome, NotComputableReason, Payback};

    fn inputs(investment: f64, amounts: &[f64], rate: f64) -> ProjectInputs {
        ProjectInputs::new(
            investment,
            CashFlowSeries::from_amounts(amounts).unwrap(),
            rate,
        )
        .unwrap()
    }

    #[test]
    fn test_three_year_project() {
        let metrics = compute_financial_metrics(&inputs(1000.0, &[300.0, 400.0, 500.0], 0.10));

        assert_relative_eq!(metrics.npv, -21.036814, epsilon = 1e-6);
        assert_relative_eq!(metrics.irr.rate().unwrap(), 0.0889634, epsilon = 1e-6);
        assert_relative_eq!(metrics.payback.periods().unwrap(), 2.6, epsilon = 1e-12);
        assert_relative_eq!(metrics.profitability_index.unwrap(), 0.978963, epsilon = 1e-6);
        assert!(!metrics.is_value_creating());
    }

    #[test]
    fn test_losing_project() {
        let metrics = compute_financial_metrics(&inputs(1000.0, &[-200.0, -100.0, -50.0], 0.10));

        assert_eq!(
            metrics.irr,
            IrrOutcome::NotComputable {
                reason: NotComputableReason::NonPositiveTotal
            }
        );
        assert_eq!(metrics.payback, Payback::NeverRecovered);
        assert!(metrics.npv < -1000.0);
        assert!(metrics.profitability_index.unwrap() < 0.0);
    }

    #[test]
    fn test_zero_investment_omits_pi_only() {
        let metrics = compute_financial_metrics(&inputs(0.0, &[100.0, 100.0], 0.10));

        assert!(metrics.profitability_index.is_none());
        assert_relative_eq!(metrics.npv, 100.0 / 1.1 + 100.0 / 1.21, epsilon = 1e-9);
        assert_eq!(metrics.payback, Payback::Recovered { periods: 0.0 });
    }

    #[test]
    fn test_reference_config() {
        let metrics = compute_financial_metrics_with(
            &inputs(1000.0, &[3600.0, -2720.0], 0.10),
            &IrrSolverConfig::reference(),
        );
        assert!(!metrics.irr.solution().unwrap().has_multiple_roots());
    }
}
