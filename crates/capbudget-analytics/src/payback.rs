//! Undiscounted payback period.

use capbudget_core::types::{CashFlowSeries, Payback};

/// Time until cumulative cash flows recover the initial investment.
///
/// Walks the series accumulating `-I + Σ cf`. If the first entry already
/// brings the total to zero or above, the payback is `0`. Otherwise, when the
/// total first reaches zero at period `t`, the result interpolates linearly
/// inside that period: `t - 1 + |cumulative before t| / cf_t`. With gaps in
/// the periods, `t` is the period number, not the entry's position.
///
/// The investment is taken as already validated (as [`ProjectInputs`]
/// guarantees). A NaN investment never recovers.
///
/// [`ProjectInputs`]: capbudget_core::types::ProjectInputs
///
/// # Example
///
/// ```rust
/// use capbudget_analytics::payback::compute_payback_period;
/// use capbudget_core::types::{CashFlowSeries, Payback};
///
/// let flows = CashFlowSeries::from_amounts(&[300.0, 400.0, 500.0]).unwrap();
/// let payback = compute_payback_period(1000.0, &flows);
/// assert_eq!(payback, Payback::Recovered { periods: 2.6 });
/// ```
pub fn compute_payback_period(initial_investment: f64, cash_flows: &CashFlowSeries) -> Payback {
    let mut cumulative = -initial_investment;

    for (index, cf) in cash_flows.iter().enumerate() {
        let before = cumulative;
        cumulative += cf.amount;

        if cumulative >= 0.0 {
            if index == 0 {
                return Payback::Recovered { periods: 0.0 };
            }
            // cumulative crossed zero from below, so cf.amount > 0
            let periods = f64::from(cf.period) - 1.0 + before.abs() / cf.amount;
            return Payback::Recovered { periods };
        }
    }

    Payback::NeverRecovered
}
