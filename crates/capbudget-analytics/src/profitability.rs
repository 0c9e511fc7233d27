//! Profitability index.

use capbudget_core::types::CashFlowSeries;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::npv::compute_npv;

/// Present value of the inflows per unit of investment:
/// `(npv + I) / I`.
///
/// # Errors
///
/// [`AnalyticsError::ZeroInvestment`] when `I == 0`, plus the validation
/// errors of [`compute_npv`].
pub fn compute_profitability_index(
    initial_investment: f64,
    cash_flows: &CashFlowSeries,
    discount_rate: f64,
) -> AnalyticsResult<f64> {
    let npv = compute_npv(initial_investment, cash_flows, discount_rate)?;
    profitability_index_from_npv(npv, initial_investment)
}

/// Profitability index from an NPV already computed for `initial_investment`.
pub fn profitability_index_from_npv(npv: f64, initial_investment: f64) -> AnalyticsResult<f64> {
    if initial_investment == 0.0 {
        return Err(AnalyticsError::ZeroInvestment);
    }
    Ok((npv + initial_investment) / initial_investment)
}
