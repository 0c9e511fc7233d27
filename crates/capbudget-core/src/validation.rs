//! Boundary checks shared by every calculator.

use crate::error::{CoreError, CoreResult};

/// Rejects rates that are non-finite or `<= -1`.
///
/// At `-1` the discount factor `1 / (1 + r)^t` divides by zero.
pub fn validate_discount_rate(rate: f64) -> CoreResult<f64> {
    if !rate.is_finite() || rate <= -1.0 {
        return Err(CoreError::InvalidDiscountRate { rate });
    }
    Ok(rate)
}

/// Rejects investments that are negative or non-finite.
pub fn validate_investment(investment: f64) -> CoreResult<f64> {
    if !investment.is_finite() || investment < 0.0 {
        return Err(CoreError::InvalidInvestment { value: investment });
    }
    Ok(investment)
}

/// Rejects NaN and infinities.
pub fn validate_finite(field: &str, value: f64) -> CoreResult<f64> {
    if !value.is_finite() {
        return Err(CoreError::non_finite(field, value));
    }
    Ok(value)
}
