//! Error types for the analytics calculators.

use capbudget_core::CoreError;
use capbudget_math::MathError;
use thiserror::Error;

/// Error type for all analytics operations.
///
/// Expected outcomes such as an IRR that does not exist or an investment that
/// is never paid back are not errors; they are reported through
/// [`capbudget_core::types::IrrOutcome`] and [`capbudget_core::types::Payback`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Input validation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A numerical routine failed.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Profitability index is undefined for a zero investment.
    #[error("profitability index is undefined for a zero initial investment")]
    ZeroInvestment,

    /// Gordon growth needs the discount rate to exceed the growth rate.
    #[error("terminal value undefined: discount rate {rate} must exceed growth rate {growth}")]
    TerminalValueUndefined {
        /// Discount rate.
        rate: f64,
        /// Perpetual growth rate.
        growth: f64,
    },

    /// The cash flow series has no entries.
    #[error("cash flow series is empty")]
    EmptySeries,

    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_core() {
        let err: AnalyticsError = CoreError::InvalidDiscountRate { rate: -1.0 }.into();
        assert!(matches!(err, AnalyticsError::Core(_)));
        assert!(err.to_string().contains("Invalid discount rate"));
    }

    #[test]
    fn test_terminal_value_message() {
        let err = AnalyticsError::TerminalValueUndefined {
            rate: 0.05,
            growth: 0.05,
        };
        assert_eq!(
            err.to_string(),
            "terminal value undefined: discount rate 0.05 must exceed growth rate 0.05"
        );
    }
}
