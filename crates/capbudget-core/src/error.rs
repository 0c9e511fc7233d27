//! Error types for input validation.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when project inputs violate their preconditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Discount rate at or below -100%, or not finite.
    #[error("Invalid discount rate {rate}: must be finite and greater than -1")]
    InvalidDiscountRate {
        /// The rejected rate.
        rate: f64,
    },

    /// Initial investment is negative or not finite.
    #[error("Invalid initial investment {value}: must be finite and non-negative")]
    InvalidInvestment {
        /// The rejected amount.
        value: f64,
    },

    /// A numeric field is NaN or infinite.
    #[error("Non-finite value for {field}: {value}")]
    NonFinite {
        /// Name of the offending field.
        field: String,
        /// The offending value.
        value: f64,
    },

    /// Periods must start at 1 and strictly increase.
    #[error("Invalid period {period} (previous period: {previous})")]
    InvalidPeriod {
        /// The offending period.
        period: u32,
        /// The period that precedes it (0 for the first entry).
        previous: u32,
    },

    /// Revenue and cost vectors of different lengths.
    #[error("Revenue and cost series differ in length: {revenues} vs {costs}")]
    LengthMismatch {
        /// Number of revenue values.
        revenues: usize,
        /// Number of cost values.
        costs: usize,
    },
}

impl CoreError {
    /// Creates a non-finite value error.
    #[must_use]
    pub fn non_finite(field: impl Into<String>, value: f64) -> Self {
        Self::NonFinite {
            field: field.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidDiscountRate { rate: -1.0 };
        assert!(err.to_string().contains("greater than -1"));

        let err = CoreError::InvalidPeriod {
            period: 2,
            previous: 3,
        };
        assert!(err.to_string().contains("previous period: 3"));
    }
}
