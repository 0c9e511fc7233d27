//! Tagged results for metrics that may have no value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an IRR was found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IrrMethod {
    /// Newton-Raphson converged from `seed`.
    Newton {
        /// Starting rate that converged.
        seed: f64,
        /// Iterations used.
        iterations: u32,
    },
    /// Found by bracketing the NPV profile and refining with Brent.
    Bracketed {
        /// Brent iterations used.
        iterations: u32,
    },
}

/// A converged internal rate of return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrSolution {
    /// The reported rate.
    pub rate: f64,
    /// How the rate was found.
    pub method: IrrMethod,
    /// Further distinct roots of the NPV profile, ascending. Empty unless
    /// root detection is enabled and the cash flows change sign more than
    /// once.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_roots: Vec<f64>,
}

impl IrrSolution {
    /// Creates a solution with no additional roots.
    #[must_use]
    pub fn new(rate: f64, method: IrrMethod) -> Self {
        Self {
            rate,
            method,
            other_roots: Vec::new(),
        }
    }

    /// True when more than one rate zeroes the NPV.
    #[must_use]
    pub fn has_multiple_roots(&self) -> bool {
        !self.other_roots.is_empty()
    }
}

/// Why no IRR was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotComputableReason {
    /// Undiscounted flows never exceed the investment.
    NonPositiveTotal,
    /// No seed converged and no bracket contained a root.
    NoConvergence,
    /// The initial investment is negative or not finite.
    InvalidInvestment,
}

impl fmt::Display for NotComputableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTotal => write!(f, "total cash flow does not exceed the investment"),
            Self::NoConvergence => write!(f, "solver did not converge"),
            Self::InvalidInvestment => write!(f, "initial investment is negative or not finite"),
        }
    }
}

/// Result of an IRR calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IrrOutcome {
    /// A rate was found.
    Rate(IrrSolution),
    /// No meaningful rate exists.
    NotComputable {
        /// Why.
        reason: NotComputableReason,
    },
}

impl IrrOutcome {
    /// Returns the rate, if any.
    #[must_use]
    pub fn rate(&self) -> Option<f64> {
        match self {
            Self::Rate(solution) => Some(solution.rate),
            Self::NotComputable { .. } => None,
        }
    }

    /// Returns the full solution, if any.
    #[must_use]
    pub fn solution(&self) -> Option<&IrrSolution> {
        match self {
            Self::Rate(solution) => Some(solution),
            Self::NotComputable { .. } => None,
        }
    }

    /// True if a rate was found.
    #[must_use]
    pub fn is_computable(&self) -> bool {
        matches!(self, Self::Rate(_))
    }
}

impl fmt::Display for IrrOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rate(solution) => write!(f, "{:.4}%", solution.rate * 100.0),
            Self::NotComputable { reason } => write!(f, "not computable ({reason})"),
        }
    }
}

/// Time for cumulative cash flows to recover the investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Payback {
    /// Recovered after `periods` periods, fractional within the recovering
    /// period.
    Recovered {
        /// Elapsed periods.
        periods: f64,
    },
    /// Cumulative flows stay below the investment.
    NeverRecovered,
}

impl Payback {
    /// Returns the elapsed periods, if recovered.
    #[must_use]
    pub fn periods(&self) -> Option<f64> {
        match self {
            Self::Recovered { periods } => Some(*periods),
            Self::NeverRecovered => None,
        }
    }

    /// True if the investment is recovered.
    #[must_use]
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recovered { periods } => write!(f, "{periods:.2} periods"),
            Self::NeverRecovered => write!(f, "never recovered"),
        }
    }
}
