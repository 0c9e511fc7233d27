//! Sanity bounds on computed metrics.
//!
//! Values outside these ranges usually mean an input error (a rate entered as
//! a percentage, flows in the wrong unit). Violations are reported as
//! warnings; the metrics themselves are left untouched.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use capbudget_core::types::FinancialMetrics;

/// Ranges considered plausible for each metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlausibilityBounds {
    /// Largest plausible |NPV|.
    pub max_abs_npv: f64,
    /// Lowest plausible IRR.
    pub min_irr: f64,
    /// Highest plausible IRR.
    pub max_irr: f64,
    /// Longest plausible payback, in periods.
    pub max_payback: f64,
    /// Lowest plausible profitability index.
    pub min_profitability_index: f64,
    /// Highest plausible profitability index.
    pub max_profitability_index: f64,
}

impl Default for PlausibilityBounds {
    fn default() -> Self {
        Self {
            max_abs_npv: 1e7,
            min_irr: -0.5,
            max_irr: 2.0,
            max_payback: 20.0,
            min_profitability_index: 0.0,
            max_profitability_index: 10.0,
        }
    }
}

/// A metric outside its plausible range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum PlausibilityWarning {
    /// |NPV| above the limit.
    Npv {
        /// Computed NPV.
        value: f64,
        /// Limit on |NPV|.
        limit: f64,
    },
    /// IRR outside `[min, max]`.
    Irr {
        /// Computed IRR.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Payback longer than the limit.
    Payback {
        /// Computed payback.
        value: f64,
        /// Limit.
        limit: f64,
    },
    /// Profitability index outside `[min, max]`.
    ProfitabilityIndex {
        /// Computed index.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

impl fmt::Display for PlausibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Npv { value, limit } => write!(f, "NPV {value:.2} exceeds ±{limit}"),
            Self::Irr { value, min, max } => {
                write!(f, "IRR {value:.4} outside [{min}, {max}]")
            }
            Self::Payback { value, limit } => {
                write!(f, "payback {value:.2} periods exceeds {limit}")
            }
            Self::ProfitabilityIndex { value, min, max } => {
                write!(f, "profitability index {value:.4} outside [{min}, {max}]")
            }
        }
    }
}

/// Checks each metric against `bounds`.
///
/// Metrics without a value (not computable IRR, never recovered payback,
/// missing PI) are not checked.
pub fn check_plausibility(
    metrics: &FinancialMetrics,
    bounds: &PlausibilityBounds,
) -> Vec<PlausibilityWarning> {
    let mut warnings = Vec::new();

    if metrics.npv.abs() > bounds.max_abs_npv {
        warnings.push(PlausibilityWarning::Npv {
            value: metrics.npv,
            limit: bounds.max_abs_npv,
        });
    }

    if let Some(irr) = metrics.irr.rate() {
        if irr < bounds.min_irr || irr > bounds.max_irr {
            warnings.push(PlausibilityWarning::Irr {
                value: irr,
                min: bounds.min_irr,
                max: bounds.max_irr,
            });
        }
    }

    if let Some(periods) = metrics.payback.periods() {
        if periods > bounds.max_payback {
            warnings.push(PlausibilityWarning::Payback {
                value: periods,
                limit: bounds.max_payback,
            });
        }
    }

    if let Some(pi) = metrics.profitability_index {
        if pi < bounds.min_profitability_index || pi > bounds.max_profitability_index {
            warnings.push(PlausibilityWarning::ProfitabilityIndex {
                value: pi,
                min: bounds.min_profitability_index,
                max: bounds.max_profitability_index,
            });
        }
    }

    for warning in &warnings {
        warn!("implausible metric: {warning}");
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use capbudget_core::types::{IrrMethod, IrrOutcome, IrrSolution, NotComputableReason, Payback};

    fn metrics(npv: f64, irr: Option<f64>, payback: Option<f64>, pi: Option<f64>) -> FinancialMetrics {
        FinancialMetrics {
            npv,
            irr: match irr {
                Some(rate) => IrrOutcome::Rate(IrrSolution::new(
                    rate,
                    IrrMethod::Newton {
                        seed: 0.1,
                        iterations: 3,
                    },
                )),
                None => IrrOutcome::NotComputable {
                    reason: NotComputableReason::NoConvergence,
                },
            },
            payback: payback.map_or(Payback::NeverRecovered, |periods| Payback::Recovered {
                periods,
            }),
            profitability_index: pi,
        }
    }

    #[test]
    fn test_plausible_metrics_pass() {
        let m = metrics(150.0, Some(0.12), Some(3.5), Some(1.15));
        assert!(check_plausibility(&m, &PlausibilityBounds::default()).is_empty());
    }

    #[test]
    fn test_every_bound_reported() {
        let m = metrics(2e7, Some(3.0), Some(25.0), Some(12.0));
        let warnings = check_plausibility(&m, &PlausibilityBounds::default());

        assert_eq!(warnings.len(), 4);
        assert!(matches!(warnings[0], PlausibilityWarning::Npv { .. }));
        assert!(matches!(warnings[1], PlausibilityWarning::Irr { .. }));
        assert!(matches!(warnings[2], PlausibilityWarning::Payback { .. }));
        assert!(matches!(
            warnings[3],
            PlausibilityWarning::ProfitabilityIndex { .. }
        ));
    }

    #[test]
    fn test_missing_values_skipped() {
        let m = metrics(-500.0, None, None, None);
        assert!(check_plausibility(&m, &PlausibilityBounds::default()).is_empty());
    }

    #[test]
    fn test_negative_irr_below_floor() {
        let m = metrics(-900.0, Some(-0.6), None, Some(0.1));
        let warnings = check_plausibility(&m, &PlausibilityBounds::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].to_string().starts_with("IRR -0.6000"));
    }
}
