//! Aggregated metrics.

use serde::{Deserialize, Serialize};

use super::{IrrOutcome, Payback};

/// The four headline metrics for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Net present value at the project's discount rate.
    pub npv: f64,
    /// Internal rate of return.
    pub irr: IrrOutcome,
    /// Undiscounted payback period.
    pub payback: Payback,
    /// Present value of inflows divided by the investment. `None` when the
    /// investment is zero.
    pub profitability_index: Option<f64>,
}

impl FinancialMetrics {
    /// True if the project adds value at its discount rate.
    #[must_use]
    pub fn is_value_creating(&self) -> bool {
        self.npv > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NotComputableReason;

    #[test]
    fn test_serialize_shape() {
        let metrics = FinancialMetrics {
            npv: -21.04,
            irr: IrrOutcome::NotComputable {
                reason: NotComputableReason::NoConvergence,
            },
            payback: Payback::NeverRecovered,
            profitability_index: None,
        };
        assert!(!metrics.is_value_creating());

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["irr"]["status"], "not_computable");
        assert_eq!(json["payback"]["status"], "never_recovered");
        assert!(json["profitability_index"].is_null());

        let back: FinancialMetrics = serde_json::from_value(json).unwrap();
        assert_eq!(back, metrics);
    }
}
