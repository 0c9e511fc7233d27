//! Batch evaluation of independent scenarios.
//!
//! Every scenario is evaluated from its own inputs with no shared state, so
//! with the `parallel` feature the batch runs on rayon's thread pool. Results
//! come back in input order either way.

use serde::{Deserialize, Serialize};

use capbudget_core::types::{FinancialMetrics, ProjectInputs};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::irr::IrrSolverConfig;
use crate::metrics::compute_financial_metrics_with;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A named set of project inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario label, e.g. "optimistic".
    pub name: String,
    /// Inputs to evaluate.
    pub inputs: ProjectInputs,
}

impl Scenario {
    /// Creates a scenario.
    pub fn new(name: impl Into<String>, inputs: ProjectInputs) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }
}

/// Metrics for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario label.
    pub name: String,
    /// Computed metrics.
    pub metrics: FinancialMetrics,
}

/// Evaluates every scenario with the given IRR solver settings.
pub fn evaluate_scenarios(
    scenarios: &[Scenario],
    irr_config: &IrrSolverConfig,
) -> Vec<ScenarioResult> {
    let evaluate = |scenario: &Scenario| ScenarioResult {
        name: scenario.name.clone(),
        metrics: compute_financial_metrics_with(&scenario.inputs, irr_config),
    };

    #[cfg(feature = "parallel")]
    {
        scenarios.par_iter().map(evaluate).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        scenarios.iter().map(evaluate).collect()
    }
}

/// Builders for conventional scenario sets.
pub struct ScenarioSet;

impl ScenarioSet {
    /// Optimistic, neutral and pessimistic cases around `base`, scaling every
    /// cash flow by `1 + spread`, `1` and `1 - spread` respectively.
    ///
    /// # Errors
    ///
    /// `spread` must be finite and in `[0, 1]`.
    pub fn optimistic_neutral_pessimistic(
        base: &ProjectInputs,
        spread: f64,
    ) -> AnalyticsResult<Vec<Scenario>> {
        if !(0.0..=1.0).contains(&spread) {
            return Err(AnalyticsError::InvalidInput(format!(
                "scenario spread {spread} must be between 0 and 1"
            )));
        }

        let scaled = |factor: f64| -> AnalyticsResult<ProjectInputs> {
            Ok(base.with_cash_flows(base.cash_flows().scaled(factor)?))
        };

        Ok(vec![
            Scenario::new("optimistic", scaled(1.0 + spread)?),
            Scenario::new("neutral", base.clone()),
            Scenario::new("pessimistic", scaled(1.0 - spread)?),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use capbudget_core::types::CashFlowSeries;

    fn base() -> ProjectInputs {
        ProjectInputs::new(
            1000.0,
            CashFlowSeries::from_amounts(&[300.0, 400.0, 500.0]).unwrap(),
            0.10,
        )
        .unwrap()
    }

    #[test]
    fn test_three_cases_ordered_by_npv() {
        let scenarios = ScenarioSet::optimistic_neutral_pessimistic(&base(), 0.2).unwrap();
        let results = evaluate_scenarios(&scenarios, &IrrSolverConfig::default());

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["optimistic", "neutral", "pessimistic"]);

        assert!(results[0].metrics.npv > results[1].metrics.npv);
        assert!(results[1].metrics.npv > results[2].metrics.npv);
        assert_relative_eq!(results[1].metrics.npv, -21.036814, epsilon = 1e-6);
    }

    #[test]
    fn test_matches_individual_evaluation() {
        let scenarios = vec![
            Scenario::new("a", base()),
            Scenario::new("b", base().with_discount_rate(0.05).unwrap()),
        ];
        let config = IrrSolverConfig::default();
        let results = evaluate_scenarios(&scenarios, &config);

        for (scenario, result) in scenarios.iter().zip(&results) {
            assert_eq!(
                result.metrics,
                compute_financial_metrics_with(&scenario.inputs, &config)
            );
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(evaluate_scenarios(&[], &IrrSolverConfig::default()).is_empty());
    }

    #[test]
    fn test_invalid_spread() {
        assert!(ScenarioSet::optimistic_neutral_pessimistic(&base(), -0.1).is_err());
        assert!(ScenarioSet::optimistic_neutral_pessimistic(&base(), 1.5).is_err());
        assert!(ScenarioSet::optimistic_neutral_pessimistic(&base(), f64::NAN).is_err());
    }

    #[test]
    fn test_scenario_json() {
        let json = r#"{
            "name": "regional",
            "inputs": {
                "initialInvestment": 500,
                "cashFlows": [{"year": 1, "cashFlow": 600}],
                "discountRate": 0.1
            }
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.name, "regional");
        assert_eq!(scenario.inputs.initial_investment(), 500.0);
    }
}
