//! Internal rate of return.
//!
//! The solver runs a bounded Newton-Raphson iteration from each seed in turn
//! and accepts the first one that converges inside `[lower_bound,
//! upper_bound]`. When every seed fails it can fall back to scanning the NPV
//! profile for sign changes and refining them with Brent's method. The same
//! scan reports additional roots when the cash flows change sign more than
//! once.
//!
//! # Example
//!
//! ```rust
//! use capbudget_analytics::irr::{IrrSolver, IrrSolverConfig};
//! use capbudget_core::types::CashFlowSeries;
//!
//! let flows = CashFlowSeries::from_amounts(&[3600.0, -2720.0]).unwrap();
//! let outcome = IrrSolver::new(IrrSolverConfig::default()).solve(1000.0, &flows);
//!
//! let solution = outcome.solution().unwrap();
//! assert!((solution.rate - 0.0789).abs() < 1e-3);
//! assert!(solution.has_multiple_roots());
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use capbudget_core::types::{
    CashFlowSeries, IrrMethod, IrrOutcome, IrrSolution, NotComputableReason, ProjectInputs,
};
use capbudget_core::validation::validate_investment;
use capbudget_math::solvers::{newton_raphson_bounded, roots_in_range, SolverConfig};

use crate::npv::{npv_at_rate, npv_derivative};

/// Seeds tried in order.
pub const DEFAULT_SEEDS: [f64; 8] = [0.10, 0.05, 0.15, 0.20, 0.25, 0.30, 0.40, 0.50];

/// Newton step size below which a seed is considered converged.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Iteration budget per seed.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Derivative magnitude below which a seed is abandoned.
pub const DEFAULT_MIN_DERIVATIVE: f64 = 1e-10;

/// Lowest admissible rate.
pub const DEFAULT_LOWER_BOUND: f64 = -0.99;

/// Highest admissible rate (1000% per period).
pub const DEFAULT_UPPER_BOUND: f64 = 10.0;

/// Grid intervals used by the sign-change scan.
pub const DEFAULT_SCAN_POINTS: usize = 400;

/// Roots closer than this are treated as the same root.
pub const DEFAULT_ROOT_SEPARATION: f64 = 1e-3;

/// Largest |NPV| accepted at a reported rate before it is polished.
pub const DEFAULT_MAX_RESIDUAL: f64 = 1e-2;

/// Tuning for [`IrrSolver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrrSolverConfig {
    /// Starting rates for Newton-Raphson, tried in order.
    pub seeds: Vec<f64>,
    /// Convergence threshold on the Newton step.
    pub tolerance: f64,
    /// Iterations per seed.
    pub max_iterations: u32,
    /// Minimum |dNPV/dr| before a seed is abandoned.
    pub min_derivative: f64,
    /// Lower end of the admissible rate range.
    pub lower_bound: f64,
    /// Upper end of the admissible rate range.
    pub upper_bound: f64,
    /// Scan for a bracketed root when every seed fails.
    pub bracket_fallback: bool,
    /// Scan for and report additional roots.
    pub detect_multiple_roots: bool,
    /// Grid intervals for the scan.
    pub scan_points: usize,
    /// Minimum distance between distinct roots.
    pub root_separation: f64,
    /// Refine a rate whose NPV exceeds `max_residual` in magnitude.
    pub polish_residual: bool,
    /// Residual threshold for polishing.
    pub max_residual: f64,
}

impl Default for IrrSolverConfig {
    fn default() -> Self {
        Self {
            seeds: DEFAULT_SEEDS.to_vec(),
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_derivative: DEFAULT_MIN_DERIVATIVE,
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
            bracket_fallback: true,
            detect_multiple_roots: true,
            scan_points: DEFAULT_SCAN_POINTS,
            root_separation: DEFAULT_ROOT_SEPARATION,
            polish_residual: true,
            max_residual: DEFAULT_MAX_RESIDUAL,
        }
    }
}

impl IrrSolverConfig {
    /// Multi-seed Newton only: no bracket fallback, no root detection and no
    /// polishing.
    ///
    /// Seeds are accepted on the Newton step alone, so with amounts in the
    /// millions the NPV at the returned rate can exceed `max_residual`.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            bracket_fallback: false,
            detect_multiple_roots: false,
            polish_residual: false,
            ..Self::default()
        }
    }

    /// Sets the seed list.
    #[must_use]
    pub fn with_seeds(mut self, seeds: Vec<f64>) -> Self {
        self.seeds = seeds;
        self
    }

    /// Sets the Newton tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the per-seed iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the admissible rate range.
    #[must_use]
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    /// Enables or disables the bracket fallback.
    #[must_use]
    pub fn with_bracket_fallback(mut self, enabled: bool) -> Self {
        self.bracket_fallback = enabled;
        self
    }

    /// Enables or disables multiple-root detection.
    #[must_use]
    pub fn with_root_detection(mut self, enabled: bool) -> Self {
        self.detect_multiple_roots = enabled;
        self
    }

    /// Enables or disables residual polishing.
    #[must_use]
    pub fn with_polishing(mut self, enabled: bool) -> Self {
        self.polish_residual = enabled;
        self
    }

    fn newton_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }
}

/// IRR solver.
///
/// Stateless apart from its configuration; one instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct IrrSolver {
    config: IrrSolverConfig,
}

/// A root found by the scan.
#[derive(Debug, Clone, Copy)]
struct ScannedRoot {
    rate: f64,
    iterations: u32,
}

impl IrrSolver {
    /// Creates a solver.
    #[must_use]
    pub fn new(config: IrrSolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &IrrSolverConfig {
        &self.config
    }

    /// Solves for the rate that zeroes the NPV of `cash_flows` against
    /// `initial_investment`.
    ///
    /// A negative or non-finite investment yields
    /// [`NotComputableReason::InvalidInvestment`].
    pub fn solve(&self, initial_investment: f64, cash_flows: &CashFlowSeries) -> IrrOutcome {
        if validate_investment(initial_investment).is_err() {
            debug!("IRR not computable: invalid investment {initial_investment}");
            return IrrOutcome::NotComputable {
                reason: NotComputableReason::InvalidInvestment,
            };
        }

        let total = cash_flows.total();
        if total <= 0.0 {
            debug!("IRR not computable: total cash flow {total} is not positive");
            return IrrOutcome::NotComputable {
                reason: NotComputableReason::NonPositiveTotal,
            };
        }

        let f = |r: f64| npv_at_rate(initial_investment, cash_flows, r);
        let df = |r: f64| npv_derivative(cash_flows, r);

        let newton = self.newton_search(&f, &df);

        let scan_wanted = if newton.is_some() {
            self.config.detect_multiple_roots
        } else {
            self.config.bracket_fallback
        };
        let scanned = if scan_wanted {
            self.scan_roots(&f)
        } else {
            Vec::new()
        };

        let solution = match newton {
            Some(solution) => solution,
            None if self.config.bracket_fallback => {
                let Some(chosen) = self.nearest_to_first_seed(&scanned) else {
                    debug!("IRR not computable: no seed converged and no sign change found");
                    return IrrOutcome::NotComputable {
                        reason: NotComputableReason::NoConvergence,
                    };
                };
                debug!("IRR {} found by bracket fallback", chosen.rate);
                IrrSolution::new(
                    chosen.rate,
                    IrrMethod::Bracketed {
                        iterations: chosen.iterations,
                    },
                )
            }
            None => {
                debug!("IRR not computable: no seed converged");
                return IrrOutcome::NotComputable {
                    reason: NotComputableReason::NoConvergence,
                };
            }
        };

        let solution = self.polish(&f, &df, solution);
        IrrOutcome::Rate(self.attach_other_roots(solution, &scanned))
    }

    /// Solves for the IRR of a project; the discount rate is ignored.
    pub fn solve_project(&self, inputs: &ProjectInputs) -> IrrOutcome {
        self.solve(inputs.initial_investment(), inputs.cash_flows())
    }

    fn newton_search<F, DF>(&self, f: &F, df: &DF) -> Option<IrrSolution>
    where
        F: Fn(f64) -> f64,
        DF: Fn(f64) -> f64,
    {
        let config = self.config.newton_config();
        let domain = (self.config.lower_bound, self.config.upper_bound);

        for &seed in &self.config.seeds {
            match newton_raphson_bounded(f, df, seed, domain, self.config.min_derivative, &config)
            {
                Ok(result) => {
                    debug!(
                        "IRR {} from seed {seed} in {} iterations",
                        result.root, result.iterations
                    );
                    return Some(IrrSolution::new(
                        result.root,
                        IrrMethod::Newton {
                            seed,
                            iterations: result.iterations,
                        },
                    ));
                }
                Err(err) => debug!("seed {seed} abandoned: {err}"),
            }
        }

        None
    }

    /// Continues Newton with a tight step tolerance from a rate whose NPV is
    /// still above `max_residual`. The refined rate must stay within
    /// `root_separation` of the original and lower the residual.
    fn polish<F, DF>(&self, f: &F, df: &DF, mut solution: IrrSolution) -> IrrSolution
    where
        F: Fn(f64) -> f64,
        DF: Fn(f64) -> f64,
    {
        let residual = f(solution.rate).abs();
        if !self.config.polish_residual || residual < self.config.max_residual {
            return solution;
        }

        let domain = (self.config.lower_bound, self.config.upper_bound);
        match newton_raphson_bounded(
            f,
            df,
            solution.rate,
            domain,
            self.config.min_derivative,
            &SolverConfig::default(),
        ) {
            Ok(result)
                if (result.root - solution.rate).abs() <= self.config.root_separation
                    && result.residual.abs() < residual =>
            {
                debug!(
                    "IRR polished from {} to {} (|NPV| {residual:.3e} -> {:.3e})",
                    solution.rate,
                    result.root,
                    result.residual.abs()
                );
                solution.rate = result.root;
            }
            Ok(result) => debug!("IRR polish rejected: landed on {}", result.root),
            Err(err) => debug!("IRR polish failed: {err}"),
        }
        solution
    }

    fn scan_roots<F>(&self, f: &F) -> Vec<ScannedRoot>
    where
        F: Fn(f64) -> f64,
    {
        let refine = SolverConfig::default();
        let found = match roots_in_range(
            f,
            self.config.lower_bound,
            self.config.upper_bound,
            self.config.scan_points,
            &refine,
        ) {
            Ok(found) => found,
            Err(err) => {
                debug!("NPV scan skipped: {err}");
                return Vec::new();
            }
        };

        let mut roots: Vec<ScannedRoot> = Vec::with_capacity(found.len());
        for result in found {
            let distinct = roots.last().map_or(true, |prev| {
                (result.root - prev.rate).abs() > self.config.root_separation
            });
            if distinct {
                roots.push(ScannedRoot {
                    rate: result.root,
                    iterations: result.iterations,
                });
            }
        }
        roots
    }

    fn nearest_to_first_seed(&self, roots: &[ScannedRoot]) -> Option<ScannedRoot> {
        let anchor = self.config.seeds.first().copied().unwrap_or(DEFAULT_SEEDS[0]);
        roots
            .iter()
            .copied()
            .min_by(|a, b| (a.rate - anchor).abs().total_cmp(&(b.rate - anchor).abs()))
    }

    fn attach_other_roots(&self, mut solution: IrrSolution, scanned: &[ScannedRoot]) -> IrrSolution {
        if !self.config.detect_multiple_roots {
            return solution;
        }

        solution.other_roots = scanned
            .iter()
            .map(|root| root.rate)
            .filter(|rate| (rate - solution.rate).abs() > self.config.root_separation)
            .collect();

        if solution.has_multiple_roots() {
            warn!(
                "NPV has {} roots; reporting {} (others: {:?})",
                solution.other_roots.len() + 1,
                solution.rate,
                solution.other_roots
            );
        }

        solution
    }
}

/// Computes the IRR with the default solver configuration.
///
/// # Example
///
/// ```rust
/// use capbudget_analytics::irr::compute_irr;
/// use capbudget_core::types::CashFlowSeries;
///
/// let flows = CashFlowSeries::from_amounts(&[300.0, 400.0, 500.0]).unwrap();
/// let rate = compute_irr(1000.0, &flows).rate().unwrap();
/// assert!((rate - 0.08896).abs() < 1e-4);
///
/// let losing = CashFlowSeries::from_amounts(&[-200.0, -100.0, -50.0]).unwrap();
/// assert!(!compute_irr(1000.0, &losing).is_computable());
/// ```
pub fn compute_irr(initial_investment: f64, cash_flows: &CashFlowSeries) -> IrrOutcome {
    IrrSolver::default().solve(initial_investment, cash_flows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use capbudget_core::types::CashFlowEntry;

    fn series(amounts: &[f64]) -> CashFlowSeries {
        CashFlowSeries::from_amounts(amounts).unwrap()
    }

    fn reference() -> IrrSolver {
        IrrSolver::new(IrrSolverConfig::reference())
    }

    #[test]
    fn test_three_year_project() {
        let flows = series(&[300.0, 400.0, 500.0]);
        let outcome = compute_irr(1000.0, &flows);

        let solution = outcome.solution().unwrap();
        assert_relative_eq!(solution.rate, 0.0889634, epsilon = 1e-6);
        assert!(matches!(solution.method, IrrMethod::Newton { seed, .. } if seed == 0.10));
        assert!(!solution.has_multiple_roots());
        assert!(npv_at_rate(1000.0, &flows, solution.rate).abs() < 1e-2);
    }

    #[test]
    fn test_known_rates() {
        let cases: [(f64, &[f64], f64); 4] = [
            (1000.0, &[1200.0], 0.2),
            (1000.0, &[500.0, 500.0, 500.0], 0.233752),
            (1000.0, &[400.0, 400.0, 400.0, 400.0], 0.218623),
            (100.0, &[-200.0, 50.0, 300.0], 0.072788),
        ];

        for (investment, amounts, expected) in cases {
            let rate = compute_irr(investment, &series(amounts)).rate().unwrap();
            assert_relative_eq!(rate, expected, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_negative_rate_deterministic() {
        let flows = series(&[-500.0, 100.0, 300.0, 600.0, 900.0]);

        let first = compute_irr(2000.0, &flows);
        let second = compute_irr(2000.0, &flows);

        assert_eq!(first, second);
        assert_relative_eq!(first.rate().unwrap(), -0.065805, epsilon = 1e-5);
        assert!(npv_at_rate(2000.0, &flows, first.rate().unwrap()).abs() < 1e-2);
    }

    #[test]
    fn test_non_positive_total() {
        let outcome = compute_irr(1000.0, &series(&[-200.0, -100.0, -50.0]));
        assert_eq!(
            outcome,
            IrrOutcome::NotComputable {
                reason: NotComputableReason::NonPositiveTotal
            }
        );

        let outcome = compute_irr(0.0, &series(&[]));
        assert!(!outcome.is_computable());
    }

    #[test]
    fn test_multiple_roots_flagged() {
        let outcome = compute_irr(1000.0, &series(&[3600.0, -2720.0]));
        let solution = outcome.solution().unwrap();

        assert_relative_eq!(solution.rate, 0.078890, epsilon = 1e-5);
        assert_eq!(solution.other_roots.len(), 1);
        assert_relative_eq!(solution.other_roots[0], 1.521110, epsilon = 1e-5);
    }

    #[test]
    fn test_reference_mode_ignores_second_root() {
        let outcome = reference().solve(1000.0, &series(&[3600.0, -2720.0]));
        let solution = outcome.solution().unwrap();

        assert_relative_eq!(solution.rate, 0.078890, epsilon = 1e-5);
        assert!(solution.other_roots.is_empty());
    }

    #[test]
    fn test_bracket_fallback() {
        // Every seed either steps below -0.99 or converges far above 10
        let flows = series(&[4615.0, -2778.0]);

        let outcome = compute_irr(10.0, &flows);
        let solution = outcome.solution().unwrap();
        assert!(matches!(solution.method, IrrMethod::Bracketed { .. }));
        assert_relative_eq!(solution.rate, -0.3972626, epsilon = 1e-6);
        assert!(npv_at_rate(10.0, &flows, solution.rate).abs() < 1e-4);

        assert_eq!(
            reference().solve(10.0, &flows),
            IrrOutcome::NotComputable {
                reason: NotComputableReason::NoConvergence
            }
        );
    }

    #[test]
    fn test_rate_outside_domain_not_computable() {
        // True IRR is 499 (49,900%)
        let outcome = compute_irr(10.0, &series(&[5000.0]));
        assert_eq!(
            outcome,
            IrrOutcome::NotComputable {
                reason: NotComputableReason::NoConvergence
            }
        );
    }

    #[test]
    fn test_seed_order_respected() {
        let flows = series(&[3600.0, -2720.0]);
        let solver = IrrSolver::new(IrrSolverConfig::reference().with_seeds(vec![1.4, 0.1]));

        let solution = solver.solve(1000.0, &flows);
        assert_relative_eq!(solution.rate().unwrap(), 1.521110, epsilon = 1e-5);
    }

    #[test]
    fn test_empty_seed_list_uses_fallback() {
        let flows = series(&[300.0, 400.0, 500.0]);
        let solver = IrrSolver::new(IrrSolverConfig::default().with_seeds(Vec::new()));

        let solution = solver.solve(1000.0, &flows);
        assert!(matches!(
            solution.solution().unwrap().method,
            IrrMethod::Bracketed { .. }
        ));
        assert_relative_eq!(solution.rate().unwrap(), 0.0889634, epsilon = 1e-6);
    }

    #[test]
    fn test_large_amounts_zero_npv() {
        let investment = 18_404_800.0;
        let flows = series(&[5_521_440.0, 10_306_688.0, 9_202_400.0, 14_723_840.0]);

        let rate = compute_irr(investment, &flows).rate().unwrap();
        assert!(npv_at_rate(investment, &flows, rate).abs() < DEFAULT_MAX_RESIDUAL);

        // Step-only acceptance lands on the same root, just less precisely
        let unpolished = reference().solve(investment, &flows).rate().unwrap();
        assert_relative_eq!(unpolished, rate, epsilon = 1e-6);
    }

    #[test]
    fn test_gapped_periods() {
        let flows = CashFlowSeries::new(vec![
            CashFlowEntry::new(1, 300.0),
            CashFlowEntry::new(3, 400.0),
            CashFlowEntry::new(5, 600.0),
        ])
        .unwrap();

        let rate = compute_irr(1000.0, &flows).rate().unwrap();
        assert_relative_eq!(rate, 0.081_211_66, epsilon = 1e-6);
        assert!(npv_at_rate(1000.0, &flows, rate).abs() < 1e-2);
    }

    #[test]
    fn test_invalid_investment() {
        let flows = series(&[300.0, 400.0, 500.0]);
        let invalid = IrrOutcome::NotComputable {
            reason: NotComputableReason::InvalidInvestment,
        };

        assert_eq!(compute_irr(f64::NAN, &flows), invalid);
        assert_eq!(compute_irr(-1.0, &flows), invalid);
        assert_eq!(compute_irr(f64::INFINITY, &flows), invalid);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: IrrSolverConfig =
            serde_json::from_str(r#"{"tolerance": 1e-6, "bracket_fallback": false}"#).unwrap();
        assert_eq!(config.tolerance, 1e-6);
        assert!(!config.bracket_fallback);
        assert_eq!(config.seeds, DEFAULT_SEEDS.to_vec());
        assert_eq!(config.scan_points, DEFAULT_SCAN_POINTS);
        assert!(config.polish_residual);
        assert!(!IrrSolverConfig::reference().polish_residual);
    }
}
