//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson restricted to an admissible domain.
///
/// Each iteration:
///
/// 1. fails with [`MathError::DivisionByZero`] when `|f'(x)| < min_derivative`,
/// 2. computes `x' = x - f(x) / f'(x)` and fails with [`MathError::OutOfDomain`]
///    when `x'` is non-finite or below `domain.0`,
/// 3. accepts `x'` when `|x' - x| < tolerance` and `x' <= domain.1`,
/// 4. otherwise continues from `x'` (an iterate above the upper bound is not
///    rejected, it simply cannot be accepted).
///
/// Convergence is judged on the step only, never on the residual.
///
/// # Example
///
/// ```rust
/// use capbudget_math::solvers::{newton_raphson_bounded, SolverConfig};
///
/// let f = |r: f64| -1000.0 + 1200.0 / (1.0 + r);
/// let df = |r: f64| -1200.0 / (1.0 + r).powi(2);
///
/// let config = SolverConfig::new(1e-4, 100);
/// let result = newton_raphson_bounded(f, df, 0.1, (-0.99, 10.0), 1e-10, &config).unwrap();
/// assert!((result.root - 0.2).abs() < 1e-6);
/// ```
pub fn newton_raphson_bounded<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    domain: (f64, f64),
    min_derivative: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let (lower, upper) = domain;
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        let dfx = df(x);

        if dfx.is_nan() || dfx.abs() < min_derivative {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let next = x - fx / dfx;

        if !next.is_finite() || next < lower {
            return Err(MathError::out_of_domain(next, lower, upper));
        }

        if (next - x).abs() < config.tolerance && next <= upper {
            return Ok(SolverResult {
                root: next,
                iterations: iteration + 1,
                residual: f(next),
            });
        }

        x = next;
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}
