//! Sign-change scanning over a uniform grid.
//!
//! Used to find every root of a function inside a finite interval, which
//! Newton-Raphson alone cannot do: it converges to at most one root and may
//! miss the others entirely.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::solvers::{brent, SolverConfig, SolverResult};

/// An interval `[lower, upper]` on which a function changes sign.
///
/// A degenerate bracket (`lower == upper`) marks a grid point where the
/// function is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Lower end of the interval.
    pub lower: f64,
    /// Upper end of the interval.
    pub upper: f64,
}

impl Bracket {
    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Scans `f` on `points + 1` equally spaced nodes of `[lower, upper]` and
/// returns every sub-interval whose endpoints have opposite signs.
///
/// Nodes where `f` is not finite break the chain: no bracket is formed across
/// them. Brackets are returned in increasing order.
///
/// # Example
///
/// ```rust
/// use capbudget_math::solvers::scan_brackets;
///
/// let f = |x: f64| (x - 1.0) * (x - 3.0);
/// let brackets = scan_brackets(f, 0.0, 4.0, 40).unwrap();
/// assert_eq!(brackets.len(), 2);
/// ```
pub fn scan_brackets<F>(f: F, lower: f64, upper: f64, points: usize) -> MathResult<Vec<Bracket>>
where
    F: Fn(f64) -> f64,
{
    if points < 2 {
        return Err(MathError::invalid_input(format!(
            "scan needs at least 2 intervals, got {points}"
        )));
    }
    if lower.is_nan() || upper.is_nan() || lower >= upper {
        return Err(MathError::invalid_input(format!(
            "scan interval [{lower}, {upper}] is empty"
        )));
    }

    let step = (upper - lower) / points as f64;
    let mut brackets = Vec::new();
    let mut previous: Option<(f64, f64)> = None;

    for k in 0..=points {
        // Pin the last node to `upper` to avoid accumulated rounding
        let x = if k == points {
            upper
        } else {
            lower + step * k as f64
        };
        let fx = f(x);

        if !fx.is_finite() {
            previous = None;
            continue;
        }

        if fx == 0.0 {
            brackets.push(Bracket { lower: x, upper: x });
        } else if let Some((px, pfx)) = previous {
            if pfx * fx < 0.0 {
                brackets.push(Bracket {
                    lower: px,
                    upper: x,
                });
            }
        }

        previous = Some((x, fx));
    }

    debug!(
        "scanned [{lower}, {upper}] with {points} intervals: {} sign change(s)",
        brackets.len()
    );

    Ok(brackets)
}

/// Finds every root of `f` in `[lower, upper]` detectable on the scan grid,
/// refining each bracket with Brent's method.
///
/// Two roots closer together than one grid step with no sign change between
/// nodes (a double root, or a pair inside one cell) are not detected.
pub fn roots_in_range<F>(
    f: F,
    lower: f64,
    upper: f64,
    points: usize,
    config: &SolverConfig,
) -> MathResult<Vec<SolverResult>>
where
    F: Fn(f64) -> f64,
{
    let brackets = scan_brackets(&f, lower, upper, points)?;

    let mut roots = Vec::with_capacity(brackets.len());
    for bracket in brackets {
        match brent(&f, bracket.lower, bracket.upper, config) {
            Ok(result) => roots.push(result),
            Err(err) => debug!(
                "brent failed on [{}, {}]: {err}",
                bracket.lower, bracket.upper
            ),
        }
    }

    Ok(roots)
}
