//! Bisection root-finding solver.

use super::{SolverConfig, ToleranceMode};
use crate::types::SolverError;
use num_traits::Float;

/// Root returned by [`BisectionSolver::solve`] together with its cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult<T> {
    /// Approximate root.
    pub root: T,
    /// Number of midpoint evaluations performed.
    pub iterations: usize,
}

/// Bracketed bisection root finder.
///
/// Halves a sign-changing bracket `[a, b]` until the configured
/// [`ToleranceMode`] is satisfied. Convergence is linear but guaranteed for
/// any continuous function with a valid bracket, and the iteration cap bounds
/// the work regardless of the tolerance requested.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use exal_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::relative(1e-14, 200));
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!(f(root).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[inline]
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` in the bracket [a, b].
    ///
    /// Convenience wrapper around [`solve`](Self::solve) that discards the
    /// iteration count.
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        self.solve(f, a, b).map(|result| result.root)
    }

    /// Find a root of `f` in the bracket [a, b], reporting the iteration count.
    ///
    /// The endpoints may be given in either order.
    ///
    /// # Returns
    ///
    /// * `Ok(RootResult)` - Root satisfying the configured tolerance
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` do not change sign
    /// * `Err(SolverError::BracketExhausted)` - Absolute tolerance unreachable
    ///   at floating-point resolution
    /// * `Err(SolverError::NumericalInstability)` - `f` returned NaN
    /// * `Err(SolverError::MaxIterationsExceeded)` - Iteration cap reached
    pub fn solve<F>(&self, f: F, a: T, b: T) -> Result<RootResult<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let (mut lo, mut hi) = if a <= b { (a, b) } else { (b, a) };
        let mut f_lo = f(lo);
        let f_hi = f(hi);

        if f_lo == T::zero() {
            return Ok(RootResult {
                root: lo,
                iterations: 0,
            });
        }
        if f_hi == T::zero() {
            return Ok(RootResult {
                root: hi,
                iterations: 0,
            });
        }
        if f_lo.is_nan() || f_hi.is_nan() || (f_lo < T::zero()) == (f_hi < T::zero()) {
            return Err(SolverError::NoBracket {
                a: to_f64(lo),
                b: to_f64(hi),
            });
        }

        let two = T::one() + T::one();
        let tol = self.config.tolerance;

        for iteration in 0..self.config.max_iterations {
            let mid = lo + (hi - lo) / two;

            if self.config.mode == ToleranceMode::RelativeBracket
                && (hi - lo).abs() <= tol * lo.abs().min(hi.abs())
            {
                return Ok(RootResult {
                    root: mid,
                    iterations: iteration,
                });
            }

            // Bracket cannot shrink any further
            if mid <= lo || mid >= hi {
                return match self.config.mode {
                    ToleranceMode::RelativeBracket => Ok(RootResult {
                        root: mid,
                        iterations: iteration,
                    }),
                    ToleranceMode::AbsoluteResidual => Err(SolverError::BracketExhausted {
                        x: to_f64(mid),
                        iterations: iteration,
                    }),
                };
            }

            let f_mid = f(mid);
            if f_mid.is_nan() {
                return Err(SolverError::NumericalInstability(format!(
                    "function returned NaN at x = {}",
                    to_f64(mid)
                )));
            }
            if f_mid == T::zero()
                || (self.config.mode == ToleranceMode::AbsoluteResidual && f_mid.abs() < tol)
            {
                return Ok(RootResult {
                    root: mid,
                    iterations: iteration + 1,
                });
            }

            if (f_mid < T::zero()) == (f_lo < T::zero()) {
                lo = mid;
                f_lo = f_mid;
            } else {
                hi = mid;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
