//! Failures of the bracketed root finder.
//!
//! Callers in the distribution layer either propagate these (gamma bounds)
//! or turn them into a NaN result with a warning (quantile inversion).

use thiserror::Error;

/// Why [`BisectionSolver`](crate::math::solvers::BisectionSolver) gave up.
///
/// `MaxIterationsExceeded` and `BracketExhausted` carry the work spent so
/// callers can report it. `NoBracket` carries the endpoints that failed the
/// sign test.
///
/// # Examples
/// ```
/// use exal_core::types::SolverError;
///
/// let err = SolverError::NoBracket { a: -5.0, b: 5.0 };
/// assert_eq!(err.to_string(), "No bracket: f(-5) and f(5) have same sign");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Iteration cap reached with the tolerance still unmet.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Iterations performed
        iterations: usize,
    },

    /// `f(a)` and `f(b)` share a sign, or one of them is NaN.
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Lower endpoint
        a: f64,
        /// Upper endpoint
        b: f64,
    },

    /// The bracket shrank to adjacent floating-point values without meeting
    /// the residual tolerance.
    #[error("Bracket exhausted at x = {x} after {iterations} iterations")]
    BracketExhausted {
        /// Final midpoint
        x: f64,
        /// Number of iterations performed
        iterations: usize,
    },

    /// The objective returned NaN inside the bracket.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}
