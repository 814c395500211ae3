//! Error types for distribution operations.
//!
//! This module provides:
//! - `GalError`: Fatal errors raised before or during evaluation
//! - `ConvergenceWarning`: Non-fatal diagnostic attached to quantile results

use std::fmt;

use exal_core::types::SolverError;
use thiserror::Error;

/// Generalised asymmetric Laplace errors.
///
/// Every variant carries the offending values so that the message alone is
/// enough to reproduce the failure.
///
/// # Variants
/// - `InvalidParameter`: A scalar argument violates its documented domain
/// - `GammaOutOfBounds`: `gamma` lies outside the open interval `(L, U)`
/// - `InvalidSampleSize`: Zero draws requested
/// - `RootFinding`: The gamma bound solver failed for this `p0`
/// - `BoundsInvalid`: The computed bounds are not ordered
/// - `InvalidConfig`: Engine configuration rejected
///
/// # Examples
/// ```
/// use exal_models::distribution::GalError;
///
/// let err = GalError::GammaOutOfBounds { gamma: 2.0, lower: -1.09, upper: 1.09 };
/// assert!(err.is_domain_error());
/// assert!(format!("{}", err).contains("(-1.09, 1.09)"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GalError {
    /// A scalar argument is outside its domain.
    #[error("Invalid {name} = {value}: {constraint}")]
    InvalidParameter {
        /// Parameter name as it appears in the public API
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Human-readable domain requirement
        constraint: &'static str,
    },

    /// `gamma` outside the valid range for the given `p0`.
    #[error("gamma = {gamma} is out of bounds, allowed range: ({lower}, {upper})")]
    GammaOutOfBounds {
        /// The rejected skewness control
        gamma: f64,
        /// Lower bound `L`
        lower: f64,
        /// Upper bound `U`
        upper: f64,
    },

    /// Non-positive number of draws.
    #[error("Invalid sample size n = {n}: must be a positive integer")]
    InvalidSampleSize {
        /// Requested number of draws
        n: usize,
    },

    /// Root finding for the gamma bounds failed.
    #[error("Unable to determine valid gamma bounds for p0 = {p0}: {source}")]
    RootFinding {
        /// Baseline skew probability being solved for
        p0: f64,
        /// Underlying solver failure
        #[source]
        source: SolverError,
    },

    /// Computed bounds violate `L < U`.
    #[error("Invalid gamma bounds for p0 = {p0}: L = {lower}, U = {upper}")]
    BoundsInvalid {
        /// Baseline skew probability
        p0: f64,
        /// Computed lower bound
        lower: f64,
        /// Computed upper bound
        upper: f64,
    },

    /// Engine configuration rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GalError {
    /// Returns `true` for violations of a documented input precondition
    /// (`p0`, `sigma`, `gamma`, `prob` or `n`).
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            GalError::InvalidParameter { .. }
                | GalError::GammaOutOfBounds { .. }
                | GalError::InvalidSampleSize { .. }
        )
    }
}

/// Non-fatal report that quantile inversion did not converge.
///
/// The accompanying quantile value is NaN; execution continues.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceWarning {
    /// Target probability being inverted
    pub probability: f64,
    /// Iterations spent before giving up
    pub iterations: usize,
    /// Lower end of the search bracket
    pub lower: f64,
    /// Upper end of the search bracket
    pub upper: f64,
    /// Solver diagnostic
    pub reason: String,
}

impl fmt::Display for ConvergenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "qexal: bisection did not converge for prob = {} on [{}, {}] after {} iterations ({}); \
             try increasing `max_iterations` or adjusting `tolerance`",
            self.probability, self.lower, self.upper, self.iterations, self.reason
        )
    }
}
