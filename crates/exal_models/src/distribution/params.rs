//! Parameter types for the generalised asymmetric Laplace family.
//!
//! - [`GalParams`]: user-facing `(p0, mu, sigma, gamma)`
//! - [`GammaBounds`]: valid open interval for `gamma` given `p0`
//! - [`CanonicalShape`]: internal `(p, alpha)` used by every formula

use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_GAMMA, DEFAULT_MU, DEFAULT_P0, DEFAULT_SIGMA, EPSILON};
use super::error::GalError;

/// User-facing specification of one distribution instance.
///
/// # Examples
/// ```
/// use exal_models::distribution::GalParams;
///
/// let params = GalParams::default();
/// assert_eq!((params.p0, params.mu, params.sigma, params.gamma), (0.5, 0.0, 1.0, 0.0));
///
/// let skewed = GalParams::default().with_gamma(0.5).with_sigma(2.0);
/// assert_eq!(skewed.gamma, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalParams {
    /// Baseline skew probability, in (0, 1)
    pub p0: f64,
    /// Location
    pub mu: f64,
    /// Scale, strictly positive
    pub sigma: f64,
    /// Skewness control, inside the gamma bounds of `p0`
    pub gamma: f64,
}

impl Default for GalParams {
    fn default() -> Self {
        Self {
            p0: DEFAULT_P0,
            mu: DEFAULT_MU,
            sigma: DEFAULT_SIGMA,
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl GalParams {
    /// Creates a parameter set. No validation is performed here.
    pub fn new(p0: f64, mu: f64, sigma: f64, gamma: f64) -> Self {
        Self {
            p0,
            mu,
            sigma,
            gamma,
        }
    }

    /// Returns a copy with `p0` replaced.
    pub fn with_p0(mut self, p0: f64) -> Self {
        self.p0 = p0;
        self
    }

    /// Returns a copy with `mu` replaced.
    pub fn with_mu(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    /// Returns a copy with `sigma` replaced.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Returns a copy with `gamma` replaced.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Checks `sigma > 0`.
    ///
    /// # Errors
    /// `GalError::InvalidParameter` naming `sigma`.
    pub fn validate_scale(&self) -> Result<(), GalError> {
        if self.sigma > 0.0 && self.sigma.is_finite() {
            Ok(())
        } else {
            Err(GalError::InvalidParameter {
                name: "sigma",
                value: self.sigma,
                constraint: "must be strictly positive and finite",
            })
        }
    }
}

/// Checks `p0 ∈ (0, 1)`.
///
/// # Errors
/// `GalError::InvalidParameter` naming `p0`.
pub fn validate_p0(p0: f64) -> Result<(), GalError> {
    if p0 > 0.0 && p0 < 1.0 {
        Ok(())
    } else {
        Err(GalError::InvalidParameter {
            name: "p0",
            value: p0,
            constraint: "must be in the range (0, 1)",
        })
    }
}

/// Open interval `(lower, upper)` of admissible `gamma` values for one `p0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GammaBounds {
    /// Lower bound `L` (negative)
    pub lower: f64,
    /// Upper bound `U` (positive)
    pub upper: f64,
}

impl GammaBounds {
    /// Returns `true` when `lower < gamma < upper`.
    #[inline]
    pub fn contains(&self, gamma: f64) -> bool {
        self.lower < gamma && gamma < self.upper
    }
}

/// Canonical shape `(p, alpha)` of a GAL law.
///
/// `alpha == 0` is the plain asymmetric Laplace sub-family with `p == p0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalShape {
    /// Skew probability, in (0, 1)
    pub p: f64,
    /// Skew shape; its sign matches the sign of `gamma`
    pub alpha: f64,
}

impl CanonicalShape {
    /// Shape of the plain asymmetric Laplace law with skew probability `p`.
    pub fn asymmetric_laplace(p: f64) -> Self {
        Self { p, alpha: 0.0 }
    }

    /// Returns `true` when `|alpha| < EPSILON`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.alpha.abs() < EPSILON
    }
}
