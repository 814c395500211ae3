//! Numerical constants shared by the distribution engines.

/// Magnitude of `alpha` below which density evaluation, quantile inversion
/// and sampling fall back to the plain asymmetric Laplace law.
pub const EPSILON: f64 = 1e-20;

/// Magnitude of `alpha` below which the CDF falls back to the plain
/// asymmetric Laplace law.
pub const CDF_ALPHA_TOLERANCE: f64 = 1e-10;

/// Magnitude of `gamma` treated as exactly zero by the parameter mapping.
pub const GAMMA_ZERO_TOLERANCE: f64 = 1e-10;

/// Default baseline skew probability.
pub const DEFAULT_P0: f64 = 0.5;

/// Default location.
pub const DEFAULT_MU: f64 = 0.0;

/// Default scale.
pub const DEFAULT_SIGMA: f64 = 1.0;

/// Default skewness control.
pub const DEFAULT_GAMMA: f64 = 0.0;
