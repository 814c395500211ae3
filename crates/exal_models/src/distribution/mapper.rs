//! Mapping from the user-facing `(gamma, p0)` to the canonical `(p, alpha)`.
//!
//! With `g = g(γ)`, `neg = [γ < 0]` and `pos = [γ > 0]`:
//!
//! p = neg + (p0 - neg) / g
//! α = |γ| / (pos - p)
//!
//! This is the analytic inverse that pins `F(mu) = p0` for every `gamma`.

use super::bounds::{g_gamma, GammaBoundSolver};
use super::constants::GAMMA_ZERO_TOLERANCE;
use super::error::GalError;
use super::params::{validate_p0, CanonicalShape, GammaBounds};

/// Converts `(gamma, p0)` into a [`CanonicalShape`].
#[derive(Debug, Clone, Default)]
pub struct ParameterMapper {
    bound_solver: GammaBoundSolver,
}

impl ParameterMapper {
    /// Creates a mapper backed by the given bound solver.
    pub fn new(bound_solver: GammaBoundSolver) -> Self {
        Self { bound_solver }
    }

    /// Returns the bound solver used for validation.
    pub fn bound_solver(&self) -> &GammaBoundSolver {
        &self.bound_solver
    }

    /// Maps `(gamma, p0)` to `(p, alpha)`.
    ///
    /// The gamma bounds are computed for every call, including the `gamma == 0`
    /// shortcut.
    ///
    /// # Errors
    /// - `GalError::InvalidParameter` if `p0 ∉ (0, 1)`
    /// - `GalError::RootFinding` / `GalError::BoundsInvalid` from the bound solver
    /// - `GalError::GammaOutOfBounds` unless `L < gamma < U`
    ///
    /// # Examples
    /// ```
    /// use exal_models::distribution::ParameterMapper;
    ///
    /// let mapper = ParameterMapper::default();
    /// let shape = mapper.map(0.0, 0.3).unwrap();
    /// assert_eq!((shape.p, shape.alpha), (0.3, 0.0));
    ///
    /// let shape = mapper.map(0.5, 0.5).unwrap();
    /// assert!(shape.p > 0.5 && shape.alpha > 0.0);
    /// ```
    pub fn map(&self, gamma: f64, p0: f64) -> Result<CanonicalShape, GalError> {
        self.map_with_bounds(gamma, p0).map(|(shape, _)| shape)
    }

    /// Like [`map`](Self::map), also returning the bounds that were checked.
    pub fn map_with_bounds(
        &self,
        gamma: f64,
        p0: f64,
    ) -> Result<(CanonicalShape, GammaBounds), GalError> {
        validate_p0(p0)?;
        let bounds = self.bound_solver.bounds(p0)?;
        let shape = shape_within_bounds(gamma, p0, &bounds)?;
        Ok((shape, bounds))
    }
}

/// Maps `(gamma, p0)` against precomputed bounds.
///
/// # Errors
/// `GalError::GammaOutOfBounds` unless `gamma` is (numerically) zero or
/// strictly inside `bounds`.
pub fn shape_within_bounds(
    gamma: f64,
    p0: f64,
    bounds: &GammaBounds,
) -> Result<CanonicalShape, GalError> {
    if gamma.abs() < GAMMA_ZERO_TOLERANCE {
        return Ok(CanonicalShape::asymmetric_laplace(p0));
    }

    if !bounds.contains(gamma) {
        return Err(GalError::GammaOutOfBounds {
            gamma,
            lower: bounds.lower,
            upper: bounds.upper,
        });
    }

    let g = g_gamma(gamma);
    let neg = if gamma < 0.0 { 1.0 } else { 0.0 };
    let pos = if gamma > 0.0 { 1.0 } else { 0.0 };

    let p = neg + (p0 - neg) / g;
    let alpha = gamma.abs() / (pos - p);
    Ok(CanonicalShape { p, alpha })
}
