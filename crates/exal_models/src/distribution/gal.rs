//! Validated GAL distribution instance.

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::Distribution;
use tracing::debug;

use super::bounds::GammaBoundSolver;
use super::cdf::shape_cdf;
use super::density::shape_density;
use super::error::GalError;
use super::mapper::ParameterMapper;
use super::params::{CanonicalShape, GalParams, GammaBounds};
use super::quantile::{QuantileResult, QuantileSolver};
use super::sampler::Sampler;
use crate::config::ExalConfig;
use crate::rng::BaseRng;

/// A generalised asymmetric Laplace law with its derived quantities cached.
///
/// Construction validates `sigma`, computes the gamma bounds for `p0` and
/// maps `(gamma, p0)` to the canonical shape once. Every evaluation after
/// that is a closed-form expression or a bounded bisection.
///
/// # Examples
///
/// ```rust
/// use exal_models::distribution::{GalDistribution, GalParams};
/// use exal_models::rng::ExalRng;
///
/// let dist = GalDistribution::new(GalParams::default().with_gamma(0.5)).unwrap();
///
/// // F(mu) = p0
/// assert!((dist.cdf(0.0) - 0.5).abs() < 1e-12);
///
/// let q = dist.quantile(0.9).unwrap();
/// assert!((dist.cdf(q.value) - 0.9).abs() < 1e-8);
///
/// let mut rng = ExalRng::from_seed(42);
/// let draws = dist.sample_n(1_000, &mut rng).unwrap();
/// assert_eq!(draws.len(), 1_000);
/// ```
#[derive(Debug, Clone)]
pub struct GalDistribution {
    params: GalParams,
    bounds: GammaBounds,
    shape: CanonicalShape,
    quantile_solver: QuantileSolver,
}

impl GalDistribution {
    /// Builds a distribution with the default engine configuration.
    ///
    /// # Errors
    /// - `GalError::InvalidParameter` for `sigma` or `p0` out of domain
    /// - `GalError::GammaOutOfBounds` unless `L < gamma < U`
    /// - `GalError::RootFinding` / `GalError::BoundsInvalid` from the bound solver
    pub fn new(params: GalParams) -> Result<Self, GalError> {
        Self::with_config(params, &ExalConfig::default())
    }

    /// Builds a distribution with an explicit engine configuration.
    ///
    /// # Errors
    /// `GalError::InvalidConfig` if `config` fails [`ExalConfig::validate`],
    /// otherwise the errors of [`new`](Self::new).
    pub fn with_config(params: GalParams, config: &ExalConfig) -> Result<Self, GalError> {
        config.validate()?;
        params.validate_scale()?;

        let mapper = ParameterMapper::new(GammaBoundSolver::new(config.bounds));
        let (shape, bounds) = mapper.map_with_bounds(params.gamma, params.p0)?;
        debug!(
            p0 = params.p0,
            gamma = params.gamma,
            p = shape.p,
            alpha = shape.alpha,
            "mapped GAL parameters"
        );

        Ok(Self {
            params,
            bounds,
            shape,
            quantile_solver: QuantileSolver::new(config.quantile),
        })
    }

    /// User-facing parameters.
    #[inline]
    pub fn params(&self) -> &GalParams {
        &self.params
    }

    /// Gamma bounds for this `p0`.
    #[inline]
    pub fn bounds(&self) -> &GammaBounds {
        &self.bounds
    }

    /// Canonical `(p, alpha)`.
    #[inline]
    pub fn shape(&self) -> &CanonicalShape {
        &self.shape
    }

    /// Density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        shape_density(self.standardise(x), &self.shape) / self.params.sigma
    }

    /// Natural log of the density; `-∞` where the density is zero.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// `P(X ≤ x)`.
    pub fn cdf(&self, x: f64) -> f64 {
        shape_cdf(self.standardise(x), &self.shape)
    }

    /// `P(X > x)`.
    pub fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Lower-tail quantile.
    ///
    /// # Errors
    /// `GalError::InvalidParameter` if `prob ∉ (0, 1)`. Non-convergence is
    /// reported through [`QuantileResult::warning`] instead.
    pub fn quantile(&self, prob: f64) -> Result<QuantileResult, GalError> {
        self.quantile_solver
            .invert(prob, self.params.mu, self.params.sigma, &self.shape)
    }

    /// Sampler bound to this distribution.
    #[inline]
    pub fn sampler(&self) -> Sampler {
        Sampler::new(self.shape, self.params.mu, self.params.sigma)
    }

    /// Draws `n` variates.
    ///
    /// # Errors
    /// `GalError::InvalidSampleSize` if `n == 0`.
    pub fn sample_n<R: BaseRng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, GalError> {
        self.sampler().sample_n(n, rng)
    }

    /// Mean, `mu + sigma·((1-2p)/(p(1-p)) + alpha·√(2/π))`.
    pub fn mean(&self) -> f64 {
        let CanonicalShape { p, alpha } = self.shape;
        let q = 1.0 - p;
        let standard = (q - p) / (p * q) + alpha * (2.0 / PI).sqrt();
        self.params.mu + self.params.sigma * standard
    }

    /// Variance, `sigma²·((1-2p+2p²)/(p²(1-p)²) + alpha²·(1-2/π))`.
    pub fn variance(&self) -> f64 {
        let CanonicalShape { p, alpha } = self.shape;
        let q = 1.0 - p;
        let laplace = (p * p + q * q) / (p * p * q * q);
        let half_normal = alpha * alpha * (1.0 - 2.0 / PI);
        self.params.sigma * self.params.sigma * (laplace + half_normal)
    }

    #[inline]
    fn standardise(&self, x: f64) -> f64 {
        (x - self.params.mu) / self.params.sigma
    }
}

impl Distribution<f64> for GalDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler().draw(rng)
    }
}
