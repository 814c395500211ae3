//! The `d`/`p`/`q`/`r` operations.
//!
//! Each operation validates its inputs, maps the parameters and evaluates in
//! a single call. The free functions use the default configuration;
//! [`GalEngine`] carries an explicit [`ExalConfig`].

use super::bounds::GammaBoundSolver;
use super::error::GalError;
use super::gal::GalDistribution;
use super::params::{GalParams, GammaBounds};
use super::quantile::validate_probability;
use crate::config::ExalConfig;
use crate::rng::BaseRng;

/// Operations bound to one engine configuration.
///
/// # Examples
///
/// ```rust
/// use exal_models::config::ExalConfig;
/// use exal_models::distribution::{GalEngine, GalParams};
///
/// let config = ExalConfig::builder().quantile_tolerance(1e-12).build().unwrap();
/// let engine = GalEngine::new(config).unwrap();
/// let params = GalParams::default().with_gamma(0.5);
///
/// let x = engine.qexal(0.8, &params, true, false).unwrap();
/// let p = engine.pexal(x, &params, true, false).unwrap();
/// assert!((p - 0.8).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GalEngine {
    config: ExalConfig,
}

impl GalEngine {
    /// Creates an engine with the given configuration.
    ///
    /// # Errors
    /// `GalError::InvalidConfig` if `config` fails [`ExalConfig::validate`].
    pub fn new(config: ExalConfig) -> Result<Self, GalError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &ExalConfig {
        &self.config
    }

    /// Builds a [`GalDistribution`] under this configuration.
    ///
    /// # Errors
    /// See [`GalDistribution::new`].
    pub fn distribution(&self, params: &GalParams) -> Result<GalDistribution, GalError> {
        GalDistribution::with_config(*params, &self.config)
    }

    /// Density at `x`, or its natural log when `log` is set.
    ///
    /// # Errors
    /// See [`GalDistribution::new`].
    pub fn dexal(&self, x: f64, params: &GalParams, log: bool) -> Result<f64, GalError> {
        let dist = self.distribution(params)?;
        Ok(if log { dist.ln_pdf(x) } else { dist.pdf(x) })
    }

    /// `P(X ≤ q)`, or `P(X > q)` when `lower_tail` is false, optionally on
    /// the log scale.
    ///
    /// # Errors
    /// See [`GalDistribution::new`].
    pub fn pexal(
        &self,
        q: f64,
        params: &GalParams,
        lower_tail: bool,
        log_p: bool,
    ) -> Result<f64, GalError> {
        let dist = self.distribution(params)?;
        let prob = if lower_tail { dist.cdf(q) } else { dist.sf(q) };
        Ok(if log_p { prob.ln() } else { prob })
    }

    /// Quantile for `prob`.
    ///
    /// With `log_p` the input is a log-probability and is exponentiated
    /// before validation. With `lower_tail == false` the input is an upper
    /// tail probability. Returns NaN, after logging a warning, when the
    /// inversion does not converge.
    ///
    /// # Errors
    /// - `GalError::InvalidParameter` for `sigma` or for `prob ∉ (0, 1)`
    /// - the parameter errors of [`GalDistribution::new`]
    pub fn qexal(
        &self,
        prob: f64,
        params: &GalParams,
        lower_tail: bool,
        log_p: bool,
    ) -> Result<f64, GalError> {
        params.validate_scale()?;

        let prob = if log_p { prob.exp() } else { prob };
        validate_probability(prob)?;
        let prob = if lower_tail { prob } else { 1.0 - prob };

        let dist = self.distribution(params)?;
        Ok(dist.quantile(prob)?.value)
    }

    /// `n` variates drawn from `rng`.
    ///
    /// # Errors
    /// - `GalError::InvalidParameter` for `sigma`
    /// - `GalError::InvalidSampleSize` if `n == 0`
    /// - the parameter errors of [`GalDistribution::new`]
    pub fn rexal<R: BaseRng + ?Sized>(
        &self,
        n: usize,
        params: &GalParams,
        rng: &mut R,
    ) -> Result<Vec<f64>, GalError> {
        params.validate_scale()?;
        if n == 0 {
            return Err(GalError::InvalidSampleSize { n });
        }
        self.distribution(params)?.sample_n(n, rng)
    }

    /// Open interval of admissible `gamma` for `p0`.
    ///
    /// # Errors
    /// See [`GammaBoundSolver::bounds`].
    pub fn gamma_bounds(&self, p0: f64) -> Result<GammaBounds, GalError> {
        GammaBoundSolver::new(self.config.bounds).bounds(p0)
    }
}

/// Density of the GAL law at `x`, or its natural log when `log` is set.
///
/// # Examples
/// ```
/// use exal_models::distribution::{dexal, GalParams};
///
/// assert_eq!(dexal(0.0, &GalParams::default(), false).unwrap(), 0.25);
/// ```
///
/// # Errors
/// Domain errors for `sigma`, `p0` and `gamma`, and bound-solver failures.
pub fn dexal(x: f64, params: &GalParams, log: bool) -> Result<f64, GalError> {
    GalEngine::default().dexal(x, params, log)
}

/// Cumulative probability of the GAL law at `q`.
///
/// # Errors
/// Domain errors for `sigma`, `p0` and `gamma`, and bound-solver failures.
pub fn pexal(q: f64, params: &GalParams, lower_tail: bool, log_p: bool) -> Result<f64, GalError> {
    GalEngine::default().pexal(q, params, lower_tail, log_p)
}

/// Quantile of the GAL law. NaN when inversion does not converge.
///
/// # Examples
/// ```
/// use exal_models::distribution::{qexal, GalParams};
///
/// // F(mu) = p0 for every gamma
/// let params = GalParams::new(0.3, 2.0, 1.0, -0.2);
/// assert!((qexal(0.3, &params, true, false).unwrap() - 2.0).abs() < 1e-6);
/// ```
///
/// # Errors
/// Domain errors for `sigma`, `prob`, `p0` and `gamma`, and bound-solver
/// failures.
pub fn qexal(prob: f64, params: &GalParams, lower_tail: bool, log_p: bool) -> Result<f64, GalError> {
    GalEngine::default().qexal(prob, params, lower_tail, log_p)
}

/// `n` GAL variates drawn from `rng`.
///
/// # Examples
/// ```
/// use exal_models::distribution::{rexal, GalParams};
/// use exal_models::rng::ExalRng;
///
/// let mut rng = ExalRng::from_seed(7);
/// let draws = rexal(10, &GalParams::default().with_gamma(0.5), &mut rng).unwrap();
/// assert_eq!(draws.len(), 10);
/// ```
///
/// # Errors
/// Domain errors for `sigma`, `n`, `p0` and `gamma`, and bound-solver
/// failures.
pub fn rexal<R: BaseRng + ?Sized>(
    n: usize,
    params: &GalParams,
    rng: &mut R,
) -> Result<Vec<f64>, GalError> {
    GalEngine::default().rexal(n, params, rng)
}

/// Open interval `(L, U)` of admissible `gamma` for `p0`.
///
/// # Examples
/// ```
/// use exal_models::distribution::get_gamma_bounds;
///
/// let bounds = get_gamma_bounds(0.5).unwrap();
/// assert!((bounds.lower + bounds.upper).abs() < 1e-12);
/// ```
///
/// # Errors
/// Domain error for `p0`, and bound-solver failures.
pub fn get_gamma_bounds(p0: f64) -> Result<GammaBounds, GalError> {
    GalEngine::default().gamma_bounds(p0)
}
