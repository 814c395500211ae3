//! Variate generation through the additive mixture representation.
//!
//! A GAL variate is `Y = X + alpha·|Z|` where `X` is an asymmetric Laplace
//! variate with skew probability `p`, obtained by inverting one uniform draw,
//! and `Z` is an independent standard normal. Each draw consumes the uniform
//! first and the normal second. The normal is skipped entirely for the plain
//! asymmetric Laplace shape.

use super::error::GalError;
use super::params::CanonicalShape;
use super::quantile::al_quantile;
use crate::rng::BaseRng;

/// Draws one standardised GAL variate.
///
/// # Examples
/// ```
/// use exal_models::distribution::{sampler::standard_variate, CanonicalShape};
/// use exal_models::rng::ExalRng;
///
/// let mut rng = ExalRng::from_seed(1);
/// let y = standard_variate(&CanonicalShape { p: 0.7, alpha: 1.5 }, &mut rng);
/// assert!(y.is_finite());
/// ```
#[inline]
pub fn standard_variate<R: BaseRng + ?Sized>(shape: &CanonicalShape, rng: &mut R) -> f64 {
    let u = rng.uniform_open01();
    let laplace = al_quantile(u, shape.p);
    if shape.is_degenerate() {
        laplace
    } else {
        laplace + shape.alpha * rng.standard_normal().abs()
    }
}

/// Location-scale GAL sampler with a fixed canonical shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    shape: CanonicalShape,
    mu: f64,
    sigma: f64,
}

impl Sampler {
    /// Creates a sampler for `mu + sigma·Y`, `Y ~ GAL(shape)`.
    pub fn new(shape: CanonicalShape, mu: f64, sigma: f64) -> Self {
        Self { shape, mu, sigma }
    }

    /// Returns the canonical shape.
    #[inline]
    pub fn shape(&self) -> &CanonicalShape {
        &self.shape
    }

    /// Draws one variate.
    #[inline]
    pub fn draw<R: BaseRng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.mu + self.sigma * standard_variate(&self.shape, rng)
    }

    /// Fills `buffer` with variates, in order.
    pub fn fill<R: BaseRng + ?Sized>(&self, rng: &mut R, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.draw(rng);
        }
    }

    /// Draws `n` variates.
    ///
    /// # Errors
    /// `GalError::InvalidSampleSize` if `n == 0`.
    pub fn sample_n<R: BaseRng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, GalError> {
        if n == 0 {
            return Err(GalError::InvalidSampleSize { n });
        }
        let mut draws = vec![0.0; n];
        self.fill(rng, &mut draws);
        Ok(draws)
    }
}
