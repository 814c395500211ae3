//! The randomness capability consumed by the sampler.

use rand::Rng;
use rand_distr::{Distribution, Open01, StandardNormal};

/// Source of the two primitive draws a GAL variate needs.
pub trait BaseRng {
    /// Uniform draw on the open interval (0, 1).
    fn uniform_open01(&mut self) -> f64;

    /// Standard normal draw.
    fn standard_normal(&mut self) -> f64;
}

impl<R: Rng + ?Sized> BaseRng for R {
    #[inline]
    fn uniform_open01(&mut self) -> f64 {
        Open01.sample(self)
    }

    #[inline]
    fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(self)
    }
}
