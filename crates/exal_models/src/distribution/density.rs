//! Standardised GAL density (`mu = 0`, `sigma = 1`).
//!
//! Negative `alpha` is reduced to the non-negative case through
//! `f(x; p, alpha) = f(-x; 1 - p, -alpha)`, so the closed form below is only
//! ever evaluated with `alpha >= 0`.
//!
//! For `alpha > 0`, with `r = x / alpha`:
//!
//! ```text
//! phi1  = Φ(r - pα) - Φ(-pα)
//! phi2  = Φ((p-1)α - r·[r ≥ 0])
//! term1 = phi1 · exp(-p·x + (pα)²/2) · [r ≥ 0]
//! term2 = phi2 · exp(-(p-1)·x + ((p-1)α)²/2)
//! f(x)  = 2p(1-p) · (term1 + term2)
//! ```
//!
//! Both terms pair a Gaussian tail with a growing exponential and are
//! evaluated through `Φ(-z)·exp(z²/2) = erfcx(z/√2)/2`, which folds the two
//! factors together. The literal products hit `0 · ∞` once `|x|` or `pα`
//! grows large, which happens well inside the admissible `gamma` range.

use std::f64::consts::FRAC_1_SQRT_2;

use exal_core::math::special::{erfcx, norm_cdf};

use super::constants::EPSILON;
use super::params::CanonicalShape;

/// Density of the plain asymmetric Laplace law with skew probability `p`.
///
/// # Examples
/// ```
/// use exal_models::distribution::density::al_density;
///
/// assert_eq!(al_density(0.0, 0.5), 0.25);
/// assert!(al_density(-1.0, 0.3) < al_density(0.0, 0.3));
/// ```
#[inline]
pub fn al_density(x: f64, p: f64) -> f64 {
    let scale = p * (1.0 - p);
    if x >= 0.0 {
        scale * (-p * x).exp()
    } else {
        scale * ((1.0 - p) * x).exp()
    }
}

/// Standardised GAL density `f(x; p, alpha)`.
///
/// # Examples
/// ```
/// use exal_models::distribution::density::standard_density;
///
/// let f = standard_density(0.7, 0.6, 1.2);
/// assert!(f > 0.0);
/// assert!((f - standard_density(-0.7, 0.4, -1.2)).abs() < 1e-14);
/// ```
pub fn standard_density(x: f64, p: f64, alpha: f64) -> f64 {
    if alpha < 0.0 {
        non_negative_density(-x, 1.0 - p, -alpha)
    } else {
        non_negative_density(x, p, alpha)
    }
}

/// Standardised density evaluated on a [`CanonicalShape`].
#[inline]
pub fn shape_density(x: f64, shape: &CanonicalShape) -> f64 {
    standard_density(x, shape.p, shape.alpha)
}

fn non_negative_density(x: f64, p: f64, alpha: f64) -> f64 {
    if alpha < EPSILON {
        return al_density(x, p);
    }

    let q = 1.0 - p;
    let ratio = x / alpha;

    let (term1, term2) = if ratio >= 0.0 {
        let term1 = gaussian_window(ratio, p * alpha);
        // Φ(-z)·exp(qx + (qα)²/2) with z = r + qα collapses to erfcx(z/√2)·exp(-r²/2)/2
        let z = ratio + q * alpha;
        let term2 = 0.5 * erfcx(z * FRAC_1_SQRT_2) * (-0.5 * ratio * ratio).exp();
        (term1, term2)
    } else {
        let w = q * alpha;
        let term2 = 0.5 * erfcx(w * FRAC_1_SQRT_2) * (q * x).exp();
        (0.0, term2)
    };

    2.0 * p * q * (term1 + term2)
}

/// `(Φ(r - a) - Φ(-a))·exp(a²/2 - a·r)` for `r >= 0` and `a >= 0`.
///
/// For `r <= a` both normal tails are rewritten through erfcx:
/// `½·erfcx((a - r)/√2)·exp(-r²/2) - ½·erfcx(a/√2)·exp(-a·r)`.
/// For `r > a` the exponent is below `-a²/2` and the direct product is finite.
pub(super) fn gaussian_window(ratio: f64, a: f64) -> f64 {
    if ratio <= a {
        let near = 0.5 * erfcx((a - ratio) * FRAC_1_SQRT_2) * (-0.5 * ratio * ratio).exp();
        let far = 0.5 * erfcx(a * FRAC_1_SQRT_2) * (-a * ratio).exp();
        (near - far).max(0.0)
    } else {
        (norm_cdf(ratio - a) - norm_cdf(-a)) * (a * (0.5 * a - ratio)).exp()
    }
}
