//! Standardised GAL cumulative distribution function.
//!
//! For `alpha > 0`, with `r = t / alpha`:
//!
//! ```text
//! phi1  = Φ(-(1-p)α - r·[r ≥ 0])
//! phi2  = Φ(-pα)
//! phi3  = Φ(r - pα)
//! term1 = 2p · exp((1-p)²α²/2 + (1-p)·t) · phi1
//! term2 = 2(1-p) · exp(p²α²/2 - p·t) · (phi2 - phi3)
//! term3 = 2Φ(r) - 1
//! F(t)  = term1 + (term2 + term3)·[r ≥ 0]
//! ```
//!
//! `term1` and `term2` are evaluated in erfcx form, as for the density, so
//! the sum stays finite for every `alpha` the parameter mapping produces.
//!
//! Negative `alpha` uses `F(t; p, alpha) = 1 - F(-t; 1 - p, -alpha)`.
//! At `t = 0` the expression reduces to `p·g(γ)`, which is `p0` by
//! construction of the parameter mapping.

use std::f64::consts::FRAC_1_SQRT_2;

use exal_core::math::special::{erfcx, norm_cdf};

use super::constants::CDF_ALPHA_TOLERANCE;
use super::density::gaussian_window;
use super::params::CanonicalShape;

/// CDF of the plain asymmetric Laplace law with skew probability `p`.
///
/// # Examples
/// ```
/// use exal_models::distribution::cdf::al_cdf;
///
/// assert!((al_cdf(0.0, 0.3) - 0.3).abs() < 1e-15);
/// assert!(al_cdf(-1.0, 0.3) < 0.3);
/// ```
#[inline]
pub fn al_cdf(t: f64, p: f64) -> f64 {
    if t < 0.0 {
        p * ((1.0 - p) * t).exp()
    } else {
        1.0 - (1.0 - p) * (-p * t).exp()
    }
}

/// Standardised GAL CDF `F(t; p, alpha)`.
///
/// # Examples
/// ```
/// use exal_models::distribution::cdf::standard_cdf;
///
/// let lower = standard_cdf(-1.0, 0.7, 1.7);
/// let upper = standard_cdf(1.0, 0.7, 1.7);
/// assert!(0.0 < lower && lower < upper && upper < 1.0);
/// ```
pub fn standard_cdf(t: f64, p: f64, alpha: f64) -> f64 {
    if alpha < 0.0 {
        1.0 - non_negative_cdf(-t, 1.0 - p, -alpha)
    } else {
        non_negative_cdf(t, p, alpha)
    }
}

/// Standardised CDF evaluated on a [`CanonicalShape`].
#[inline]
pub fn shape_cdf(t: f64, shape: &CanonicalShape) -> f64 {
    standard_cdf(t, shape.p, shape.alpha)
}

fn non_negative_cdf(t: f64, p: f64, alpha: f64) -> f64 {
    if alpha < CDF_ALPHA_TOLERANCE {
        return al_cdf(t, p);
    }

    let q = 1.0 - p;
    let ratio = t / alpha;

    if ratio >= 0.0 {
        // 2p·Φ(-z)·exp(qt + (qα)²/2) with z = r + qα, folded into erfcx
        let z = ratio + q * alpha;
        let term1 = p * erfcx(z * FRAC_1_SQRT_2) * (-0.5 * ratio * ratio).exp();
        let term2 = -2.0 * q * gaussian_window(ratio, p * alpha);
        let term3 = 2.0 * norm_cdf(ratio) - 1.0;
        term1 + term2 + term3
    } else {
        let w = q * alpha;
        p * erfcx(w * FRAC_1_SQRT_2) * (q * t).exp()
    }
}
