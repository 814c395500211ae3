//! Integration tests for the `dexal`/`pexal`/`qexal`/`rexal` operations.
//!
//! # Test Categories
//!
//! 1. **Reference Scenario**: symmetric defaults reduce to the plain Laplace law
//! 2. **Input Validation**: every documented domain error
//! 3. **Analytic Properties**: normalisation, monotonicity, quantile round trip
//! 4. **Strong Skew**: `gamma` close to its bounds, fixed sweep and property-based

use approx::assert_relative_eq;
use exal_models::config::{ExalConfig, QuantileConfig};
use exal_models::distribution::{
    dexal, get_gamma_bounds, pexal, qexal, rexal, GalDistribution, GalEngine, GalError, GalParams,
};
use exal_models::rng::ExalRng;
use proptest::prelude::*;

/// Parameter sets with `gamma` well inside the bounds.
fn parameter_sets() -> Vec<GalParams> {
    vec![
        GalParams::new(0.5, 0.0, 1.0, 0.5),
        GalParams::new(0.25, 1.0, 2.0, 0.8),
        GalParams::new(0.75, -1.0, 0.5, -0.4),
        GalParams::new(0.1, 0.0, 1.0, 3.0),
    ]
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_symmetric_defaults() {
    let params = GalParams::default();
    assert_eq!(dexal(0.0, &params, false).unwrap(), 0.25);
    assert_eq!(pexal(0.0, &params, true, false).unwrap(), 0.5);
    assert_eq!(qexal(0.5, &params, true, false).unwrap(), 0.0);

    // Laplace with rate 1/2 on both sides
    for x in [-3.0_f64, -1.0, 0.5, 2.0] {
        assert_relative_eq!(
            dexal(x, &params, false).unwrap(),
            0.25 * (-0.5 * x.abs()).exp(),
            max_relative = 1e-15
        );
    }
}

#[test]
fn test_degenerate_gamma_matches_asymmetric_laplace() {
    let params = GalParams::new(0.3, 0.0, 1.0, 0.0);
    // P(X <= 0) = p0 and the closed-form quantile inverts it exactly
    assert_relative_eq!(pexal(0.0, &params, true, false).unwrap(), 0.3, max_relative = 1e-15);
    let x = qexal(0.1, &params, true, false).unwrap();
    assert_relative_eq!(x, (0.1_f64 / 0.3).ln() / 0.7, max_relative = 1e-14);
}

// ============================================================================
// Input Validation
// ============================================================================

#[test]
fn test_invalid_p0_is_domain_error() {
    let params = GalParams::default().with_p0(0.0);
    let err = dexal(0.0, &params, false).unwrap_err();
    assert!(err.is_domain_error());
    assert!(err.to_string().contains("p0"));
}

#[test]
fn test_invalid_sigma_is_domain_error() {
    let params = GalParams::default().with_sigma(-2.0);
    for err in [
        dexal(0.0, &params, false).unwrap_err(),
        pexal(0.0, &params, true, false).unwrap_err(),
        qexal(0.5, &params, true, false).unwrap_err(),
        rexal(5, &params, &mut ExalRng::from_seed(1)).unwrap_err(),
    ] {
        assert!(matches!(err, GalError::InvalidParameter { name: "sigma", .. }));
    }
}

#[test]
fn test_probability_outside_unit_interval() {
    let err = qexal(1.5, &GalParams::default(), true, false).unwrap_err();
    assert!(err.is_domain_error());
    assert!(err.to_string().contains("prob = 1.5"));
}

#[test]
fn test_zero_draws() {
    let err = rexal(0, &GalParams::default(), &mut ExalRng::from_seed(1)).unwrap_err();
    assert_eq!(err, GalError::InvalidSampleSize { n: 0 });
}

#[test]
fn test_gamma_at_upper_bound() {
    let bounds = get_gamma_bounds(0.5).unwrap();
    let params = GalParams::default().with_gamma(bounds.upper);

    match dexal(0.0, &params, false).unwrap_err() {
        GalError::GammaOutOfBounds {
            gamma,
            lower,
            upper,
        } => {
            assert_eq!(gamma, bounds.upper);
            assert_eq!((lower, upper), (bounds.lower, bounds.upper));
        }
        other => panic!("Expected GammaOutOfBounds, got {:?}", other),
    }

    let beyond = GalParams::default().with_gamma(bounds.upper + 1.0);
    let msg = pexal(0.0, &beyond, true, false).unwrap_err().to_string();
    assert!(msg.contains("allowed range"));
}

#[test]
fn test_extreme_p0_reports_root_finding_failure() {
    let err = get_gamma_bounds(0.999).unwrap_err();
    assert!(matches!(err, GalError::RootFinding { p0, .. } if p0 == 0.999));
    assert!(!err.is_domain_error());

    // Bounds are computed before the gamma == 0 shortcut
    let params = GalParams::default().with_p0(0.999);
    assert!(matches!(
        dexal(0.0, &params, false).unwrap_err(),
        GalError::RootFinding { .. }
    ));
}

#[test]
fn test_struct_literal_config_is_validated() {
    let config = ExalConfig {
        quantile: QuantileConfig {
            tolerance: 0.0,
            ..QuantileConfig::default()
        },
        ..ExalConfig::default()
    };
    let params = GalParams::new(0.25, 0.0, 1.0, 0.8);

    assert!(matches!(GalEngine::new(config), Err(GalError::InvalidConfig(_))));
    assert!(matches!(
        GalDistribution::with_config(params, &config),
        Err(GalError::InvalidConfig(_))
    ));
}

// ============================================================================
// Analytic Properties
// ============================================================================

#[test]
fn test_density_integrates_to_one() {
    for params in parameter_sets() {
        let dist = GalDistribution::new(params).unwrap();
        let (mu, sigma) = (params.mu, params.sigma);
        let n = 200_000;
        let h = 100.0 * sigma / n as f64;
        let total: f64 = (0..n)
            .map(|i| {
                let x = mu - 50.0 * sigma + (i as f64 + 0.5) * h;
                dist.pdf(x)
            })
            .sum::<f64>()
            * h;
        assert!((total - 1.0).abs() < 1e-5, "{:?}: integral = {}", params, total);
    }
}

#[test]
fn test_cdf_is_non_decreasing() {
    for params in parameter_sets() {
        let mut previous = 0.0;
        for i in 0..=400 {
            let q = params.mu + params.sigma * (-20.0 + 0.1 * i as f64);
            let prob = pexal(q, &params, true, false).unwrap();
            assert!(prob >= previous - 1e-15, "{:?}: F({}) = {} < {}", params, q, prob, previous);
            assert!((-1e-15..=1.0 + 1e-15).contains(&prob));
            previous = prob;
        }
    }
}

#[test]
fn test_quantile_round_trip() {
    for params in parameter_sets() {
        for k in [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0] {
            let x = params.mu + k * params.sigma;
            let prob = pexal(x, &params, true, false).unwrap();
            let back = qexal(prob, &params, true, false).unwrap();
            assert!(
                (back - x).abs() < 1e-6,
                "{:?}: x = {}, prob = {}, qexal = {}",
                params,
                x,
                prob,
                back
            );
        }
    }
}

#[test]
fn test_log_density_and_probability() {
    let params = GalParams::new(0.25, 1.0, 2.0, 0.8);
    let density = dexal(3.0, &params, false).unwrap();
    assert_relative_eq!(dexal(3.0, &params, true).unwrap(), density.ln(), max_relative = 1e-15);

    let upper = pexal(3.0, &params, false, false).unwrap();
    assert_relative_eq!(
        upper,
        1.0 - pexal(3.0, &params, true, false).unwrap(),
        max_relative = 1e-15
    );
}

// ============================================================================
// Strong Skew
// ============================================================================

/// `gamma` as a signed fraction of the admissible interval for `p0`.
fn gamma_at_fraction(p0: f64, fraction: f64) -> f64 {
    let bounds = get_gamma_bounds(p0).unwrap();
    if fraction > 0.0 {
        fraction * bounds.upper
    } else {
        -fraction * bounds.lower
    }
}

#[test]
fn test_gamma_near_bounds_stays_finite() {
    for p0 in [0.1, 0.25, 0.5, 0.9] {
        for fraction in [-0.999, -0.99, -0.9, 0.9, 0.99, 0.999] {
            let params = GalParams::new(p0, 1.0, 2.0, gamma_at_fraction(p0, fraction));

            let at_mu = pexal(params.mu, &params, true, false).unwrap();
            assert!((at_mu - p0).abs() < 1e-12, "{:?}: F(mu) = {}", params, at_mu);

            for k in [-10.0, -5.0, -1.0, 0.0, 1.0, 5.0, 10.0] {
                let x = params.mu + k * params.sigma;
                let density = dexal(x, &params, false).unwrap();
                let prob = pexal(x, &params, true, false).unwrap();
                assert!(density.is_finite() && density >= 0.0, "{:?}: f({}) = {}", params, x, density);
                assert!((-1e-15..=1.0 + 1e-15).contains(&prob), "{:?}: F({}) = {}", params, x, prob);
            }

            let q = qexal(0.7, &params, true, false).unwrap();
            assert!(q.is_finite(), "{:?}: qexal(0.7) = {}", params, q);
            assert!((pexal(q, &params, true, false).unwrap() - 0.7).abs() < 1e-7);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_operations_hold_over_admissible_gamma(
        p0 in 0.05f64..0.95,
        fraction in -0.999f64..0.999,
        mu in -5.0f64..5.0,
        sigma in 0.1f64..10.0,
        k in -5.0f64..5.0,
    ) {
        let params = GalParams::new(p0, mu, sigma, gamma_at_fraction(p0, fraction));

        let at_mu = pexal(mu, &params, true, false).unwrap();
        prop_assert!((at_mu - p0).abs() < 1e-12);

        let x = mu + k * sigma;
        let density = dexal(x, &params, false).unwrap();
        let prob = pexal(x, &params, true, false).unwrap();
        prop_assert!(density.is_finite() && density >= 0.0);
        prop_assert!(prob > 0.0 && prob < 1.0);

        // |F(x') - F(x)| < 1e-8 bounds |x' - x| through the standardised density
        let back = qexal(prob, &params, true, false).unwrap();
        let standard_density = sigma * density;
        let tolerance = sigma * f64::max(1e-6, 4e-8 / standard_density);
        prop_assert!(
            (back - x).abs() <= tolerance,
            "x = {}, qexal = {}, tolerance = {}",
            x,
            back,
            tolerance
        );
    }
}
