//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - Seed reproducibility
//! - Open-interval uniform range
//! - Agreement between `ExalRng` and the generator it wraps
//! - Normal moments

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_seed_reproducibility() {
    let mut rng1 = ExalRng::from_seed(12345);
    let mut rng2 = ExalRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.uniform_open01(), rng2.uniform_open01());
        assert_eq!(rng1.standard_normal(), rng2.standard_normal());
    }
    assert_eq!(rng1.seed(), 12345);
}

#[test]
fn test_different_seeds_differ() {
    let mut rng1 = ExalRng::from_seed(1);
    let mut rng2 = ExalRng::from_seed(2);
    let a: Vec<f64> = (0..10).map(|_| rng1.uniform_open01()).collect();
    let b: Vec<f64> = (0..10).map(|_| rng2.uniform_open01()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_uniform_is_open_interval() {
    let mut rng = ExalRng::from_seed(42);

    for _ in 0..10_000 {
        let value = rng.uniform_open01();
        assert!(value > 0.0, "Uniform value {} is not above 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

#[test]
fn test_matches_wrapped_std_rng() {
    let mut rng = ExalRng::from_seed(7);
    let mut inner = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        assert_eq!(rng.uniform_open01(), inner.uniform_open01());
        assert_eq!(rng.standard_normal(), inner.standard_normal());
    }
}

#[test]
fn test_base_rng_for_any_rand_rng() {
    let mut rng = StdRng::seed_from_u64(3);
    let dyn_rng: &mut dyn rand::RngCore = &mut rng;
    let u = dyn_rng.uniform_open01();
    assert!(u > 0.0 && u < 1.0);
    assert!(dyn_rng.standard_normal().is_finite());
}

#[test]
fn test_normal_moments() {
    let mut rng = ExalRng::from_seed(2024);
    let n = 100_000;
    let draws: Vec<f64> = (0..n).map(|_| rng.standard_normal()).collect();

    let mean = draws.iter().sum::<f64>() / n as f64;
    let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    assert!(mean.abs() < 0.02, "mean = {}", mean);
    assert!((var - 1.0).abs() < 0.03, "variance = {}", var);
}
