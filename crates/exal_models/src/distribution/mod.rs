//! Generalised asymmetric Laplace (GAL) distribution.
//!
//! This module provides:
//! - Gamma bounds: admissible range of the skewness control for a given `p0`
//! - Parameter mapping from `(gamma, p0)` to the canonical `(p, alpha)`
//! - Closed-form density and CDF with sign-flip symmetry
//! - Quantile inversion by bracketed bisection
//! - Sampling through the asymmetric Laplace plus half-normal mixture
//!
//! ## Design Principles
//!
//! - **Validate first**: every public operation rejects bad input before any
//!   evaluation
//! - **Non-negative `alpha` kernels**: negative skew is a thin wrapper over the
//!   positive case, never recursion
//! - **Injected randomness**: samplers take a [`BaseRng`](crate::rng::BaseRng)
//!   argument instead of a global generator

pub mod api;
pub mod bounds;
pub mod cdf;
pub mod constants;
pub mod density;
pub mod error;
pub mod gal;
pub mod mapper;
pub mod params;
pub mod quantile;
pub mod sampler;

// Re-export main types at module level
pub use api::{dexal, get_gamma_bounds, pexal, qexal, rexal, GalEngine};
pub use bounds::{g_gamma, GammaBoundSolver};
pub use error::{ConvergenceWarning, GalError};
pub use gal::GalDistribution;
pub use mapper::ParameterMapper;
pub use params::{CanonicalShape, GalParams, GammaBounds};
pub use quantile::{QuantileResult, QuantileSolver};
pub use sampler::Sampler;
