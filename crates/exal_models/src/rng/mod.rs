//! # Random Number Generation
//!
//! The sampler consumes randomness through the [`BaseRng`] capability: one
//! uniform draw on the open interval (0, 1) and one standard normal draw.
//! Every `rand::Rng` provides it, so callers can pass whichever generator
//! they already own.
//!
//! [`ExalRng`] is the seeded generator used by tests and benchmarks. It
//! records its seed so that a run can be reproduced from a log line.
//!
//! ## Usage Example
//!
//! ```rust
//! use exal_models::rng::{BaseRng, ExalRng};
//!
//! let mut rng = ExalRng::from_seed(12345);
//! let u = rng.uniform_open01();
//! assert!(u > 0.0 && u < 1.0);
//!
//! assert!(rng.standard_normal().is_finite());
//! ```
//!
//! Generators are not shared: concurrent sampling needs one generator per
//! thread.

mod base;
mod prng;

#[cfg(test)]
mod tests;

pub use base::BaseRng;
pub use prng::ExalRng;
