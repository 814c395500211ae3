//! Mathematical primitives.
//!
//! - [`special`]: Standard normal CDF/PDF and the scaled complementary error function
//! - [`solvers`]: Bracketed root finding

pub mod solvers;
pub mod special;
