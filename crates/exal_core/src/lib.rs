//! # exal_core: Numerical Foundation for the exal Distribution Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! exal_core is the bottom layer of the workspace, providing:
//! - Standard normal primitives: `norm_cdf`, `norm_pdf`, `erfcx` (`math::special`)
//! - Bracketed root finding: `BisectionSolver`, `SolverConfig` (`math::solvers`)
//! - Error types: `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other exal_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - statrs: Complementary error function
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use exal_core::math::special::norm_cdf;
//! use exal_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//!
//! // Find the median of the standard normal by bisection
//! let solver = BisectionSolver::new(SolverConfig::absolute(1e-12, 200));
//! let root = solver.find_root(|x: f64| norm_cdf(x) - 0.5, -1.0, 2.0).unwrap();
//! assert!(root.abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `SolverConfig` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
