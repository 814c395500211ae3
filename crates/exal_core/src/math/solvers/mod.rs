//! Root-finding solvers for numerical computation.
//!
//! The distribution engine needs roots of monotone functions on a known
//! interval: the gamma validity bounds and the inverse CDF. Both are served
//! by a single bracketing method whose termination is guaranteed by an
//! explicit iteration cap.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Robust bracketing method without derivative requirement
//!
//! ## Configuration
//!
//! [`SolverConfig`] carries:
//! - `tolerance`: Convergence tolerance (default: 4 machine epsilons)
//! - `max_iterations`: Maximum iteration count (default: 100_000)
//! - `mode`: [`ToleranceMode`], either relative bracket width or absolute residual
//!
//! ## Examples
//!
//! ```
//! use exal_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = BisectionSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-14);
//! ```

mod bisection;
mod config;

// Re-export public types at module level
pub use bisection::{BisectionSolver, RootResult};
pub use config::{SolverConfig, ToleranceMode};
