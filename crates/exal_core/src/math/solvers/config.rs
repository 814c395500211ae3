//! Solver configuration types.

use num_traits::Float;

/// Convergence criterion for bracketing solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ToleranceMode {
    /// Stop when the bracket satisfies `|b - a| <= tolerance * min(|a|, |b|)`.
    ///
    /// Scale-free; appropriate when the root magnitude is unknown.
    #[default]
    RelativeBracket,

    /// Stop when the residual at the midpoint satisfies `|f(mid)| < tolerance`.
    AbsoluteResidual,
}

/// Configuration for root-finding algorithms.
///
/// Provides the convergence tolerance, how it is interpreted, and the
/// iteration cap that guarantees termination.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use exal_core::math::solvers::{SolverConfig, ToleranceMode};
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.mode, ToleranceMode::RelativeBracket);
///
/// let custom = SolverConfig::absolute(1e-8, 1_000);
/// assert_eq!(custom.mode, ToleranceMode::AbsoluteResidual);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance, interpreted according to `mode`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// If the solver doesn't converge within this limit,
    /// it returns `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,

    /// How `tolerance` is applied.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: ToleranceMode,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 4 machine epsilons (relative)
    /// - `max_iterations`: 100_000
    /// - `mode`: `RelativeBracket`
    fn default() -> Self {
        let four = T::one() + T::one() + T::one() + T::one();
        Self {
            tolerance: four * T::epsilon(),
            max_iterations: 100_000,
            mode: ToleranceMode::RelativeBracket,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a bracket-relative configuration.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use exal_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::relative(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn relative(tolerance: T, max_iterations: usize) -> Self {
        Self::with_mode(tolerance, max_iterations, ToleranceMode::RelativeBracket)
    }

    /// Create an absolute-residual configuration.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn absolute(tolerance: T, max_iterations: usize) -> Self {
        Self::with_mode(tolerance, max_iterations, ToleranceMode::AbsoluteResidual)
    }

    fn with_mode(tolerance: T, max_iterations: usize, mode: ToleranceMode) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
            mode,
        }
    }
}
