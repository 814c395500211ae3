//! Quantile inversion.
//!
//! The plain asymmetric Laplace law has a closed-form quantile. Every other
//! shape is inverted numerically: the CDF is monotone in `x`, so bisection on
//! `F(x) - prob` over a bracket around `mu` always converges once the bracket
//! holds the target. The bracket starts at `mu ± initial_half_width·sigma`
//! and each side is doubled until it does.

use exal_core::math::solvers::{BisectionSolver, SolverConfig};
use exal_core::types::SolverError;
use tracing::{debug, warn};

use super::cdf::shape_cdf;
use super::error::{ConvergenceWarning, GalError};
use super::params::CanonicalShape;
use crate::config::QuantileConfig;

/// Outcome of one quantile inversion.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileResult {
    /// The quantile, or NaN when inversion did not converge
    pub value: f64,
    /// Bisection iterations spent (zero for the closed form)
    pub iterations: usize,
    /// Set when inversion did not converge
    pub warning: Option<ConvergenceWarning>,
}

impl QuantileResult {
    /// Returns `true` when no convergence warning was raised.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.warning.is_none()
    }
}

/// Quantile of the standard plain asymmetric Laplace law.
///
/// The same map turns a uniform draw into an asymmetric Laplace variate.
///
/// # Examples
/// ```
/// use exal_models::distribution::quantile::al_quantile;
///
/// assert_eq!(al_quantile(0.4, 0.4), 0.0);
/// assert!(al_quantile(0.1, 0.4) < 0.0);
/// ```
#[inline]
pub fn al_quantile(prob: f64, p: f64) -> f64 {
    if prob < p {
        (prob / p).ln() / (1.0 - p)
    } else {
        -((1.0 - prob) / (1.0 - p)).ln() / p
    }
}

/// Checks `prob ∈ (0, 1)`.
///
/// # Errors
/// `GalError::InvalidParameter` naming `prob`.
pub fn validate_probability(prob: f64) -> Result<(), GalError> {
    if prob > 0.0 && prob < 1.0 {
        Ok(())
    } else {
        Err(GalError::InvalidParameter {
            name: "prob",
            value: prob,
            constraint: "must be in the range (0, 1)",
        })
    }
}

/// Inverts the GAL CDF.
#[derive(Debug, Clone, Default)]
pub struct QuantileSolver {
    config: QuantileConfig,
}

impl QuantileSolver {
    /// Creates a solver with the given settings.
    pub fn new(config: QuantileConfig) -> Self {
        Self { config }
    }

    /// Returns the solver settings.
    #[inline]
    pub fn config(&self) -> &QuantileConfig {
        &self.config
    }

    /// Finds `x` with `F(x) ≈ prob` for the law `mu + sigma·Y`, `Y ~ GAL(shape)`.
    ///
    /// Non-convergence is not an error: the result carries NaN and a
    /// [`ConvergenceWarning`], which is also logged.
    ///
    /// # Errors
    /// - `GalError::InvalidConfig` if the solver settings are out of range
    /// - `GalError::InvalidParameter` if `prob ∉ (0, 1)`
    ///
    /// # Examples
    /// ```
    /// use exal_models::distribution::{CanonicalShape, QuantileSolver};
    ///
    /// let solver = QuantileSolver::default();
    /// let shape = CanonicalShape::asymmetric_laplace(0.5);
    /// let result = solver.invert(0.5, 1.0, 2.0, &shape).unwrap();
    /// assert_eq!(result.value, 1.0);
    /// assert!(result.is_converged());
    /// ```
    pub fn invert(
        &self,
        prob: f64,
        mu: f64,
        sigma: f64,
        shape: &CanonicalShape,
    ) -> Result<QuantileResult, GalError> {
        self.config.validate()?;
        validate_probability(prob)?;

        if shape.is_degenerate() {
            return Ok(QuantileResult {
                value: mu + sigma * al_quantile(prob, shape.p),
                iterations: 0,
                warning: None,
            });
        }

        let objective = |x: f64| shape_cdf((x - mu) / sigma, shape) - prob;
        let (lower, upper) = self.search_bracket(&objective, prob, mu, sigma);

        let solver = BisectionSolver::new(SolverConfig::absolute(
            self.config.tolerance,
            self.config.max_iterations,
        ));

        match solver.solve(&objective, lower, upper) {
            Ok(root) => Ok(QuantileResult {
                value: root.root,
                iterations: root.iterations,
                warning: None,
            }),
            Err(source) => {
                let iterations = match source {
                    SolverError::MaxIterationsExceeded { iterations }
                    | SolverError::BracketExhausted { iterations, .. } => iterations,
                    _ => 0,
                };
                let warning = ConvergenceWarning {
                    probability: prob,
                    iterations,
                    lower,
                    upper,
                    reason: source.to_string(),
                };
                warn!("{}", warning);
                Ok(QuantileResult {
                    value: f64::NAN,
                    iterations,
                    warning: Some(warning),
                })
            }
        }
    }

    fn search_bracket<F>(&self, objective: &F, prob: f64, mu: f64, sigma: f64) -> (f64, f64)
    where
        F: Fn(f64) -> f64,
    {
        let mut lower_width = self.config.initial_half_width;
        let mut upper_width = self.config.initial_half_width;

        for _ in 0..self.config.max_bracket_expansions {
            let widen_lower = objective(mu - lower_width * sigma) > 0.0;
            let widen_upper = objective(mu + upper_width * sigma) < 0.0;
            if !widen_lower && !widen_upper {
                break;
            }
            if widen_lower {
                lower_width *= 2.0;
            }
            if widen_upper {
                upper_width *= 2.0;
            }
            debug!(
                prob,
                lower = mu - lower_width * sigma,
                upper = mu + upper_width * sigma,
                "widened quantile bracket"
            );
        }

        (mu - lower_width * sigma, mu + upper_width * sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::cdf::al_cdf;
    use approx::assert_relative_eq;

    // (p0, gamma) = (0.5, 0.5)
    const SKEWED: CanonicalShape = CanonicalShape {
        p: 0.7150644506893726,
        alpha: 1.7547827963541203,
    };

    // (p0, gamma) = (0.75, -0.4)
    const LEFT_SKEWED: CanonicalShape = CanonicalShape {
        p: 0.6651281951520052,
        alpha: -0.6013878270617982,
    };

    #[test]
    fn test_al_quantile_inverts_al_cdf() {
        for p in [0.2, 0.5, 0.8] {
            for prob in [0.01, 0.2, 0.5, 0.9, 0.999] {
                assert_relative_eq!(al_cdf(al_quantile(prob, p), p), prob, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_degenerate_uses_closed_form() {
        let shape = CanonicalShape::asymmetric_laplace(0.5);
        let result = QuantileSolver::default().invert(0.3, 1.0, 2.0, &shape).unwrap();
        assert_relative_eq!(result.value, 1.0 + 2.0 * 0.6_f64.ln() / 0.5, max_relative = 1e-14);
        assert_eq!(result.iterations, 0);
        assert!(result.is_converged());
    }

    #[test]
    fn test_baseline_probability_maps_to_location() {
        // F(mu) = p0, and mu is the first midpoint of a symmetric bracket
        let result = QuantileSolver::default().invert(0.5, 0.0, 1.0, &SKEWED).unwrap();
        assert_eq!(result.value, 0.0);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_round_trip() {
        let solver = QuantileSolver::default();
        for shape in [SKEWED, LEFT_SKEWED] {
            for x in [-1.0, -0.25, 0.6, 1.5] {
                let prob = shape_cdf(x, &shape);
                let result = solver.invert(prob, 0.0, 1.0, &shape).unwrap();
                assert!(result.is_converged());
                assert!((result.value - x).abs() < 1e-6, "x = {}, got {}", x, result.value);
            }
        }
    }

    #[test]
    fn test_location_scale() {
        let solver = QuantileSolver::default();
        let standard = solver.invert(0.8, 0.0, 1.0, &SKEWED).unwrap().value;
        let scaled = solver.invert(0.8, 3.0, 0.5, &SKEWED).unwrap().value;
        assert!((scaled - (3.0 + 0.5 * standard)).abs() < 1e-6);
    }

    #[test]
    fn test_tail_quantile_widens_bracket() {
        let result = QuantileSolver::default().invert(0.999, 0.0, 1.0, &SKEWED).unwrap();
        assert!(result.is_converged());
        assert!(result.value > 5.0);
        assert!((shape_cdf(result.value, &SKEWED) - 0.999).abs() < 1e-8);
    }

    #[test]
    fn test_fixed_bracket_misses_tail_quantile() {
        let solver = QuantileSolver::new(QuantileConfig {
            max_bracket_expansions: 0,
            ..QuantileConfig::default()
        });
        let result = solver.invert(0.999, 0.0, 1.0, &SKEWED).unwrap();
        assert!(result.value.is_nan());
        let warning = result.warning.unwrap();
        assert_eq!((warning.lower, warning.upper), (-5.0, 5.0));
        assert!(warning.reason.contains("No bracket"));
    }

    #[test]
    fn test_iteration_cap_gives_nan_with_warning() {
        let solver = QuantileSolver::new(QuantileConfig {
            max_iterations: 3,
            ..QuantileConfig::default()
        });
        let result = solver.invert(0.6, 0.0, 1.0, &SKEWED).unwrap();
        assert!(result.value.is_nan());
        assert_eq!(result.iterations, 3);

        let warning = result.warning.unwrap();
        assert_eq!(warning.probability, 0.6);
        assert_eq!(warning.iterations, 3);
        assert!(warning.to_string().starts_with("qexal: bisection did not converge"));
    }

    #[test]
    fn test_invalid_probability() {
        let solver = QuantileSolver::default();
        for prob in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            match solver.invert(prob, 0.0, 1.0, &SKEWED).unwrap_err() {
                GalError::InvalidParameter { name, .. } => assert_eq!(name, "prob"),
                other => panic!("Expected InvalidParameter, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let solver = QuantileSolver::new(QuantileConfig {
            tolerance: 0.0,
            ..QuantileConfig::default()
        });
        let err = solver.invert(0.7, 0.0, 1.0, &SKEWED).unwrap_err();
        assert!(matches!(err, GalError::InvalidConfig(_)));

        let solver = QuantileSolver::new(QuantileConfig {
            max_iterations: 0,
            ..QuantileConfig::default()
        });
        let shape = CanonicalShape::asymmetric_laplace(0.5);
        assert!(solver.invert(0.7, 0.0, 1.0, &shape).is_err());
    }
}
