//! Engine configuration.
//!
//! Tolerances and iteration caps of the two iterative components are explicit
//! values rather than constants buried in the algorithms, so callers and tests
//! can tighten, loosen or deliberately starve them.
//!
//! Configuration can be built in code, through [`ExalConfigBuilder`], or
//! parsed from TOML:
//!
//! ```toml
//! [bounds]
//! relative_tolerance = 8.881784197001252e-16
//! max_iterations = 100000
//! search_limit = 100.0
//!
//! [quantile]
//! tolerance = 1e-8
//! max_iterations = 10000000
//! initial_half_width = 5.0
//! max_bracket_expansions = 64
//! ```

use serde::{Deserialize, Serialize};

use crate::distribution::GalError;

/// Settings for the gamma bound root finder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundSolverConfig {
    /// Relative bracket-width tolerance.
    pub relative_tolerance: f64,
    /// Bisection iteration cap.
    pub max_iterations: usize,
    /// Search intervals are `[-search_limit, 0]` and `[0, search_limit]`.
    pub search_limit: f64,
}

impl Default for BoundSolverConfig {
    fn default() -> Self {
        Self {
            relative_tolerance: 4.0 * f64::EPSILON,
            max_iterations: 100_000,
            search_limit: 100.0,
        }
    }
}

impl BoundSolverConfig {
    /// Validates the settings.
    ///
    /// # Errors
    /// `GalError::InvalidConfig` for a non-positive or non-finite tolerance or
    /// search limit, or a zero iteration cap.
    pub fn validate(&self) -> Result<(), GalError> {
        check_positive("bounds.relative_tolerance", self.relative_tolerance)?;
        check_positive("bounds.search_limit", self.search_limit)?;
        check_nonzero("bounds.max_iterations", self.max_iterations)
    }
}

/// Settings for quantile inversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantileConfig {
    /// Absolute tolerance on `|F(x) - prob|`.
    pub tolerance: f64,
    /// Bisection iteration cap.
    pub max_iterations: usize,
    /// Initial bracket is `mu ± initial_half_width * sigma`.
    pub initial_half_width: f64,
    /// Maximum number of bracket doublings before bisection starts.
    pub max_bracket_expansions: usize,
}

impl Default for QuantileConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 10_000_000,
            initial_half_width: 5.0,
            max_bracket_expansions: 64,
        }
    }
}

impl QuantileConfig {
    /// Validates the settings.
    ///
    /// # Errors
    /// `GalError::InvalidConfig` for a non-positive or non-finite tolerance or
    /// half-width, or a zero iteration cap.
    pub fn validate(&self) -> Result<(), GalError> {
        check_positive("quantile.tolerance", self.tolerance)?;
        check_positive("quantile.initial_half_width", self.initial_half_width)?;
        check_nonzero("quantile.max_iterations", self.max_iterations)
    }
}

/// Complete engine configuration.
///
/// # Examples
///
/// ```rust
/// use exal_models::config::ExalConfig;
///
/// let config = ExalConfig::builder()
///     .quantile_tolerance(1e-10)
///     .quantile_max_iterations(1_000)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.quantile.max_iterations, 1_000);
/// assert_eq!(config.bounds.max_iterations, 100_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExalConfig {
    /// Gamma bound solver settings.
    pub bounds: BoundSolverConfig,
    /// Quantile solver settings.
    pub quantile: QuantileConfig,
}

impl ExalConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> ExalConfigBuilder {
        ExalConfigBuilder::default()
    }

    /// Parses and validates a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    /// `GalError::InvalidConfig` on malformed TOML or out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self, GalError> {
        let config: ExalConfig =
            toml::from_str(source).map_err(|e| GalError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `GalError::InvalidConfig` if any tolerance, width or limit is
    /// non-positive or non-finite, or any iteration cap is zero.
    pub fn validate(&self) -> Result<(), GalError> {
        self.bounds.validate()?;
        self.quantile.validate()
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), GalError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GalError::InvalidConfig(format!(
            "{} = {} must be positive and finite",
            name, value
        )))
    }
}

fn check_nonzero(name: &str, value: usize) -> Result<(), GalError> {
    if value > 0 {
        Ok(())
    } else {
        Err(GalError::InvalidConfig(format!("{} must be > 0", name)))
    }
}

/// Builder for [`ExalConfig`].
///
/// Provides a fluent API with validation at build time.
#[derive(Clone, Debug, Default)]
pub struct ExalConfigBuilder {
    config: ExalConfig,
}

impl ExalConfigBuilder {
    /// Sets the relative tolerance of the gamma bound solver.
    #[inline]
    pub fn bounds_tolerance(mut self, tolerance: f64) -> Self {
        self.config.bounds.relative_tolerance = tolerance;
        self
    }

    /// Sets the iteration cap of the gamma bound solver.
    #[inline]
    pub fn bounds_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.bounds.max_iterations = max_iterations;
        self
    }

    /// Sets the half-width of the gamma search intervals.
    #[inline]
    pub fn bounds_search_limit(mut self, search_limit: f64) -> Self {
        self.config.bounds.search_limit = search_limit;
        self
    }

    /// Sets the absolute CDF tolerance of the quantile solver.
    #[inline]
    pub fn quantile_tolerance(mut self, tolerance: f64) -> Self {
        self.config.quantile.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap of the quantile solver.
    #[inline]
    pub fn quantile_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.quantile.max_iterations = max_iterations;
        self
    }

    /// Sets the initial quantile bracket half-width, in units of `sigma`.
    #[inline]
    pub fn quantile_half_width(mut self, half_width: f64) -> Self {
        self.config.quantile.initial_half_width = half_width;
        self
    }

    /// Sets the number of bracket doublings allowed before bisection.
    /// Zero keeps the initial bracket fixed.
    #[inline]
    pub fn quantile_max_expansions(mut self, expansions: usize) -> Self {
        self.config.quantile.max_bracket_expansions = expansions;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// `GalError::InvalidConfig` if validation fails.
    pub fn build(self) -> Result<ExalConfig, GalError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
