//! Monte Carlo integration configuration.
//!
//! This module provides configuration types and builders for a comparison
//! run of the three sampling strategies.

use super::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Default number of samples per strategy.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Maximum number of samples per strategy.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Representative point chosen inside each stratum.
///
/// The two variants have different error characteristics: the midpoint rule
/// is deterministic and, for a piecewise linear integrand, exact on every
/// stratum without a knot; the jittered variant keeps the estimator random.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StratifiedMode {
    /// Stratum midpoint (deterministic).
    #[default]
    Midpoint,
    /// One uniform draw inside each stratum.
    Jittered,
}

impl StratifiedMode {
    /// Lower-case identifier used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            StratifiedMode::Midpoint => "midpoint",
            StratifiedMode::Jittered => "jittered",
        }
    }
}

impl fmt::Display for StratifiedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StratifiedMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "midpoint" => Ok(StratifiedMode::Midpoint),
            "jittered" | "random" => Ok(StratifiedMode::Jittered),
            other => Err(ConfigError::InvalidParameter {
                name: "stratified",
                value: format!("unknown mode '{}', expected midpoint or jittered", other),
            }),
        }
    }
}

/// Monte Carlo integration configuration.
///
/// Immutable configuration specifying run parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use integral_mc::mc::{MonteCarloConfig, StratifiedMode};
///
/// let config = MonteCarloConfig::builder()
///     .n_samples(5_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 5_000);
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.stratified(), StratifiedMode::Midpoint);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of samples drawn by each strategy.
    n_samples: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Stratified strategy variant.
    stratified: StratifiedMode,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_samples: DEFAULT_SAMPLES,
            seed: None,
            stratified: StratifiedMode::default(),
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of samples per strategy.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the stratified strategy variant.
    #[inline]
    pub fn stratified(&self) -> StratifiedMode {
        self.stratified
    }

    /// Returns a copy with a different sample count. The copy is not validated.
    pub fn with_n_samples(&self, n_samples: usize) -> Self {
        Self {
            n_samples,
            ..self.clone()
        }
    }

    /// Returns a copy pinned to `seed`.
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSampleCount` if `n_samples` is 0 or
    /// greater than [`MAX_SAMPLES`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_samples == 0 || self.n_samples > MAX_SAMPLES {
            return Err(ConfigError::InvalidSampleCount(self.n_samples));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset fields fall back to the defaults: [`DEFAULT_SAMPLES`] samples, no
/// seed, midpoint stratification.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_samples: Option<usize>,
    seed: Option<u64>,
    stratified: StratifiedMode,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of samples per strategy.
    ///
    /// # Arguments
    ///
    /// * `n_samples` - Number of samples in [1, 10_000_000]
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed; `None` leaves the run unseeded.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the stratified strategy variant.
    #[inline]
    pub fn stratified(mut self, stratified: StratifiedMode) -> Self {
        self.stratified = stratified;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSampleCount` if the sample count is invalid.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            n_samples: self.n_samples.unwrap_or(DEFAULT_SAMPLES),
            seed: self.seed,
            stratified: self.stratified,
        };

        config.validate()?;
        Ok(config)
    }
}
