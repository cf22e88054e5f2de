//! CLI configuration management.
//!
//! Settings come from three places, later ones winning: a TOML file
//! (`mcint.toml` by default, optional), `MCINT_*` environment variables, and
//! command-line flags.

use adapter_loader::{DEFAULT_X_COLUMN, DEFAULT_Y_COLUMN};
use integral_mc::mc::{StratifiedMode, DEFAULT_SAMPLES, MAX_SAMPLES};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Report output format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated rows
    Csv,
}

impl OutputFormat {
    /// Lower-case identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            )),
        }
    }
}

/// Effective `mcint` configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Samples per strategy
    pub samples: usize,

    /// Run seed; unseeded runs draw one from OS entropy
    pub seed: Option<u64>,

    /// Stratified strategy variant
    pub stratified: StratifiedMode,

    /// Independent-variable column
    pub x_column: String,

    /// Dependent-variable column
    pub y_column: String,

    /// Output format
    pub format: OutputFormat,

    /// Sample counts used by `sweep`
    pub sweep_counts: Vec<usize>,

    /// Environment values that could not be parsed
    #[serde(skip)]
    pub(crate) env_errors: Vec<String>,
}

fn default_sweep_counts() -> Vec<usize> {
    vec![100, 1_000, 10_000, 100_000]
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: None,
            stratified: StratifiedMode::default(),
            x_column: DEFAULT_X_COLUMN.to_string(),
            y_column: DEFAULT_Y_COLUMN.to_string(),
            format: OutputFormat::default(),
            sweep_counts: default_sweep_counts(),
            env_errors: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `MCINT_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparsable values are kept aside and reported by [`CliConfig::validate`].
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(samples) = lookup("MCINT_SAMPLES") {
            match samples.trim().parse() {
                Ok(n) => self.samples = n,
                Err(_) => self
                    .env_errors
                    .push(format!("MCINT_SAMPLES '{}' is not a sample count", samples)),
            }
        }

        if let Some(seed) = lookup("MCINT_SEED") {
            match seed.trim().parse() {
                Ok(s) => self.seed = Some(s),
                Err(_) => self
                    .env_errors
                    .push(format!("MCINT_SEED '{}' is not an unsigned integer", seed)),
            }
        }

        if let Some(mode) = lookup("MCINT_STRATIFIED") {
            match mode.parse() {
                Ok(m) => self.stratified = m,
                Err(e) => self.env_errors.push(format!("MCINT_STRATIFIED: {}", e)),
            }
        }

        if let Some(x_column) = lookup("MCINT_X_COLUMN") {
            self.x_column = x_column;
        }

        if let Some(y_column) = lookup("MCINT_Y_COLUMN") {
            self.y_column = y_column;
        }

        if let Some(format) = lookup("MCINT_FORMAT") {
            match format.parse() {
                Ok(f) => self.format = f,
                Err(e) => self.env_errors.push(format!("MCINT_FORMAT: {}", e)),
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.env_errors.clone();

        if self.samples == 0 || self.samples > MAX_SAMPLES {
            errors.push(format!(
                "samples {} outside allowed range [1, {}]",
                self.samples, MAX_SAMPLES
            ));
        }

        if self.x_column.trim().is_empty() {
            errors.push("x_column cannot be empty".to_string());
        }
        if self.y_column.trim().is_empty() {
            errors.push("y_column cannot be empty".to_string());
        }
        if self.x_column.trim() == self.y_column.trim() {
            errors.push(format!(
                "x_column and y_column must differ (both '{}')",
                self.x_column
            ));
        }

        if self.sweep_counts.is_empty() {
            errors.push("sweep_counts cannot be empty".to_string());
        }
        for &n in &self.sweep_counts {
            if n == 0 || n > MAX_SAMPLES {
                errors.push(format!(
                    "sweep count {} outside allowed range [1, {}]",
                    n, MAX_SAMPLES
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
