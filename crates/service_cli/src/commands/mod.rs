//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Options shared by the
//! commands that run a comparison live in [`RunArgs`].

pub mod check;
pub mod integrate;
pub mod render;
pub mod sweep;

use adapter_loader::CsvSampleLoader;
use clap::Args;
use integral_mc::{EstimationError, MonteCarloConfig};
use std::path::PathBuf;

use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Options shared by `integrate` and `sweep`
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Path to the sample CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Column holding the independent variable
    #[arg(short = 'x', long)]
    pub x_column: Option<String>,

    /// Column holding the dependent variable
    #[arg(short = 'y', long)]
    pub y_column: Option<String>,

    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stratified variant (midpoint, jittered)
    #[arg(long)]
    pub stratified: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Everything a comparison run needs after flags, environment and file are merged
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Merged configuration
    pub config: CliConfig,
    /// Engine configuration for a single run
    pub mc: MonteCarloConfig,
    /// Sample loader for the configured columns
    pub loader: CsvSampleLoader,
    /// Output format
    pub format: OutputFormat,
}

impl RunArgs {
    /// Layers these flags (and an optional sample count) over `config` and validates the result.
    pub fn resolve(&self, config: &CliConfig, samples: Option<usize>) -> Result<RunSettings> {
        let mut config = config.clone();

        if let Some(n) = samples {
            config.samples = n;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(mode) = &self.stratified {
            config.stratified = mode
                .parse()
                .map_err(|e| CliError::InvalidArgument(format!("{}", e)))?;
        }
        if let Some(format) = &self.format {
            config.format = format.parse().map_err(CliError::InvalidArgument)?;
        }
        if let Some(x_column) = &self.x_column {
            config.x_column = x_column.clone();
        }
        if let Some(y_column) = &self.y_column {
            config.y_column = y_column.clone();
        }

        config.validate()?;

        let mc = MonteCarloConfig::builder()
            .n_samples(config.samples)
            .maybe_seed(config.seed)
            .stratified(config.stratified)
            .build()
            .map_err(EstimationError::from)?;
        let loader = CsvSampleLoader::new(config.x_column.trim(), config.y_column.trim());
        let format = config.format;

        Ok(RunSettings {
            config,
            mc,
            loader,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integral_mc::StratifiedMode;

    fn args() -> RunArgs {
        RunArgs {
            input: PathBuf::from("data.csv"),
            ..RunArgs::default()
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = args().resolve(&CliConfig::default(), None).unwrap();
        assert_eq!(settings.mc.n_samples(), 10_000);
        assert_eq!(settings.mc.seed(), None);
        assert_eq!(settings.loader, CsvSampleLoader::default());
        assert_eq!(settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig {
            samples: 100,
            seed: Some(1),
            ..CliConfig::default()
        };
        let run = RunArgs {
            seed: Some(5),
            stratified: Some("jittered".to_string()),
            format: Some("json".to_string()),
            x_column: Some(" t ".to_string()),
            y_column: Some("v".to_string()),
            ..args()
        };

        let settings = run.resolve(&config, Some(2_000)).unwrap();
        assert_eq!(settings.mc.n_samples(), 2_000);
        assert_eq!(settings.mc.seed(), Some(5));
        assert_eq!(settings.mc.stratified(), StratifiedMode::Jittered);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.loader.x_column(), "t");
        assert_eq!(settings.loader.y_column(), "v");
    }

    #[test]
    fn test_invalid_flags() {
        let bad_mode = RunArgs {
            stratified: Some("left".to_string()),
            ..args()
        };
        assert!(matches!(
            bad_mode.resolve(&CliConfig::default(), None),
            Err(CliError::InvalidArgument(_))
        ));

        let bad_format = RunArgs {
            format: Some("xml".to_string()),
            ..args()
        };
        assert!(matches!(
            bad_format.resolve(&CliConfig::default(), None),
            Err(CliError::InvalidArgument(_))
        ));

        assert!(matches!(
            args().resolve(&CliConfig::default(), Some(0)),
            Err(CliError::Config(_))
        ));
    }
}
