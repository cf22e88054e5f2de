//! CLI error types.

use adapter_loader::LoaderError;
use integral_mc::EstimationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Every failure the `mcint` binary can report.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file or environment problem.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input data could not be loaded.
    #[error("Input error: {0}")]
    Load(#[from] LoaderError),

    /// The comparison run failed.
    #[error("Estimation error: {0}")]
    Estimation(#[from] EstimationError),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output could not be rendered.
    #[error("Output error: {0}")]
    Render(String),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Render(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Render(err.to_string())
    }
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
