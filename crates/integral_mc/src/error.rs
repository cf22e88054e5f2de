//! Run-level error type.

use crate::mc::ConfigError;
use integral_core::types::{InterpolationError, SampleError};
use thiserror::Error;

/// Classified failure of an integration run.
///
/// A run aborts on the first error; no partial report is ever produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    /// The sample set is degenerate, mismatched or non-finite.
    #[error(transparent)]
    Samples(#[from] SampleError),

    /// The sample count or another parameter is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Evaluating the interpolant failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
