//! Error types for structured error handling.
//!
//! This module provides:
//! - `SampleError`: Errors from sample set validation
//! - `InterpolationError`: Errors from interpolator construction and evaluation
//! - `QuadratureError`: Errors from deterministic quadrature rules

use super::samples::Axis;
use thiserror::Error;

/// Sample set validation errors.
///
/// Every variant is an input-validation failure: a run that hits one of
/// these is aborted before any sampling takes place.
///
/// # Examples
/// ```
/// use integral_core::types::SampleError;
///
/// let err = SampleError::MismatchedLength { x_len: 3, y_len: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "Mismatched sample lengths: 3 x values, 2 y values"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleError {
    /// Fewer than two points, or every x value identical (zero-width domain).
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Independent and dependent sequences differ in length.
    #[error("Mismatched sample lengths: {x_len} x values, {y_len} y values")]
    MismatchedLength {
        /// Number of x values supplied
        x_len: usize,
        /// Number of y values supplied
        y_len: usize,
    },

    /// A value is NaN or infinite.
    #[error("Non-finite {axis} value at index {index}")]
    NonFinite {
        /// Position in the input sequence
        index: usize,
        /// Which sequence held the value
        axis: Axis,
    },
}

/// Interpolation-specific errors.
///
/// # Examples
/// ```
/// use integral_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside the sampled domain while extrapolation is forbidden.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Fewer than two distinct abscissae remain after de-duplication.
    #[error("Degenerate domain: all {count} x values are identical")]
    DegenerateDomain {
        /// Number of points provided
        count: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Quadrature errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadratureError {
    /// Fewer than two abscissae.
    #[error("Insufficient points for integration: got {0}, need at least 2")]
    InsufficientPoints(usize),

    /// Abscissae and ordinates differ in length.
    #[error("Length mismatch: {xs} abscissae, {ys} ordinates")]
    LengthMismatch {
        /// Number of abscissae
        xs: usize,
        /// Number of ordinates
        ys: usize,
    },

    /// Abscissae decrease at the given index.
    #[error("Abscissae must be ascending: violation at index {index}")]
    NotAscending {
        /// Index of the first point smaller than its predecessor
        index: usize,
    },
}
