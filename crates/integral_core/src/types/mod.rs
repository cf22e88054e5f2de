//! Core data types for integration runs.
//!
//! This module provides:
//! - `samples`: Validated (x, y) sample sets and the derived integration domain
//! - `error`: Structured error types for sample validation, interpolation and quadrature
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SampleSet`], [`Domain`], [`Axis`] from `samples`
//! - [`SampleError`], [`InterpolationError`], [`QuadratureError`] from `error`

pub mod error;
pub mod samples;

pub use error::{InterpolationError, QuadratureError, SampleError};
pub use samples::{Axis, Domain, SampleSet};
