//! # integral_core: Numerical Foundation for Monte Carlo Integration
//!
//! ## Layer 1 (Foundation) Role
//!
//! integral_core is the bottom layer of the workspace and provides:
//! - Validated sample sets and their integration domain (`types::samples`)
//! - Piecewise linear interpolation with linear extrapolation (`math::interpolators`)
//! - Composite trapezoidal quadrature used as the reference integral (`math::quadrature`)
//! - Error types: `SampleError`, `InterpolationError`, `QuadratureError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use integral_core::math::interpolators::{Interpolator, LinearInterpolator};
//! use integral_core::types::SampleSet;
//!
//! let samples = SampleSet::new(&[0.0, 5.0, 10.0], &[0.0, 5.0, 10.0]).unwrap();
//! assert_eq!(samples.trapezoid_area(), 50.0);
//!
//! let interp = LinearInterpolator::from_sample_set(&samples).unwrap();
//! // Linear extrapolation beyond the sampled domain
//! assert!((interp.interpolate(12.0).unwrap() - 12.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Domain`, `Extrapolation` and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
