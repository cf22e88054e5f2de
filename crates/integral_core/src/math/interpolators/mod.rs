//! Interpolation methods for numerical computation.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data points,
//!   with linear extrapolation beyond the sampled domain by default
//!
//! ## Core Trait
//!
//! All 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `interpolate_many(xs: &[T]) -> Result<Vec<T>, InterpolationError>`: Vectorised evaluation
//! - `domain() -> (T, T)`: Return the sampled range
//!
//! ## Example
//!
//! ```
//! use integral_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [0.0, 10.0, 20.0];
//! let ys = [0.0, 10.0, 0.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! assert_eq!(interp.domain(), (0.0, 20.0));
//!
//! let ys = interp.interpolate_many(&[5.0, 15.0, 25.0]).unwrap();
//! assert_eq!(ys, vec![5.0, 5.0, -5.0]);
//! ```

mod linear;
mod traits;

pub use linear::{Extrapolation, LinearInterpolator};
pub use traits::Interpolator;
