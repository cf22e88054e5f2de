//! Monte Carlo run configuration.
//!
//! # Architecture
//!
//! ```text
//! Comparator
//! ├── MonteCarloConfig   (sample count, seed, stratified variant)
//! ├── InterpolantCache   (interpolants keyed by sample set)
//! ├── IntegratorRng      (one stream per strategy)
//! └── SamplingStrategy
//!     ├── Uniform
//!     ├── Stratified (Midpoint | Jittered)
//!     └── Importance
//! ```
//!
//! ```rust
//! use integral_mc::mc::{MonteCarloConfig, StratifiedMode};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_samples(10_000)
//!     .seed(42)
//!     .stratified(StratifiedMode::Jittered)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.n_samples(), 10_000);
//! ```

mod config;
mod error;

pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, StratifiedMode, DEFAULT_SAMPLES, MAX_SAMPLES,
};
pub use error::ConfigError;
