//! # adapter_loader: Sample Set Ingestion (Adapter Layer)
//!
//! Extracts two numeric columns from tabular input and validates them into an
//! [`integral_core::types::SampleSet`]. The engine never sees raw files; it
//! only receives the validated sample set.
//!
//! ## Usage Example
//!
//! ```rust
//! use adapter_loader::CsvSampleLoader;
//!
//! let data = "Temperature,Ice Cream Profits\n14.2,215\n16.4,325\n11.9,185\n";
//! let samples = CsvSampleLoader::default().load_reader(data.as_bytes()).unwrap();
//!
//! assert_eq!(samples.len(), 3);
//! assert_eq!(samples.xs(), &[11.9, 14.2, 16.4]);
//! ```

#![deny(missing_docs)]

mod csv_loader;
mod error;

pub use csv_loader::{CsvSampleLoader, DEFAULT_X_COLUMN, DEFAULT_Y_COLUMN};
pub use error::LoaderError;
