//! Loader error types.

use integral_core::types::SampleError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while turning tabular input into a sample set.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The input file could not be opened.
    #[error("Cannot read {path}: {source}")]
    Io {
        /// File that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (e.g. ragged rows, invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column header is absent.
    #[error("Missing column '{column}' (available: {})", available.join(", "))]
    MissingColumn {
        /// Requested header
        column: String,
        /// Headers present in the input
        available: Vec<String>,
    },

    /// A cell in a required column is not a number.
    #[error("Non-numeric value '{value}' in column '{column}' at data row {row}")]
    NonNumeric {
        /// 1-based data row (header excluded)
        row: usize,
        /// Column header
        column: String,
        /// Offending cell content
        value: String,
    },

    /// The extracted columns do not form a valid sample set.
    #[error(transparent)]
    Samples(#[from] SampleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_lists_available_headers() {
        let err = LoaderError::MissingColumn {
            column: "Temperature".to_string(),
            available: vec!["Date".to_string(), "Sales".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing column 'Temperature' (available: Date, Sales)"
        );
    }

    #[test]
    fn test_non_numeric_display() {
        let err = LoaderError::NonNumeric {
            row: 3,
            column: "Ice Cream Profits".to_string(),
            value: "n/a".to_string(),
        };
        assert!(err.to_string().contains("'n/a'"));
        assert!(err.to_string().contains("data row 3"));
    }
}
