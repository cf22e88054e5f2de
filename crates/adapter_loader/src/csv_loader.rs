//! CSV column extraction.

use crate::error::LoaderError;
use integral_core::types::SampleSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Default independent-variable column.
pub const DEFAULT_X_COLUMN: &str = "Temperature";

/// Default dependent-variable column.
pub const DEFAULT_Y_COLUMN: &str = "Ice Cream Profits";

/// Reads two named numeric columns from CSV with a header row.
///
/// Headers and cells are trimmed before matching and parsing. Columns other
/// than the two requested are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSampleLoader {
    x_column: String,
    y_column: String,
}

impl Default for CsvSampleLoader {
    fn default() -> Self {
        Self::new(DEFAULT_X_COLUMN, DEFAULT_Y_COLUMN)
    }
}

impl CsvSampleLoader {
    /// Creates a loader for the given column headers.
    pub fn new(x_column: impl Into<String>, y_column: impl Into<String>) -> Self {
        Self {
            x_column: x_column.into(),
            y_column: y_column.into(),
        }
    }

    /// Independent-variable column header.
    pub fn x_column(&self) -> &str {
        &self.x_column
    }

    /// Dependent-variable column header.
    pub fn y_column(&self) -> &str {
        &self.y_column
    }

    /// Loads a sample set from a CSV file.
    ///
    /// # Errors
    ///
    /// `LoaderError::Io` if the file cannot be opened, otherwise as
    /// [`CsvSampleLoader::load_reader`].
    pub fn load_path(&self, path: &Path) -> Result<SampleSet, LoaderError> {
        info!(path = %path.display(), x = %self.x_column, y = %self.y_column, "loading samples");
        let file = File::open(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_reader(file)
    }

    /// Loads a sample set from any CSV source.
    ///
    /// # Errors
    ///
    /// - `LoaderError::Csv` for malformed CSV
    /// - `LoaderError::MissingColumn` if either header is absent
    /// - `LoaderError::NonNumeric` for a cell that does not parse as a number
    /// - `LoaderError::Samples` if the columns fail sample-set validation
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<SampleSet, LoaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let x_index = column_index(&headers, &self.x_column)?;
        let y_index = column_index(&headers, &self.y_column)?;

        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let row = i + 1;
            xs.push(parse_cell(&record, x_index, &self.x_column, row)?);
            ys.push(parse_cell(&record, y_index, &self.y_column, row)?);
        }

        debug!(rows = xs.len(), "parsed sample columns");
        Ok(SampleSet::new(&xs, &ys)?)
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize, LoaderError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| LoaderError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().map(str::to_string).collect(),
        })
}

fn parse_cell(
    record: &csv::StringRecord,
    index: usize,
    column: &str,
    row: usize,
) -> Result<f64, LoaderError> {
    let value = record.get(index).unwrap_or_default();
    value.parse::<f64>().map_err(|_| LoaderError::NonNumeric {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}
