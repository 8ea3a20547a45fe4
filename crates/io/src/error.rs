//! Error types for nearfit-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the nearfit-io crate.
///
/// Covers missing files, CSV parse and write failures, and tables whose
/// contents cannot be turned into numeric features and targets.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the csv crate.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a requested column is not in the header row.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when column selection leaves no feature columns.
    #[error("no feature columns selected in {}", path.display())]
    NoFeatures {
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a file has a header but no data rows.
    #[error("no data rows in {}", path.display())]
    EmptyTable {
        /// Path to the empty file.
        path: PathBuf,
    },

    /// Returned when a cell cannot be parsed as a number.
    #[error("row {row}, column '{column}': cannot parse {value:?} as a number")]
    InvalidNumber {
        /// 1-based data row (header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// Returned when a class label is not a whole number.
    #[error("row {row}: class label {value} is not an integer")]
    NonIntegerLabel {
        /// 1-based data row (header excluded).
        row: usize,
        /// Offending value.
        value: f64,
    },

    /// Returned when a target column is required but the table has none.
    #[error("table has no target column")]
    NoTarget,

    /// Wraps a filesystem error.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
