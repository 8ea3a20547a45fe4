//! CSV output of prediction columns.

use std::fmt::Display;
use std::path::Path;

use tracing::info;

use crate::error::IoError;

/// Writes `values` as a single-column CSV with the given header.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be created or written.
pub fn write_column<T: Display>(path: &Path, header: &str, values: &[T]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([header])?;
    for v in values {
        writer.write_record([v.to_string()])?;
    }
    writer.flush().map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), n_rows = values.len(), "column written");
    Ok(())
}
