//! CSV table reader configuration and orchestration.

use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::table::Table;

/// Which column holds the target (label or regression value).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TargetColumn {
    /// The last column of the header.
    #[default]
    Last,
    /// A column by name.
    Named(String),
    /// No target column (e.g. test-set files).
    Absent,
}

/// Column selection for [`read_table`].
///
/// The [`Default`] reads every column except the last as features and the
/// last column as the target.
///
/// # Example
///
/// ```
/// use nearfit_io::TableSpec;
///
/// let spec = TableSpec::default()
///     .with_features(["age"])
///     .with_target("bmd");
/// assert_eq!(spec.features(), Some(&["age".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSpec {
    /// Feature columns by name; `None` selects every non-target column.
    features: Option<Vec<String>>,
    /// Target column.
    target: TargetColumn,
}

impl TableSpec {
    /// Selects feature columns by name, in the given order.
    pub fn with_features<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Selects the target column by name.
    pub fn with_target(mut self, name: impl Into<String>) -> Self {
        self.target = TargetColumn::Named(name.into());
        self
    }

    /// Reads no target column.
    pub fn without_target(mut self) -> Self {
        self.target = TargetColumn::Absent;
        self
    }

    /// Feature column names, if set explicitly.
    pub fn features(&self) -> Option<&[String]> {
        self.features.as_deref()
    }

    /// Target column selection.
    pub fn target(&self) -> &TargetColumn {
        &self.target
    }
}

/// Resolves the target column index and name against the header row.
fn resolve_target(
    headers: &[String],
    target: &TargetColumn,
    path: &Path,
) -> Result<Option<usize>, IoError> {
    match target {
        TargetColumn::Absent => Ok(None),
        TargetColumn::Last => {
            if headers.is_empty() {
                return Err(IoError::EmptyTable {
                    path: path.to_path_buf(),
                });
            }
            Ok(Some(headers.len() - 1))
        }
        TargetColumn::Named(name) => find_column(headers, name, path).map(Some),
    }
}

fn find_column(headers: &[String], name: &str, path: &Path) -> Result<usize, IoError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}

fn parse_cell(raw: &str, row: usize, column: &str) -> Result<f64, IoError> {
    raw.parse::<f64>().map_err(|_| IoError::InvalidNumber {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Reads a headered CSV file into a numeric [`Table`].
///
/// Cells are trimmed before parsing. Every selected cell must parse as `f64`.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::MissingColumn`] for unknown column names,
/// [`IoError::NoFeatures`] if no feature column remains,
/// [`IoError::InvalidNumber`] for unparsable cells,
/// [`IoError::EmptyTable`] if there are no data rows, and
/// [`IoError::Csv`] for malformed CSV.
pub fn read_table(path: &Path, spec: &TableSpec) -> Result<Table, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    debug!(path = %path.display(), columns = ?headers, "read csv header");

    let target_idx = resolve_target(&headers, spec.target(), path)?;
    let feature_idx: Vec<usize> = match spec.features() {
        Some(names) => names
            .iter()
            .map(|n| find_column(&headers, n, path))
            .collect::<Result<_, _>>()?,
        None => (0..headers.len())
            .filter(|&i| Some(i) != target_idx)
            .collect(),
    };
    if feature_idx.is_empty() {
        return Err(IoError::NoFeatures {
            path: path.to_path_buf(),
        });
    }

    let mut features = Vec::new();
    let mut targets = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = i + 1;
        for &j in &feature_idx {
            let raw = record.get(j).unwrap_or_default();
            features.push(parse_cell(raw, row, &headers[j])?);
        }
        if let Some(t) = target_idx {
            let raw = record.get(t).unwrap_or_default();
            targets.push(parse_cell(raw, row, &headers[t])?);
        }
    }

    if features.is_empty() {
        return Err(IoError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let feature_names: Vec<String> = feature_idx.iter().map(|&j| headers[j].clone()).collect();
    let target_name = target_idx.map(|t| headers[t].clone());
    let table = Table::new(features, feature_names, targets, target_name);
    info!(
        path = %path.display(),
        n_rows = table.n_rows(),
        n_vars = table.n_vars(),
        "table loaded"
    );
    Ok(table)
}
