//! In-memory numeric table.

use crate::error::IoError;

/// Numeric table loaded from CSV.
///
/// Features are stored flat row-major (`[n_rows × n_vars]`), the layout the
/// k-NN predictors consume directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Flat row-major feature values.
    features: Vec<f64>,
    /// Feature column names, in storage order.
    feature_names: Vec<String>,
    /// Target values, one per row (empty when no target column was read).
    targets: Vec<f64>,
    /// Target column name, if any.
    target_name: Option<String>,
}

impl Table {
    /// Creates a new `Table`.
    pub(crate) fn new(
        features: Vec<f64>,
        feature_names: Vec<String>,
        targets: Vec<f64>,
        target_name: Option<String>,
    ) -> Self {
        debug_assert!(!feature_names.is_empty());
        debug_assert_eq!(features.len() % feature_names.len(), 0);
        Self {
            features,
            feature_names,
            targets,
            target_name,
        }
    }

    /// Flat row-major feature values.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Number of feature columns.
    pub fn n_vars(&self) -> usize {
        self.feature_names.len()
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.features.len() / self.n_vars()
    }

    /// Feature column names.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Target values (empty if the table was read without a target).
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Target column name, if one was read.
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }

    /// Target values as integer class labels.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::NoTarget`] if the table has no target column and
    /// [`IoError::NonIntegerLabel`] for any fractional value.
    pub fn class_labels(&self) -> Result<Vec<i64>, IoError> {
        if self.target_name.is_none() {
            return Err(IoError::NoTarget);
        }
        self.targets
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                    Ok(v as i64)
                } else {
                    Err(IoError::NonIntegerLabel { row: i + 1, value: v })
                }
            })
            .collect()
    }
}
