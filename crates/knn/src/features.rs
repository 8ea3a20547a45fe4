//! Borrowed row-major feature matrix.

use crate::error::KnnError;

/// Read-only view of a flat row-major feature matrix `[n_rows × n_vars]`.
///
/// # Example
///
/// ```
/// use nearfit_knn::Features;
///
/// let data = [1.0, 1.0, 1.0, 2.0, 2.0, 1.0];
/// let x = Features::new(&data, 2).unwrap();
/// assert_eq!(x.n_rows(), 3);
/// assert_eq!(x.row(1), &[1.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features<'a> {
    data: &'a [f64],
    n_vars: usize,
}

impl<'a> Features<'a> {
    /// Wraps `data` as rows of `n_vars` features.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::ShapeMismatch`] if `n_vars == 0` or `data.len()` is
    /// not a multiple of `n_vars`.
    pub fn new(data: &'a [f64], n_vars: usize) -> Result<Self, KnnError> {
        if n_vars == 0 || !data.len().is_multiple_of(n_vars) {
            return Err(KnnError::ShapeMismatch {
                len: data.len(),
                n_vars,
            });
        }
        Ok(Self { data, n_vars })
    }

    /// Wraps a one-feature column, one row per value.
    pub fn column(data: &'a [f64]) -> Self {
        Self { data, n_vars: 1 }
    }

    /// Number of features per row.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.data.len() / self.n_vars
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The underlying flat slice.
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }

    /// Row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows()`.
    pub fn row(&self, i: usize) -> &'a [f64] {
        &self.data[i * self.n_vars..(i + 1) * self.n_vars]
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> std::slice::ChunksExact<'a, f64> {
        self.data.chunks_exact(self.n_vars)
    }

    pub(crate) fn all_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let x = Features::new(&data, 3).unwrap();
        assert_eq!(x.n_rows(), 2);
        assert_eq!(x.n_vars(), 3);
        assert_eq!(x.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(x.rows().count(), 2);
    }

    #[test]
    fn test_column() {
        let data = [1.0, 2.0, 3.0];
        let x = Features::column(&data);
        assert_eq!(x.n_rows(), 3);
        assert_eq!(x.row(2), &[3.0]);
    }

    #[test]
    fn test_empty_is_valid() {
        let x = Features::new(&[], 2).unwrap();
        assert!(x.is_empty());
        assert_eq!(x.n_rows(), 0);
    }

    #[test]
    fn test_not_divisible() {
        let err = Features::new(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap_err();
        assert_eq!(err, KnnError::ShapeMismatch { len: 5, n_vars: 2 });
    }

    #[test]
    fn test_zero_vars() {
        let err = Features::new(&[1.0], 0).unwrap_err();
        assert_eq!(err, KnnError::ShapeMismatch { len: 1, n_vars: 0 });
    }

    #[test]
    fn test_all_finite() {
        assert!(Features::column(&[1.0, -2.0]).all_finite());
        assert!(!Features::column(&[1.0, f64::NAN]).all_finite());
        assert!(!Features::column(&[f64::NEG_INFINITY]).all_finite());
    }
}
