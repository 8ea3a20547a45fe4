//! Output type for nearest-neighbor queries.

/// The k nearest training rows of one query.
///
/// Entries are sorted by ascending distance, ties by ascending training
/// index.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbors {
    /// Training row indices `[0..n_train)`.
    indices: Vec<usize>,
    /// Distances matching `indices`.
    distances: Vec<f64>,
}

impl Neighbors {
    /// Creates a new `Neighbors`.
    pub(crate) fn new(indices: Vec<usize>, distances: Vec<f64>) -> Self {
        debug_assert_eq!(indices.len(), distances.len());
        Self { indices, distances }
    }

    /// Returns the training row indices of the neighbors.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the distances of the neighbors.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Number of neighbors (the effective k).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if there are no neighbors.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Index of the nearest training row.
    ///
    /// # Panics
    ///
    /// Panics if empty. Values returned by [`crate::nearest_neighbors`] always
    /// hold at least one neighbor.
    pub fn nearest(&self) -> usize {
        self.indices[0]
    }
}
