//! Error types for the nearfit-knn crate.

/// Error type for all fallible operations in the nearfit-knn crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when the training set has no rows.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when a vector does not have the expected number of features.
    #[error("dimension mismatch: expected {expected} features, got {got}")]
    DimensionMismatch {
        /// Expected number of features.
        expected: usize,
        /// Number of features actually supplied.
        got: usize,
    },

    /// Returned when a flat row-major matrix cannot be split into rows of
    /// `n_vars` features (including `n_vars == 0`).
    #[error("matrix length {len} is not divisible by n_vars {n_vars}")]
    ShapeMismatch {
        /// Length of the flat matrix.
        len: usize,
        /// Requested number of features per row.
        n_vars: usize,
    },

    /// Returned when the number of training rows and labels differ.
    #[error("{rows} training rows but {labels} labels")]
    LabelCountMismatch {
        /// Number of training rows.
        rows: usize,
        /// Number of labels or targets.
        labels: usize,
    },

    /// Returned when a metric name is not recognised.
    #[error("unknown distance metric: {name:?}")]
    UnknownMetric {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when an input contains NaN or infinity.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_training_set() {
        let e = KnnError::EmptyTrainingSet;
        assert_eq!(e.to_string(), "training set is empty");
    }

    #[test]
    fn error_invalid_k() {
        let e = KnnError::InvalidK { k: 0 };
        assert_eq!(e.to_string(), "k must be >= 1, got 0");
    }

    #[test]
    fn error_dimension_mismatch() {
        let e = KnnError::DimensionMismatch {
            expected: 2,
            got: 3,
        };
        assert_eq!(
            e.to_string(),
            "dimension mismatch: expected 2 features, got 3"
        );
    }

    #[test]
    fn error_shape_mismatch() {
        let e = KnnError::ShapeMismatch { len: 10, n_vars: 3 };
        assert_eq!(
            e.to_string(),
            "matrix length 10 is not divisible by n_vars 3"
        );
    }

    #[test]
    fn error_label_count_mismatch() {
        let e = KnnError::LabelCountMismatch { rows: 5, labels: 4 };
        assert_eq!(e.to_string(), "5 training rows but 4 labels");
    }

    #[test]
    fn error_unknown_metric() {
        let e = KnnError::UnknownMetric {
            name: "cosine".to_string(),
        };
        assert_eq!(e.to_string(), "unknown distance metric: \"cosine\"");
    }

    #[test]
    fn error_non_finite_input() {
        let e = KnnError::NonFiniteInput { input: "test" };
        assert_eq!(e.to_string(), "non-finite value in test");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<KnnError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<KnnError>();
    }
}
