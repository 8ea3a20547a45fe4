//! Error types for the nearfit-mle crate.

/// Error type for all fallible operations in the nearfit-mle crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MleError {
    /// Returned when `x` and `y` (or design rows and `y`) differ in length.
    #[error("length mismatch: {x} inputs but {y} responses")]
    LengthMismatch {
        /// Number of input rows.
        x: usize,
        /// Number of responses.
        y: usize,
    },

    /// Returned when there are fewer observations than parameters.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the normal matrix `XᵀX` cannot be inverted.
    #[error("normal equations are singular")]
    Singular,

    /// Returned when the input data contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,
}
