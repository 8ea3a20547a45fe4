//! Configuration for k-NN prediction.

use crate::distance::Metric;
use crate::error::KnnError;

/// Configuration for a k-NN prediction call.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use nearfit_knn::{KnnConfig, Metric};
///
/// let config = KnnConfig::new(5)
///     .with_metric(Metric::LegacySqrtAbsSum)
///     .with_parallel(false);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KnnConfig {
    /// Number of nearest neighbors to aggregate. Clamped to the training size.
    k: usize,
    /// Distance metric.
    metric: Metric,
    /// Evaluate test rows on the rayon thread pool.
    parallel: bool,
}

impl KnnConfig {
    /// Creates a new configuration with the given k.
    ///
    /// Defaults: `metric = Euclidean`, `parallel = true`.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            metric: Metric::Euclidean,
            parallel: true,
        }
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Enables or disables parallel evaluation of test rows.
    ///
    /// Output order and values do not depend on this setting.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the requested number of nearest neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the distance metric.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Returns whether test rows are evaluated in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the number of neighbors actually used for `n_train` rows.
    ///
    /// A k larger than the training set is clamped to `n_train`.
    pub fn effective_k(&self, n_train: usize) -> usize {
        self.k.min(n_train)
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k < 1.
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k < 1 {
            return Err(KnnError::InvalidK { k: self.k });
        }
        Ok(())
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
