//! k-NN entry points and scratch buffer management.

use rayon::prelude::*;
use tracing::debug;

use crate::aggregate::{majority_vote, mean_target};
use crate::config::KnnConfig;
use crate::distance::{Metric, pre_root_distances};
use crate::error::KnnError;
use crate::features::Features;
use crate::result::Neighbors;
use crate::select::select_k_nearest;

/// Pre-allocated scratch buffers for neighbor queries.
///
/// Reuse across calls to [`nearest_neighbors_with_scratch`] to avoid
/// repeated heap allocation in loops. Batch predictors manage their own.
///
/// # Example
///
/// ```
/// use nearfit_knn::KnnScratch;
///
/// let mut scratch = KnnScratch::new(200);
/// // Use with nearest_neighbors_with_scratch() in a loop...
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnnScratch {
    /// Pre-root distances to every training row.
    pub(crate) pre_root: Vec<f64>,
    /// (distance, index) pairs for selection.
    pub(crate) pairs: Vec<(f64, usize)>,
    /// Indices of the k nearest neighbors.
    pub(crate) nn_indices: Vec<usize>,
    /// Distances of the k nearest neighbors.
    pub(crate) nn_dists: Vec<f64>,
}

impl KnnScratch {
    /// Creates a new scratch buffer with capacity for `max_train` training rows.
    pub fn new(max_train: usize) -> Self {
        Self {
            pre_root: Vec::with_capacity(max_train),
            pairs: Vec::with_capacity(max_train),
            nn_indices: Vec::with_capacity(max_train),
            nn_dists: Vec::with_capacity(max_train),
        }
    }
}

/// Validates the training side shared by every entry point.
fn validate_training(
    train: Features<'_>,
    n_labels: usize,
    config: &KnnConfig,
) -> Result<(), KnnError> {
    config.validate()?;

    if train.is_empty() {
        return Err(KnnError::EmptyTrainingSet);
    }
    if n_labels != train.n_rows() {
        return Err(KnnError::LabelCountMismatch {
            rows: train.n_rows(),
            labels: n_labels,
        });
    }
    if !train.all_finite() {
        return Err(KnnError::NonFiniteInput { input: "training" });
    }
    Ok(())
}

/// Validates the test matrix against the training width.
fn validate_test(train: Features<'_>, test: Features<'_>) -> Result<(), KnnError> {
    if test.n_vars() != train.n_vars() {
        return Err(KnnError::DimensionMismatch {
            expected: train.n_vars(),
            got: test.n_vars(),
        });
    }
    if !test.all_finite() {
        return Err(KnnError::NonFiniteInput { input: "test" });
    }
    Ok(())
}

/// Returns the clamped k, logging when clamping happens.
fn effective_k(config: &KnnConfig, n_train: usize) -> usize {
    let k_eff = config.effective_k(n_train);
    if k_eff < config.k() {
        debug!(k = config.k(), n_train, k_eff, "k exceeds training size, clamping");
    }
    k_eff
}

/// Fills `scratch.nn_indices` / `scratch.nn_dists` for one validated query.
fn rank_into(
    train: Features<'_>,
    query: &[f64],
    k_eff: usize,
    metric: Metric,
    scratch: &mut KnnScratch,
) {
    scratch.pre_root.clear();
    scratch.pre_root.resize(train.n_rows(), 0.0);
    pre_root_distances(
        train.as_slice(),
        train.n_vars(),
        query,
        metric,
        &mut scratch.pre_root,
    );
    select_k_nearest(
        &scratch.pre_root,
        k_eff,
        &mut scratch.pairs,
        &mut scratch.nn_indices,
        &mut scratch.nn_dists,
    );
}

/// Ranks every test row and aggregates its neighbors, preserving row order.
///
/// Rows are independent; in parallel mode each rayon worker owns one
/// scratch buffer and the indexed `collect` keeps input order.
fn predict_rows<T, F>(
    train: Features<'_>,
    test: Features<'_>,
    config: &KnnConfig,
    aggregate: F,
) -> Result<Vec<T>, KnnError>
where
    T: Send,
    F: Fn(&[usize]) -> Result<T, KnnError> + Sync,
{
    let n_train = train.n_rows();
    let k_eff = effective_k(config, n_train);
    let metric = config.metric();

    if config.parallel() {
        test.as_slice()
            .par_chunks_exact(test.n_vars())
            .map_init(
                || KnnScratch::new(n_train),
                |scratch, row| {
                    rank_into(train, row, k_eff, metric, scratch);
                    aggregate(&scratch.nn_indices)
                },
            )
            .collect()
    } else {
        let mut scratch = KnnScratch::new(n_train);
        test.rows()
            .map(|row| {
                rank_into(train, row, k_eff, metric, &mut scratch);
                aggregate(&scratch.nn_indices)
            })
            .collect()
    }
}

/// Finds the k nearest training rows of `query`, allocating scratch internally.
///
/// # Errors
///
/// Returns [`KnnError`] if k is zero, the training set is empty or
/// non-finite, or `query` does not have `train.n_vars()` finite features.
pub fn nearest_neighbors(
    train: Features<'_>,
    query: &[f64],
    config: &KnnConfig,
) -> Result<Neighbors, KnnError> {
    let mut scratch = KnnScratch::new(train.n_rows());
    nearest_neighbors_with_scratch(train, query, config, &mut scratch)
}

/// Finds the k nearest training rows of `query`, reusing `scratch`.
///
/// Identical to [`nearest_neighbors`] but avoids heap allocation by reusing
/// `scratch`. Buffers grow as needed and never shrink.
///
/// # Errors
///
/// Same as [`nearest_neighbors`].
pub fn nearest_neighbors_with_scratch(
    train: Features<'_>,
    query: &[f64],
    config: &KnnConfig,
    scratch: &mut KnnScratch,
) -> Result<Neighbors, KnnError> {
    validate_training(train, train.n_rows(), config)?;
    if query.len() != train.n_vars() {
        return Err(KnnError::DimensionMismatch {
            expected: train.n_vars(),
            got: query.len(),
        });
    }
    if query.iter().any(|v| !v.is_finite()) {
        return Err(KnnError::NonFiniteInput { input: "query" });
    }

    let k_eff = effective_k(config, train.n_rows());
    rank_into(train, query, k_eff, config.metric(), scratch);
    Ok(Neighbors::new(
        scratch.nn_indices.clone(),
        scratch.nn_dists.clone(),
    ))
}

/// Predicts a label for every row of `test` by majority vote of its k
/// nearest training rows.
///
/// Ties go to the tied label that occurs first in nearest-to-farthest order.
/// k larger than the training set is clamped to the training size.
///
/// # Errors
///
/// Returns [`KnnError`] for k == 0, an empty or non-finite training set, a
/// label count differing from the training rows, or test rows whose width
/// differs from the training rows.
///
/// # Example
///
/// ```
/// use nearfit_knn::{Features, KnnConfig, classify};
///
/// let train = [1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 8.0, 8.0, 8.0, 9.0];
/// let labels = [0, 0, 0, 1, 1];
/// let test = [1.5, 1.5];
///
/// let predicted = classify(
///     Features::new(&train, 2).unwrap(),
///     &labels,
///     Features::new(&test, 2).unwrap(),
///     &KnnConfig::new(3),
/// )
/// .unwrap();
/// assert_eq!(predicted, vec![0]);
/// ```
#[tracing::instrument(skip_all, fields(n_train = train.n_rows(), n_test = test.n_rows(), k = config.k()))]
pub fn classify<L>(
    train: Features<'_>,
    labels: &[L],
    test: Features<'_>,
    config: &KnnConfig,
) -> Result<Vec<L>, KnnError>
where
    L: Clone + PartialEq + Send + Sync,
{
    validate_training(train, labels.len(), config)?;
    validate_test(train, test)?;

    predict_rows(train, test, config, |nn_indices| {
        let votes: Vec<&L> = nn_indices.iter().map(|&i| &labels[i]).collect();
        majority_vote(&votes)
            .cloned()
            .ok_or(KnnError::EmptyTrainingSet)
    })
}

/// Predicts a value for every row of `test` as the mean target of its k
/// nearest training rows.
///
/// k larger than the training set is clamped to the training size.
///
/// # Errors
///
/// Same as [`classify`], plus [`KnnError::NonFiniteInput`] for non-finite
/// targets.
///
/// # Example
///
/// ```
/// use nearfit_knn::{Features, KnnConfig, regress};
///
/// let train = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let targets = [10.0, 20.0, 30.0, 40.0, 50.0];
///
/// let predicted = regress(
///     Features::column(&train),
///     &targets,
///     Features::column(&[3.0]),
///     &KnnConfig::new(3),
/// )
/// .unwrap();
/// assert_eq!(predicted, vec![30.0]);
/// ```
#[tracing::instrument(skip_all, fields(n_train = train.n_rows(), n_test = test.n_rows(), k = config.k()))]
pub fn regress(
    train: Features<'_>,
    targets: &[f64],
    test: Features<'_>,
    config: &KnnConfig,
) -> Result<Vec<f64>, KnnError> {
    validate_training(train, targets.len(), config)?;
    if targets.iter().any(|v| !v.is_finite()) {
        return Err(KnnError::NonFiniteInput { input: "targets" });
    }
    validate_test(train, test)?;

    predict_rows(train, test, config, |nn_indices| {
        let values: Vec<f64> = nn_indices.iter().map(|&i| targets[i]).collect();
        mean_target(&values)
    })
}
