//! Distance metrics.
//!
//! Both metrics are a square root of an accumulated sum. The batch kernel
//! fills the sums; selection roots them before comparing, since distinct sums
//! can round to the same distance.

use std::fmt;
use std::str::FromStr;

use crate::error::KnnError;

/// Distance metric between two feature vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// `sqrt(Σ (a_j − b_j)²)`.
    #[default]
    Euclidean,
    /// `sqrt(Σ |a_j − b_j|)`.
    ///
    /// Historically exposed under the name "manhattan". This is not the L1
    /// distance (which has no outer root); it is kept so earlier numeric
    /// outputs stay reproducible.
    LegacySqrtAbsSum,
}

impl Metric {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::LegacySqrtAbsSum => "legacy-sqrt-abs-sum",
        }
    }

    /// Sum under the square root, without bounds checks.
    #[inline]
    pub(crate) fn pre_root(self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Metric::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| {
                    let d = x - y;
                    d * d
                })
                .sum(),
            Metric::LegacySqrtAbsSum => a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = KnnError;

    /// Parses a metric name, case-insensitively.
    ///
    /// Accepts the canonical names plus the spellings `"eucledian"` and
    /// `"manhattan"` used by older data pipelines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "euclidean" | "eucledian" => Ok(Metric::Euclidean),
            "legacy-sqrt-abs-sum" | "manhattan" => Ok(Metric::LegacySqrtAbsSum),
            _ => Err(KnnError::UnknownMetric {
                name: s.to_string(),
            }),
        }
    }
}

/// Computes the distance between `a` and `b` under `metric`.
///
/// # Errors
///
/// Returns [`KnnError::DimensionMismatch`] if the vectors differ in length.
///
/// # Example
///
/// ```
/// use nearfit_knn::{Metric, distance};
///
/// let d = distance(&[0.0, 0.0], &[3.0, 4.0], Metric::Euclidean).unwrap();
/// assert_eq!(d, 5.0);
/// ```
pub fn distance(a: &[f64], b: &[f64], metric: Metric) -> Result<f64, KnnError> {
    if a.len() != b.len() {
        return Err(KnnError::DimensionMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    Ok(metric.pre_root(a, b).sqrt())
}

/// Computes pre-root distances from `target` to every row of `candidates`.
///
/// `candidates` is a flat row-major matrix `[n_candidates × n_vars]`.
///
/// # Panics
///
/// Debug-asserts that `candidates.len() % n_vars == 0`, `target.len() == n_vars`
/// and `out.len() == candidates.len() / n_vars`.
pub(crate) fn pre_root_distances(
    candidates: &[f64],
    n_vars: usize,
    target: &[f64],
    metric: Metric,
    out: &mut [f64],
) {
    debug_assert_eq!(candidates.len() % n_vars, 0);
    debug_assert_eq!(target.len(), n_vars);
    debug_assert_eq!(out.len(), candidates.len() / n_vars);

    match (metric, n_vars) {
        (Metric::Euclidean, 1) => {
            let t = target[0];
            for (o, &c) in out.iter_mut().zip(candidates.iter()) {
                let d = c - t;
                *o = d * d;
            }
        }
        (Metric::LegacySqrtAbsSum, 1) => {
            let t = target[0];
            for (o, &c) in out.iter_mut().zip(candidates.iter()) {
                *o = (c - t).abs();
            }
        }
        _ => {
            for (o, row) in out.iter_mut().zip(candidates.chunks_exact(n_vars)) {
                *o = metric.pre_root(row, target);
            }
        }
    }
}
