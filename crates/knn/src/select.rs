//! Top-k nearest neighbor selection.

use std::cmp::Ordering;

/// Orders by distance, then by training index.
#[inline]
fn by_distance_then_index(a: &(f64, usize), b: &(f64, usize)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

/// Selects the `k_eff` nearest neighbors from pre-root distances.
///
/// Sums are rooted before comparison, so two rows whose distances round to
/// the same `f64` tie and the earlier row wins. Partitions with `select_nth_unstable_by` and sorts only the k-prefix, so
/// the cost is O(n + k log k) per query.
///
/// Writes results into caller-provided buffers:
/// - `pairs`: scratch buffer for (distance, index) pairs
/// - `nn_indices`: indices of the k nearest neighbors (ascending distance,
///   ties by ascending index)
/// - `nn_dists`: distances (square root of the pre-root sums) of the k nearest neighbors
///
/// # Panics
///
/// Debug-asserts that `k_eff >= 1` and `k_eff <= pre_root.len()`.
pub(crate) fn select_k_nearest(
    pre_root: &[f64],
    k_eff: usize,
    pairs: &mut Vec<(f64, usize)>,
    nn_indices: &mut Vec<usize>,
    nn_dists: &mut Vec<f64>,
) {
    debug_assert!(k_eff >= 1);
    debug_assert!(k_eff <= pre_root.len());

    pairs.clear();
    pairs.extend(pre_root.iter().enumerate().map(|(i, &d)| (d.sqrt(), i)));

    if k_eff < pairs.len() {
        pairs.select_nth_unstable_by(k_eff - 1, by_distance_then_index);
        pairs.truncate(k_eff);
    }
    pairs.sort_unstable_by(by_distance_then_index);

    nn_indices.clear();
    nn_dists.clear();
    for &(d, idx) in pairs.iter() {
        nn_indices.push(idx);
        nn_dists.push(d);
    }
}
