//! Aggregation of neighbor labels and targets.

use crate::error::KnnError;

/// Majority vote over neighbor labels given in nearest-to-farthest order.
///
/// Ties between equally frequent labels go to the label whose first
/// occurrence is nearest. Returns `None` only for an empty slice.
pub fn majority_vote<L: Clone + PartialEq>(labels: &[L]) -> Option<L> {
    // (label, count) in order of first occurrence
    let mut counts: Vec<(&L, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut best: Option<(&L, usize)> = None;
    for &(label, count) in &counts {
        // Strictly greater keeps the earliest label among ties
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label.clone())
}

/// Mean of neighbor targets.
///
/// # Errors
///
/// Returns [`KnnError::EmptyTrainingSet`] if `targets` is empty, so a
/// division by zero never surfaces as NaN.
pub fn mean_target(targets: &[f64]) -> Result<f64, KnnError> {
    if targets.is_empty() {
        return Err(KnnError::EmptyTrainingSet);
    }
    Ok(nearfit_stats::mean(targets))
}
