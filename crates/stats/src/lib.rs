//! Statistical helper functions for the nearfit crates.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
///
/// Computed as a running mean that scales each term before subtracting, so a
/// slice of identical values returns that value exactly and finite inputs
/// near `f64::MAX` do not overflow. Callers that must not see a silent 0.0
/// (e.g. k-NN regression) check for emptiness before calling.
pub fn mean(data: &[f64]) -> f64 {
    let mut m = 0.0;
    for (i, &x) in data.iter().enumerate() {
        let n = (i + 1) as f64;
        m += x / n - m / n;
    }
    m
}

/// Population variance with N denominator (NumPy's default `var`).
/// Returns 0.0 if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Euclidean norm of `observed - predicted`.
///
/// Pairs beyond the shorter slice are ignored.
pub fn residual_norm(observed: &[f64], predicted: &[f64]) -> f64 {
    observed
        .iter()
        .zip(predicted.iter())
        .map(|(o, p)| (o - p) * (o - p))
        .sum::<f64>()
        .sqrt()
}

/// Root mean squared error between `observed` and `predicted`.
///
/// Returns `None` if the slices are empty or differ in length.
pub fn rmse(observed: &[f64], predicted: &[f64]) -> Option<f64> {
    if observed.is_empty() || observed.len() != predicted.len() {
        return None;
    }
    let n = observed.len() as f64;
    Some(residual_norm(observed, predicted) / n.sqrt())
}

/// `n` evenly spaced values over the closed interval `[start, stop]`.
///
/// `n == 1` yields `[start]`, `n == 0` yields an empty vector.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the endpoint against accumulated rounding
            out[n - 1] = stop;
            out
        }
    }
}
