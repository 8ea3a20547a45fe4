//! Synthetic data for the line-fitting demonstration.

use std::f64::consts::PI;

use rand::Rng;

/// Paired observations `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Inputs.
    pub x: Vec<f64>,
    /// Responses.
    pub y: Vec<f64>,
}

impl Sample {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if there are no observations.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Generates `n` points with `x` evenly spaced over `[0, 2]` and
/// `y = x − sin(1.5πx) + u`, where `u ~ U[0, 1)` is drawn from `rng`.
///
/// The generator is passed in explicitly; seed it for reproducible output.
pub fn generate_data(n: usize, rng: &mut impl Rng) -> Sample {
    let x = nearfit_stats::linspace(0.0, 2.0, n);
    let y = x
        .iter()
        .map(|&xi| {
            let u: f64 = rng.random();
            xi - (1.5 * PI * xi).sin() + u
        })
        .collect();
    Sample { x, y }
}
