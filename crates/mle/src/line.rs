//! Straight-line fit `y = intercept + slope·x`.

use std::f64::consts::PI;

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::error::MleError;
use crate::normal::fit_least_squares;

/// Maximum-likelihood straight line under Gaussian noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    intercept: f64,
    slope: f64,
}

impl LinearFit {
    /// Creates a line from its parameters.
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Intercept θ₀.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Slope θ₁.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Fitted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Residuals `y − ŷ`.
    pub fn residuals(&self, x: &[f64], y: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| yi - self.predict(xi))
            .collect()
    }

    /// Population variance of the residuals, the MLE of the noise variance σ².
    pub fn residual_variance(&self, x: &[f64], y: &[f64]) -> f64 {
        nearfit_stats::population_variance(&self.residuals(x, y))
    }

    /// Gaussian log-likelihood at the MLE noise variance.
    ///
    /// Uses `σ² = mean(residual²)`, giving `−n/2 · (ln(2πσ²) + 1)`.
    /// Returns `f64::INFINITY` for a perfect fit.
    pub fn log_likelihood(&self, x: &[f64], y: &[f64]) -> f64 {
        let r = self.residuals(x, y);
        let n = r.len() as f64;
        let sigma2 = r.iter().map(|e| e * e).sum::<f64>() / n;
        if sigma2 == 0.0 {
            return f64::INFINITY;
        }
        -0.5 * n * ((2.0 * PI * sigma2).ln() + 1.0)
    }
}

/// Fits `y = θ₀ + θ₁·x` by solving the normal equations.
///
/// # Errors
///
/// Returns [`MleError::LengthMismatch`] if `x` and `y` differ in length,
/// [`MleError::InsufficientData`] for fewer than two points,
/// [`MleError::NonFiniteData`] for NaN/inf input and
/// [`MleError::Singular`] if every `x` is identical.
///
/// # Example
///
/// ```
/// use nearfit_mle::fit_line;
///
/// let fit = fit_line(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
/// assert!((fit.slope() - 2.0).abs() < 1e-10);
/// assert!((fit.intercept() - 1.0).abs() < 1e-10);
/// ```
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LinearFit, MleError> {
    if x.len() != y.len() {
        return Err(MleError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let n = x.len();
    let design = Array2::from_shape_fn((n, 2), |(i, j)| if j == 0 { 1.0 } else { x[i] });
    let y = Array1::from_vec(y.to_vec());
    let theta = fit_least_squares(design.view(), y.view())?;
    debug!(intercept = theta[0], slope = theta[1], n, "line fitted");
    Ok(LinearFit::new(theta[0], theta[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_exact_line() {
        let x = [0.0, 0.5, 1.0, 1.5, 2.0];
        let y: Vec<f64> = x.iter().map(|&v| 3.0 - 1.5 * v).collect();
        let fit = fit_line(&x, &y).unwrap();
        assert_abs_diff_eq!(fit.intercept(), 3.0, epsilon = 1e-10);
        assert_abs_diff_eq!(fit.slope(), -1.5, epsilon = 1e-10);
        assert_abs_diff_eq!(fit.residual_variance(&x, &y), 0.0, epsilon = 1e-20);
    }

    #[test]
    fn test_hand_computed_regression() {
        // x = 1..5, y = [2, 4, 5, 4, 5]: slope 0.6, intercept 2.2
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        let fit = fit_line(&x, &y).unwrap();
        assert_abs_diff_eq!(fit.slope(), 0.6, epsilon = 1e-10);
        assert_abs_diff_eq!(fit.intercept(), 2.2, epsilon = 1e-10);
        // residuals: -0.8, 0.6, 1.0, -0.6, -0.2 => mean 0, var = 2.4 / 5
        assert_abs_diff_eq!(fit.residual_variance(&x, &y), 0.48, epsilon = 1e-10);
    }

    #[test]
    fn test_log_likelihood() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        let fit = fit_line(&x, &y).unwrap();
        let expected = -2.5 * ((2.0 * PI * 0.48).ln() + 1.0);
        assert_abs_diff_eq!(fit.log_likelihood(&x, &y), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_predict() {
        let fit = LinearFit::new(1.0, 2.0);
        assert_eq!(fit.predict(3.0), 7.0);
        assert_eq!(fit.residuals(&[0.0, 1.0], &[1.5, 2.0]), vec![0.5, -1.0]);
    }

    #[test]
    fn test_constant_x_is_singular() {
        assert_eq!(
            fit_line(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(MleError::Singular)
        );
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(
            fit_line(&[1.0], &[1.0]),
            Err(MleError::InsufficientData { n: 1, min: 2 })
        );
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            fit_line(&[1.0, 2.0], &[1.0]),
            Err(MleError::LengthMismatch { x: 2, y: 1 })
        );
    }
}
