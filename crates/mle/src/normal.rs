//! Least squares via the normal equations.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::MleError;

/// Relative pivot threshold below which `XᵀX` is treated as singular.
const PIVOT_TOL: f64 = 1e-12;

/// Solves `(XᵀX) θ = Xᵀy` for θ.
///
/// `design` is the `n × p` design matrix (include a column of ones for an
/// intercept). Under Gaussian noise this θ is the maximum-likelihood
/// estimate.
///
/// # Errors
///
/// Returns [`MleError::LengthMismatch`] if `design.nrows() != y.len()`,
/// [`MleError::InsufficientData`] if `n < p` or `p == 0`,
/// [`MleError::NonFiniteData`] for NaN/inf inputs and
/// [`MleError::Singular`] if the columns are linearly dependent.
pub fn fit_least_squares(
    design: ArrayView2<'_, f64>,
    y: ArrayView1<'_, f64>,
) -> Result<Array1<f64>, MleError> {
    let (n, p) = design.dim();
    if n != y.len() {
        return Err(MleError::LengthMismatch { x: n, y: y.len() });
    }
    if p == 0 || n < p {
        return Err(MleError::InsufficientData { n, min: p.max(1) });
    }
    if design.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(MleError::NonFiniteData);
    }

    let xtx = design.t().dot(&design);
    let xty = design.t().dot(&y);
    solve(xtx, xty)
}

/// Gaussian elimination with partial pivoting on a square system.
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>, MleError> {
    let p = b.len();
    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if scale == 0.0 {
        return Err(MleError::Singular);
    }

    for col in 0..p {
        let pivot = (col..p)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);
        if a[[pivot, col]].abs() <= PIVOT_TOL * scale {
            return Err(MleError::Singular);
        }
        if pivot != col {
            for k in 0..p {
                a.swap([col, k], [pivot, k]);
            }
            b.swap(col, pivot);
        }
        for row in (col + 1)..p {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0.0 {
                continue;
            }
            for k in col..p {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut theta = Array1::<f64>::zeros(p);
    for row in (0..p).rev() {
        let tail: f64 = ((row + 1)..p).map(|k| a[[row, k]] * theta[k]).sum();
        theta[row] = (b[row] - tail) / a[[row, row]];
    }
    Ok(theta)
}
