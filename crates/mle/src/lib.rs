//! # nearfit-mle
//!
//! Maximum-likelihood linear regression. Under Gaussian noise the MLE of the
//! coefficients is the least-squares solution of the normal equations
//! `(XᵀX)θ = Xᵀy`, and the MLE of the noise variance is the population
//! variance of the residuals.
//!
//! ```
//! use nearfit_mle::{fit_line, generate_data};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(1234);
//! let sample = generate_data(100, &mut rng);
//! let fit = fit_line(&sample.x, &sample.y).unwrap();
//! let variance = fit.residual_variance(&sample.x, &sample.y);
//! assert!(variance > 0.0);
//! ```

mod data;
mod error;
mod line;
mod normal;

pub use data::{Sample, generate_data};
pub use error::MleError;
pub use line::{LinearFit, fit_line};
pub use normal::fit_least_squares;
