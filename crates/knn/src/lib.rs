//! Brute-force k-nearest-neighbor classification and regression.
//!
//! Every prediction compares a test row against all training rows, keeps the
//! k nearest and aggregates their labels or targets:
//!
//! | Operation | Aggregation | Tie-break |
//! |-----------|-------------|-----------|
//! | [`classify`] | Majority vote | Nearest first occurrence among tied labels |
//! | [`regress`] | Arithmetic mean | n/a |
//!
//! Neighbor ranking orders by distance, then by training index, so equal
//! distances favour earlier training rows. A k larger than the training set
//! is clamped to the training size.
//!
//! # Quick start
//!
//! ```
//! use nearfit_knn::{Features, KnnConfig, Metric, regress};
//!
//! let train = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let targets = [10.0, 20.0, 30.0, 40.0, 50.0];
//! let config = KnnConfig::new(3).with_metric(Metric::Euclidean);
//!
//! let predicted = regress(
//!     Features::column(&train),
//!     &targets,
//!     Features::column(&[3.0, 5.0]),
//!     &config,
//! )
//! .unwrap();
//! assert_eq!(predicted, vec![30.0, 40.0]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! classify() / regress()
//!   ├─ validate inputs
//!   └─ per test row (rayon or sequential)
//!        ├─ pre_root_distances()   (distance.rs)
//!        ├─ select_k_nearest()     (select.rs)
//!        └─ majority_vote() / mean_target()   (aggregate.rs)
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod features;
pub mod knn;
pub mod result;

pub(crate) mod distance;
pub(crate) mod select;

pub use aggregate::{majority_vote, mean_target};
pub use config::KnnConfig;
pub use distance::{Metric, distance};
pub use error::KnnError;
pub use features::Features;
pub use knn::{KnnScratch, classify, nearest_neighbors, nearest_neighbors_with_scratch, regress};
pub use result::Neighbors;
