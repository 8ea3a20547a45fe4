//! # nearfit-io
//!
//! Read numeric tables from CSV files and write prediction columns back.
//! Bridges external files into the flat row-major `&[f64]` layout used by
//! the predictors.

mod error;
mod reader;
mod table;
mod writer;

pub use error::IoError;
pub use reader::{TableSpec, TargetColumn, read_table};
pub use table::Table;
pub use writer::write_column;
