//! Dense matrix primitives for Harris corner detection.
//!
//! ## Storage
//! A [`Matrix`] is a `rows x cols` grid of `f64` backed by a flat row-major
//! buffer. Logical indexing is `(i, j)` = (row, column).
//!
//! ## Purity
//! Every operation here returns a freshly owned matrix and leaves its inputs
//! untouched. Binary and variadic operations (`add`, `elementwise_mul`,
//! `compare`) require identical shapes on all operands and fail with
//! [`Error::DimensionMismatch`] otherwise.

mod compare;
mod error;
mod matrix;

pub use compare::Comparison;
pub use error::Error;
pub use matrix::Matrix;
