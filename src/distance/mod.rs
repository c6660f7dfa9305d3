//! Distance metric and precomputed distance matrix.
//!
//! Both constructors read distances from the same [`DistanceMatrix`], which
//! is filled with [`euclidean`], so their tour lengths are comparable.

mod matrix;
mod metric;

pub use matrix::DistanceMatrix;
pub use metric::euclidean;
