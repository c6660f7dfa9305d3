//! Domain model types for tour construction.
//!
//! Provides the core abstractions: planar points identified by input index,
//! closed tours with their accumulated length, and per-trial results tagged
//! with the heuristic that produced them.

mod point;
mod tour;
mod trial;

pub use point::Point;
pub use tour::Tour;
pub use trial::{Algorithm, TrialResult};
