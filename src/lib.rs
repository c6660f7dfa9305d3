//! # u-tsp
//!
//! Approximate Euclidean TSP tours from greedy constructive heuristics, with
//! a multi-trial experiment harness for comparing them.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, TrialResult, Algorithm)
//! - [`distance`] — Euclidean metric and distance matrix
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor, Cheapest Insertion)
//! - [`evaluation`] — Tour length recomputation and circuit validation
//! - [`experiment`] — Trial configuration, runner, reports, visualizer interface
//! - [`io`] — GeoJSON coordinate loading
//! - [`error`] — Error type shared by all of the above

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod experiment;
pub mod io;
pub mod models;

pub use error::{TspError, TspResult};
