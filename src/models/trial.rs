//! Algorithm identifiers and per-trial results.

use std::fmt;

use serde::Serialize;

use super::Tour;

/// A tour-construction heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    /// Greedy nearest-neighbor extension.
    NearestNeighbor,
    /// Cheapest (best) insertion into a growing sub-circuit.
    CheapestInsertion,
}

impl Algorithm {
    /// Short code used on the command line and in reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NearestNeighbor => "NN",
            Self::CheapestInsertion => "BI",
        }
    }

    /// Smallest point set the heuristic accepts.
    pub fn min_points(&self) -> usize {
        match self {
            Self::NearestNeighbor => 1,
            Self::CheapestInsertion => 3,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The outcome of one full run of one constructor.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Algorithm, Tour, TrialResult};
///
/// let result = TrialResult::new(Algorithm::NearestNeighbor, 0, 0, Tour::new(vec![0, 2, 1, 0], 12.0));
/// assert_eq!(result.length(), 12.0);
/// assert_eq!(result.start(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialResult {
    algorithm: Algorithm,
    trial: usize,
    start: usize,
    tour: Tour,
}

impl TrialResult {
    /// Creates a trial result.
    pub fn new(algorithm: Algorithm, trial: usize, start: usize, tour: Tour) -> Self {
        Self {
            algorithm,
            trial,
            start,
            tour,
        }
    }

    /// Heuristic that produced this result.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Zero-based trial index within the experiment.
    pub fn trial(&self) -> usize {
        self.trial
    }

    /// Starting node to highlight.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The constructed tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Total tour length (W).
    pub fn length(&self) -> f64 {
        self.tour.length()
    }
}
