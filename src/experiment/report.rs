//! Experiment results and summaries.

use serde::Serialize;

use crate::models::{Algorithm, Point, TrialResult};

/// Aggregate statistics over the tour lengths of one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthSummary {
    /// Number of trials.
    pub count: usize,
    /// Shortest tour length.
    pub min: f64,
    /// Longest tour length.
    pub max: f64,
    /// Mean tour length.
    pub mean: f64,
    /// Trial index of the shortest tour (first one on ties).
    pub best_trial: usize,
}

impl LengthSummary {
    /// Summarizes `results`, or returns `None` if there are none.
    pub fn from_results(results: &[TrialResult]) -> Option<Self> {
        let first = results.first()?;
        let mut summary = Self {
            count: results.len(),
            min: first.length(),
            max: first.length(),
            mean: 0.0,
            best_trial: first.trial(),
        };

        let mut total = 0.0;
        for r in results {
            let w = r.length();
            total += w;
            if w < summary.min {
                summary.min = w;
                summary.best_trial = r.trial();
            }
            if w > summary.max {
                summary.max = w;
            }
        }
        summary.mean = total / results.len() as f64;
        Some(summary)
    }
}

/// All trial results of one experiment, in trial order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExperimentReport {
    nearest_neighbor: Vec<TrialResult>,
    cheapest_insertion: Vec<TrialResult>,
}

impl ExperimentReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a trial result to its algorithm's list.
    pub fn push(&mut self, result: TrialResult) {
        match result.algorithm() {
            Algorithm::NearestNeighbor => self.nearest_neighbor.push(result),
            Algorithm::CheapestInsertion => self.cheapest_insertion.push(result),
        }
    }

    /// Results of one algorithm, ordered by trial.
    pub fn results(&self, algorithm: Algorithm) -> &[TrialResult] {
        match algorithm {
            Algorithm::NearestNeighbor => &self.nearest_neighbor,
            Algorithm::CheapestInsertion => &self.cheapest_insertion,
        }
    }

    /// Total number of trial results across algorithms.
    pub fn len(&self) -> usize {
        self.nearest_neighbor.len() + self.cheapest_insertion.len()
    }

    /// Returns `true` if no trial has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length statistics for one algorithm.
    pub fn summary(&self, algorithm: Algorithm) -> Option<LengthSummary> {
        LengthSummary::from_results(self.results(algorithm))
    }

    /// Builds the comparison handed to a visualizer.
    pub fn comparison<'a>(&'a self, points: &'a [Point]) -> Comparison<'a> {
        Comparison {
            points,
            nearest_neighbor: &self.nearest_neighbor,
            cheapest_insertion: &self.cheapest_insertion,
        }
    }
}

/// Final results of an experiment together with the point set.
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    /// Every input point.
    pub points: &'a [Point],
    /// Nearest-neighbor results by trial (empty if not selected).
    pub nearest_neighbor: &'a [TrialResult],
    /// Cheapest-insertion results by trial (empty if not selected).
    pub cheapest_insertion: &'a [TrialResult],
}

impl<'a> Comparison<'a> {
    /// Returns `true` if both algorithms produced results.
    pub fn is_side_by_side(&self) -> bool {
        !self.nearest_neighbor.is_empty() && !self.cheapest_insertion.is_empty()
    }

    /// Results of both algorithms paired by trial index.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a TrialResult, &'a TrialResult)> + 'a {
        let (nn, ci) = (self.nearest_neighbor, self.cheapest_insertion);
        nn.iter().zip(ci.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tour;

    fn result(algorithm: Algorithm, trial: usize, length: f64) -> TrialResult {
        TrialResult::new(algorithm, trial, 0, Tour::new(vec![0, 1, 2, 0], length))
    }

    #[test]
    fn test_summary() {
        let results = vec![
            result(Algorithm::NearestNeighbor, 0, 12.0),
            result(Algorithm::NearestNeighbor, 1, 10.0),
            result(Algorithm::NearestNeighbor, 2, 14.0),
            result(Algorithm::NearestNeighbor, 3, 10.0),
        ];
        let s = LengthSummary::from_results(&results).expect("non-empty");
        assert_eq!(s.count, 4);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 14.0);
        assert!((s.mean - 11.5).abs() < 1e-10);
        assert_eq!(s.best_trial, 1);
    }

    #[test]
    fn test_summary_empty() {
        assert!(LengthSummary::from_results(&[]).is_none());
    }

    #[test]
    fn test_report_push_and_pairs() {
        let mut report = ExperimentReport::new();
        assert!(report.is_empty());
        for t in 0..3 {
            report.push(result(Algorithm::NearestNeighbor, t, 10.0 + t as f64));
            report.push(result(Algorithm::CheapestInsertion, t, 9.0 + t as f64));
        }
        assert_eq!(report.len(), 6);
        assert_eq!(report.results(Algorithm::NearestNeighbor).len(), 3);

        let points = [Point::new(0.0, 0.0)];
        let cmp = report.comparison(&points);
        assert!(cmp.is_side_by_side());
        let pairs: Vec<_> = cmp.pairs().collect();
        assert_eq!(pairs.len(), 3);
        for (i, (nn, ci)) in pairs.iter().enumerate() {
            assert_eq!(nn.trial(), i);
            assert_eq!(ci.trial(), i);
            assert_eq!(nn.algorithm(), Algorithm::NearestNeighbor);
            assert_eq!(ci.algorithm(), Algorithm::CheapestInsertion);
        }
    }

    #[test]
    fn test_single_algorithm_comparison() {
        let mut report = ExperimentReport::new();
        report.push(result(Algorithm::CheapestInsertion, 0, 9.0));
        let cmp = report.comparison(&[]);
        assert!(!cmp.is_side_by_side());
        assert_eq!(cmp.pairs().count(), 0);
        assert!(report.summary(Algorithm::NearestNeighbor).is_none());
    }
}
