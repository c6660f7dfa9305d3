//! Tour evaluator that recomputes length and checks circuit invariants.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// A structural defect in a tour.
#[derive(Debug, Clone, PartialEq)]
pub enum TourViolation {
    /// The first and last entries differ (or there are fewer than two).
    NotClosed,
    /// The tour does not hold `num_points + 1` entries.
    WrongLength {
        /// Expected number of entries.
        expected: usize,
        /// Actual number of entries.
        actual: usize,
    },
    /// An index does not refer to any point.
    IndexOutOfRange {
        /// Position in the tour.
        position: usize,
        /// Offending index.
        index: usize,
    },
    /// A point appears more than once before the closing entry.
    Duplicate {
        /// Repeated point index.
        index: usize,
    },
    /// A point is never visited.
    Missing {
        /// Unvisited point index.
        index: usize,
    },
}

/// Recomputes tour lengths and checks that a tour is a Hamiltonian circuit.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Point, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::TourEvaluator;
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 3.0), Point::new(4.0, 0.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let evaluator = TourEvaluator::new(&dm);
///
/// let tour = Tour::new(vec![0, 2, 1, 0], 12.0);
/// assert!(evaluator.validate(&tour).is_empty());
/// assert!((evaluator.tour_length(tour.order()) - 12.0).abs() < 1e-10);
/// assert!(evaluator.length_matches(&tour, 1e-9));
/// ```
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator over the given distances.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Sums the distances between consecutive entries of `order`.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .map(|w| self.distances.get(w[0], w[1]))
            .sum()
    }

    /// Returns `true` if the recomputed length agrees with the stored one
    /// within `rel_tol` (relative to the larger magnitude, floored at 1).
    pub fn length_matches(&self, tour: &Tour, rel_tol: f64) -> bool {
        let recomputed = self.tour_length(tour.order());
        let scale = recomputed.abs().max(tour.length().abs()).max(1.0);
        (recomputed - tour.length()).abs() <= rel_tol * scale
    }

    /// Checks that `tour` visits every point exactly once and closes.
    ///
    /// An empty result means the tour is valid.
    pub fn validate(&self, tour: &Tour) -> Vec<TourViolation> {
        let n = self.distances.size();
        let order = tour.order();
        let mut violations = Vec::new();

        if !tour.is_closed() {
            violations.push(TourViolation::NotClosed);
        }
        if order.len() != n + 1 {
            violations.push(TourViolation::WrongLength {
                expected: n + 1,
                actual: order.len(),
            });
        }

        let mut seen = vec![false; n];
        let body = &order[..order.len().saturating_sub(1)];
        for (position, &index) in body.iter().enumerate() {
            if index >= n {
                violations.push(TourViolation::IndexOutOfRange { position, index });
                continue;
            }
            if seen[index] {
                violations.push(TourViolation::Duplicate { index });
            }
            seen[index] = true;
        }
        if let Some(&last) = order.last() {
            if last >= n {
                violations.push(TourViolation::IndexOutOfRange {
                    position: order.len() - 1,
                    index: last,
                });
            }
        }

        violations.extend(
            seen.iter()
                .enumerate()
                .filter(|&(_, &s)| !s)
                .map(|(index, _)| TourViolation::Missing { index }),
        );

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(4.0, 0.0),
        ])
    }

    #[test]
    fn test_valid_tour() {
        let dm = triangle();
        let ev = TourEvaluator::new(&dm);
        let tour = Tour::new(vec![1, 0, 2, 1], 12.0);
        assert!(ev.validate(&tour).is_empty());
        assert!(ev.length_matches(&tour, 1e-9));
    }

    #[test]
    fn test_tour_length() {
        let dm = triangle();
        let ev = TourEvaluator::new(&dm);
        assert!((ev.tour_length(&[0, 1, 2, 0]) - 12.0).abs() < 1e-10);
        assert_eq!(ev.tour_length(&[0]), 0.0);
        assert_eq!(ev.tour_length(&[]), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let dm = triangle();
        let ev = TourEvaluator::new(&dm);
        let tour = Tour::new(vec![0, 1, 2, 0], 11.0);
        assert!(!ev.length_matches(&tour, 1e-9));
    }

    #[test]
    fn test_not_closed() {
        let dm = triangle();
        let ev = TourEvaluator::new(&dm);
        let tour = Tour::new(vec![0, 1, 2, 1], 0.0);
        let v = ev.validate(&tour);
        assert!(v.contains(&TourViolation::NotClosed));
    }

    #[test]
    fn test_duplicate_and_missing() {
        let dm = triangle();
        let ev = TourEvaluator::new(&dm);
        let tour = Tour::new(vec![0, 1, 1, 0], 0.0);
        let v = ev.validate(&tour);
        assert!(v.contains(&TourViolation::Duplicate { index: 1 }));
        assert!(v.contains(&TourViolation::Missing { index: 2 }));
    }

    #[test]
    fn test_wrong_length_and_out_of_range() {
        let dm = triangle();
        let ev = TourEvaluator::new(&dm);
        let tour = Tour::new(vec![0, 1, 2, 5, 0], 0.0);
        let v = ev.validate(&tour);
        assert!(v.contains(&TourViolation::WrongLength {
            expected: 4,
            actual: 5
        }));
        assert!(v.contains(&TourViolation::IndexOutOfRange {
            position: 3,
            index: 5
        }));
    }
}
