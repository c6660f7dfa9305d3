//! Nearest-neighbor tour construction.
//!
//! Builds a tour greedily: starting from one point, always extend the open
//! path to the closest unvisited point, then close the circuit back to the
//! start.
//!
//! # Complexity
//!
//! O(n²) where n = number of points: each of the n − 1 extension steps
//! scans every point.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use rand::Rng;
use tracing::trace;

use crate::distance::DistanceMatrix;
use crate::error::{check_start, TspError, TspResult};
use crate::models::Tour;

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// Ties between equally distant candidates go to the lowest index, so the
/// result is fully determined by `start`. When `start` is `None` the first
/// point is drawn uniformly from `rng`; otherwise `rng` is not touched.
///
/// # Arguments
///
/// * `distances` — Distance matrix over all points
/// * `start` — Starting point index, or `None` to pick one at random
/// * `rng` — Random source used only to pick the start
///
/// # Errors
///
/// [`TspError::TooFewPoints`] for an empty point set and
/// [`TspError::StartOutOfRange`] for a start index past the last point.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_tsp::constructive::nearest_neighbor;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::Point;
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 3.0), Point::new(4.0, 0.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let tour = nearest_neighbor(&dm, Some(0), &mut rng).unwrap();
/// assert_eq!(tour.order(), &[0, 1, 2, 0]);
/// assert!((tour.length() - 12.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor<R: Rng>(
    distances: &DistanceMatrix,
    start: Option<usize>,
    rng: &mut R,
) -> TspResult<Tour> {
    if distances.is_empty() {
        return Err(TspError::TooFewPoints {
            required: 1,
            actual: 0,
        });
    }
    let n = distances.size();
    check_start(start, n)?;
    let start = start.unwrap_or_else(|| rng.random_range(0..n));

    let mut visited = vec![false; n];
    visited[start] = true;

    let mut order = Vec::with_capacity(n + 1);
    order.push(start);
    let mut current = start;
    let mut length = 0.0;

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for (i, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let d = distances.get(current, i);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }

        let (next, d) = best.expect("an unvisited point remains until n - 1 extensions");
        trace!(from = current, to = next, distance = d, "nn extend");
        visited[next] = true;
        order.push(next);
        length += d;
        current = next;
    }

    length += distances.get(current, start);
    order.push(start);

    Ok(Tour::new(order, length))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::models::Point;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(4.0, 0.0),
        ])
    }

    fn line_points() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ])
    }

    #[test]
    fn test_nn_triangle() {
        let mut rng = StdRng::seed_from_u64(42);
        let tour = nearest_neighbor(&triangle(), Some(0), &mut rng).expect("valid input");
        assert_eq!(tour.order(), &[0, 1, 2, 0]);
        // 3 + 5 + 4: (0,3) is nearer to the start than (4,0)
        assert!((tour.length() - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_line() {
        let mut rng = StdRng::seed_from_u64(42);
        let tour = nearest_neighbor(&line_points(), Some(0), &mut rng).expect("valid input");
        assert_eq!(tour.order(), &[0, 1, 2, 3, 0]);
        // 1 + 1 + 1 + 3
        assert!((tour.length() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(1.0, 0.0),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let tour = nearest_neighbor(&dm, Some(0), &mut rng).expect("valid input");
        assert_eq!(tour.order(), &[0, 2, 1, 0]);
    }

    #[test]
    fn test_nn_tie_goes_to_lowest_index() {
        // Points 1 and 2 are both at distance 1 from the start.
        let dm = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(-1.0, 0.0),
            Point::new(1.0, 0.0),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let tour = nearest_neighbor(&dm, Some(0), &mut rng).expect("valid input");
        assert_eq!(tour.order(), &[0, 1, 2, 0]);
    }

    #[test]
    fn test_nn_single_point() {
        let dm = DistanceMatrix::from_points(&[Point::new(5.0, 5.0)]);
        let mut rng = StdRng::seed_from_u64(42);
        let tour = nearest_neighbor(&dm, None, &mut rng).expect("valid input");
        assert_eq!(tour.order(), &[0, 0]);
        assert_eq!(tour.length(), 0.0);
    }

    #[test]
    fn test_nn_empty() {
        let dm = DistanceMatrix::from_points(&[]);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            nearest_neighbor(&dm, None, &mut rng),
            Err(TspError::TooFewPoints { required: 1, actual: 0 })
        ));
    }

    #[test]
    fn test_nn_start_out_of_range() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            nearest_neighbor(&triangle(), Some(3), &mut rng),
            Err(TspError::StartOutOfRange { start: 3, len: 3 })
        ));
    }

    #[test]
    fn test_nn_random_start_visits_all() {
        let dm = line_points();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let tour = nearest_neighbor(&dm, None, &mut rng).expect("valid input");
            assert_eq!(tour.len(), 5);
            assert!(tour.is_closed());
            let mut seen = tour.order()[..4].to_vec();
            seen.sort_unstable();
            assert_eq!(seen, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_nn_fixed_start_is_deterministic() {
        let dm = line_points();
        let a = nearest_neighbor(&dm, Some(2), &mut StdRng::seed_from_u64(1)).expect("valid");
        let b = nearest_neighbor(&dm, Some(2), &mut StdRng::seed_from_u64(99)).expect("valid");
        assert_eq!(a, b);
    }
}
