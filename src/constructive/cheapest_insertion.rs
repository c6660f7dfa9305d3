//! Cheapest-insertion tour construction.
//!
//! # Algorithm
//!
//! 1. Seed a closed circuit through three distinct points drawn at random
//!    (a fixed start, if given, replaces one of them).
//! 2. While points remain unvisited, draw one at random and insert it on
//!    the edge (i, j) minimizing the length increase
//!
//!    ```text
//!    cost = d(i, u) + d(j, u) - d(i, j)
//!    ```
//!
//!    Only edges with a positive cost are candidates; the first edge scanned
//!    wins exact ties.
//!
//! # Complexity
//!
//! O(n²): n insertion steps, each scanning at most n edges.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use rand::seq::index;
use rand::Rng;
use tracing::trace;

use crate::distance::DistanceMatrix;
use crate::error::{check_start, TspError, TspResult};
use crate::models::Tour;

/// Number of points in the seed circuit.
pub const SEED_SIZE: usize = 3;

/// Constructs a closed tour using the cheapest-insertion heuristic.
///
/// The seed circuit and the insertion order are both drawn from `rng`, so
/// two calls with identically seeded generators produce the same tour.
///
/// # Arguments
///
/// * `distances` — Distance matrix over all points
/// * `start` — Point forced into the seed circuit, or `None`
/// * `rng` — Random source for the seed and the insertion order
///
/// # Errors
///
/// [`TspError::TooFewPoints`] for fewer than three points and
/// [`TspError::StartOutOfRange`] for a start index past the last point.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_tsp::constructive::cheapest_insertion;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let tour = cheapest_insertion(&dm, Some(0), &mut rng).unwrap();
/// assert_eq!(tour.len(), 5);
/// assert!(tour.order().contains(&0));
/// assert!((tour.length() - 4.0).abs() < 1e-10);
/// ```
pub fn cheapest_insertion<R: Rng>(
    distances: &DistanceMatrix,
    start: Option<usize>,
    rng: &mut R,
) -> TspResult<Tour> {
    let n = distances.size();
    if n < SEED_SIZE {
        return Err(TspError::TooFewPoints {
            required: SEED_SIZE,
            actual: n,
        });
    }
    check_start(start, n)?;

    let seed = seed_circuit(n, start, rng);

    let mut visited = vec![false; n];
    for &s in &seed {
        visited[s] = true;
    }
    let mut remaining = n - SEED_SIZE;

    let mut order = Vec::with_capacity(n + 1);
    order.extend_from_slice(&seed);
    order.push(seed[0]);
    let mut length: f64 = order
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum();

    while remaining > 0 {
        let u = nth_unvisited(&visited, rng.random_range(0..remaining));
        let (pos, cost) = best_insertion(&order, u, distances);

        trace!(point = u, after = order[pos], cost, "ci insert");
        order.insert(pos + 1, u);
        length += cost;
        visited[u] = true;
        remaining -= 1;
    }

    Ok(Tour::new(order, length))
}

/// Draws three distinct points, forcing `start` into a random slot if it
/// was not drawn already.
fn seed_circuit<R: Rng>(n: usize, start: Option<usize>, rng: &mut R) -> Vec<usize> {
    let mut seed = index::sample(rng, n, SEED_SIZE).into_vec();
    if let Some(start) = start {
        if !seed.contains(&start) {
            let slot = rng.random_range(0..SEED_SIZE);
            seed[slot] = start;
        }
    }
    seed
}

/// Returns the index of the `k`-th unvisited point in scan order.
fn nth_unvisited(visited: &[bool], k: usize) -> usize {
    visited
        .iter()
        .enumerate()
        .filter(|&(_, &seen)| !seen)
        .nth(k)
        .map(|(i, _)| i)
        .expect("k is below the number of unvisited points")
}

/// Finds the edge on which inserting `u` costs least.
///
/// Returns `(position, cost_increase)`, where `u` goes right after
/// `order[position]`. Edges with non-positive cost only count when no edge
/// has a positive one (coincident or collinear points).
fn best_insertion(order: &[usize], u: usize, distances: &DistanceMatrix) -> (usize, f64) {
    let mut best: Option<(usize, f64)> = None;
    let mut degenerate: Option<(usize, f64)> = None;

    for (pos, w) in order.windows(2).enumerate() {
        let (ui, uj) = (w[0], w[1]);
        let cost = distances.get(ui, u) + distances.get(uj, u) - distances.get(ui, uj);

        if cost > 0.0 {
            if best.is_none_or(|(_, c)| cost < c) {
                best = Some((pos, cost));
            }
        } else if degenerate.is_none_or(|(_, c)| cost < c) {
            degenerate = Some((pos, cost));
        }
    }

    best.or(degenerate)
        .expect("a closed circuit has at least one edge")
}
