//! Constructive heuristics for building closed tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor extension, O(n²)
//! - [`cheapest_insertion`] — Random-order cheapest insertion into a 3-point seed circuit, O(n²)
//!
//! Both read distances from a shared [`DistanceMatrix`] and take their
//! randomness from an injected [`Rng`], so trials are reproducible under a
//! seeded generator.

mod cheapest_insertion;
mod nearest_neighbor;

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::models::{Algorithm, Tour};

pub use cheapest_insertion::{cheapest_insertion, SEED_SIZE};
pub use nearest_neighbor::nearest_neighbor;

/// Runs the constructor for `algorithm`.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_tsp::constructive::construct;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::{Algorithm, Point};
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 3.0), Point::new(4.0, 0.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let mut rng = StdRng::seed_from_u64(1);
///
/// for algorithm in [Algorithm::NearestNeighbor, Algorithm::CheapestInsertion] {
///     let tour = construct(algorithm, &dm, Some(0), &mut rng).unwrap();
///     assert!((tour.length() - 12.0).abs() < 1e-10);
/// }
/// ```
pub fn construct<R: Rng>(
    algorithm: Algorithm,
    distances: &DistanceMatrix,
    start: Option<usize>,
    rng: &mut R,
) -> TspResult<Tour> {
    match algorithm {
        Algorithm::NearestNeighbor => nearest_neighbor(distances, start, rng),
        Algorithm::CheapestInsertion => cheapest_insertion(distances, start, rng),
    }
}
