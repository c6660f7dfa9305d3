//! Planar Euclidean metric.

use crate::models::Point;

/// Straight-line distance between two points.
///
/// Pure and symmetric; never negative for finite input.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::euclidean;
/// use u_tsp::models::Point;
///
/// let d = euclidean(&Point::new(0.0, 3.0), &Point::new(4.0, 0.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
#[inline]
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    (dx * dx + dy * dy).sqrt()
}
