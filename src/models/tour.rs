//! Closed tour type.

use serde::Serialize;

use super::Point;

/// An ordered, closed sequence of point indices with its total length.
///
/// The first and last entries are equal, so a tour over `n` points holds
/// `n + 1` indices. The length is the value accumulated by the constructor
/// that built the tour; [`crate::evaluation`] can recompute it.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0], 12.0);
/// assert_eq!(tour.num_points(), 3);
/// assert_eq!(tour.start(), Some(0));
/// assert!(tour.is_closed());
/// assert_eq!(tour.edges().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    order: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Creates a tour from a closed index sequence and its length.
    pub fn new(order: Vec<usize>, length: f64) -> Self {
        Self { order, length }
    }

    /// Returns the point indices in visit order, closing duplicate included.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total length (W) accumulated during construction.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of entries, closing duplicate included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour holds no indices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct points visited.
    pub fn num_points(&self) -> usize {
        self.order.len().saturating_sub(1)
    }

    /// The index the circuit starts and ends at.
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Returns `true` if the sequence is non-empty and ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.order.len() >= 2 && self.order.first() == self.order.last()
    }

    /// Iterates over consecutive `(from, to)` index pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order.windows(2).map(|w| (w[0], w[1]))
    }

    /// Resolves the index sequence against the point set, in visit order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds for `points`.
    pub fn coordinates(&self, points: &[Point]) -> Vec<Point> {
        self.order.iter().map(|&i| points[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_triangle() {
        let t = Tour::new(vec![0, 2, 1, 0], 12.0);
        assert_eq!(t.len(), 4);
        assert_eq!(t.num_points(), 3);
        assert_eq!(t.length(), 12.0);
        assert!(t.is_closed());
        assert_eq!(t.edges().collect::<Vec<_>>(), vec![(0, 2), (2, 1), (1, 0)]);
    }

    #[test]
    fn test_tour_degenerate() {
        let t = Tour::new(vec![4, 4], 0.0);
        assert!(t.is_closed());
        assert_eq!(t.num_points(), 1);
        assert_eq!(t.edges().count(), 1);
    }

    #[test]
    fn test_tour_empty() {
        let t = Tour::new(Vec::new(), 0.0);
        assert!(t.is_empty());
        assert!(!t.is_closed());
        assert_eq!(t.num_points(), 0);
        assert_eq!(t.start(), None);
    }

    #[test]
    fn test_tour_open_sequence() {
        let t = Tour::new(vec![0, 1, 2], 2.0);
        assert!(!t.is_closed());
    }

    #[test]
    fn test_tour_coordinates() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let t = Tour::new(vec![1, 0, 1], 2.0 * 2f64.sqrt());
        let coords = t.coordinates(&points);
        assert_eq!(coords, vec![points[1], points[0], points[1]]);
    }
}
