//! Interface to the tour-rendering collaborator.
//!
//! Rendering itself lives outside this crate. An experiment hands each
//! trial as a [`TourView`] (closed tour, all points, start to highlight)
//! and finally the whole [`Comparison`].

use tracing::info;

use crate::models::{Algorithm, Point, Tour, TrialResult};

use super::Comparison;

/// One trial's tour in the form a renderer consumes.
#[derive(Debug, Clone, Copy)]
pub struct TourView<'a> {
    /// Heuristic that built the tour.
    pub algorithm: Algorithm,
    /// Zero-based trial index.
    pub trial: usize,
    /// The closed tour.
    pub tour: &'a Tour,
    /// Every input point, for context.
    pub points: &'a [Point],
    /// Point to highlight as the start.
    pub start: usize,
}

impl<'a> TourView<'a> {
    /// Creates a view of a trial result.
    pub fn new(result: &'a TrialResult, points: &'a [Point]) -> Self {
        Self {
            algorithm: result.algorithm(),
            trial: result.trial(),
            tour: result.tour(),
            points,
            start: result.start(),
        }
    }

    /// Tour length (W).
    pub fn length(&self) -> f64 {
        self.tour.length()
    }

    /// Tour coordinates in visit order.
    pub fn path(&self) -> Vec<Point> {
        self.tour.coordinates(self.points)
    }
}

/// Receives tours and comparisons from an experiment.
pub trait Visualizer {
    /// Called once per trial when per-trial rendering is enabled.
    fn render_trial(&mut self, view: &TourView<'_>);

    /// Called once after all trials.
    fn render_comparison(&mut self, comparison: &Comparison<'_>);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopVisualizer;

impl Visualizer for NoopVisualizer {
    fn render_trial(&mut self, _view: &TourView<'_>) {}

    fn render_comparison(&mut self, _comparison: &Comparison<'_>) {}
}

/// Emits tours and comparisons as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogVisualizer;

impl Visualizer for LogVisualizer {
    fn render_trial(&mut self, view: &TourView<'_>) {
        info!(
            algorithm = %view.algorithm,
            trial = view.trial,
            start = view.start,
            length = view.length(),
            tour = ?view.tour.order(),
            "trial tour"
        );
    }

    fn render_comparison(&mut self, comparison: &Comparison<'_>) {
        if comparison.is_side_by_side() {
            for (nn, ci) in comparison.pairs() {
                info!(
                    trial = nn.trial(),
                    nn_length = nn.length(),
                    bi_length = ci.length(),
                    "trial comparison"
                );
            }
            return;
        }
        for r in comparison
            .nearest_neighbor
            .iter()
            .chain(comparison.cheapest_insertion)
        {
            info!(algorithm = %r.algorithm(), trial = r.trial(), length = r.length(), "trial result");
        }
    }
}
