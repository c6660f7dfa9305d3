//! Multi-trial experiment runner.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::constructive::construct;
use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::models::{Point, TrialResult};

use super::{ExperimentConfig, ExperimentReport, TourView, Visualizer};

/// Runs the selected heuristics for a configured number of trials.
///
/// The point set and its distance matrix are shared read-only by every
/// trial; visitation state and partial tours live only inside each
/// constructor call.
///
/// # Examples
///
/// ```
/// use u_tsp::experiment::{AlgorithmSelector, Experiment, ExperimentConfig, NoopVisualizer, StartPolicy};
/// use u_tsp::models::{Algorithm, Point};
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 3.0), Point::new(4.0, 0.0)];
/// let config = ExperimentConfig::default()
///     .with_reps(5)
///     .with_algorithm(AlgorithmSelector::NearestNeighbor)
///     .with_start(StartPolicy::Fixed(0));
///
/// let experiment = Experiment::new(&points, config).unwrap();
/// let report = experiment.run(&mut NoopVisualizer).unwrap();
/// let results = report.results(Algorithm::NearestNeighbor);
/// assert_eq!(results.len(), 5);
/// assert!(results.iter().all(|r| r.tour().order() == [0, 1, 2, 0]));
/// ```
#[derive(Debug)]
pub struct Experiment<'a> {
    points: &'a [Point],
    distances: DistanceMatrix,
    config: ExperimentConfig,
}

impl<'a> Experiment<'a> {
    /// Validates the inputs and precomputes distances.
    ///
    /// # Errors
    ///
    /// Any error from [`ExperimentConfig::validate`], or
    /// [`TspError::ConfigInvalid`] if a point has non-finite coordinates.
    pub fn new(points: &'a [Point], config: ExperimentConfig) -> TspResult<Self> {
        config.validate(points.len())?;
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(TspError::config(format!(
                "point {i} has non-finite coordinates"
            )));
        }

        Ok(Self {
            points,
            distances: DistanceMatrix::from_points(points),
            config,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Distances shared by all trials.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Runs every trial with a generator seeded from the configuration
    /// (or from the OS when no seed is set).
    pub fn run<V: Visualizer + ?Sized>(&self, visualizer: &mut V) -> TspResult<ExperimentReport> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(&mut rng, visualizer)
    }

    /// Runs every trial drawing randomness from `rng`.
    ///
    /// Trials run in order; within a trial nearest neighbor runs before
    /// cheapest insertion. Results are reported in the same order.
    pub fn run_with_rng<R: Rng, V: Visualizer + ?Sized>(
        &self,
        rng: &mut R,
        visualizer: &mut V,
    ) -> TspResult<ExperimentReport> {
        let algorithms = self.config.algorithm.algorithms();
        info!(
            points = self.points.len(),
            reps = self.config.reps,
            algorithm = %self.config.algorithm,
            "starting experiment"
        );

        let fixed_start = self.config.start.resolve();
        let mut report = ExperimentReport::new();

        for trial in 0..self.config.reps {
            for &algorithm in algorithms {
                let tour = construct(algorithm, &self.distances, fixed_start, rng)?;
                let start = fixed_start.or(tour.start()).unwrap_or_default();
                debug!(%algorithm, trial, start, length = tour.length(), "trial complete");

                let result = TrialResult::new(algorithm, trial, start, tour);
                if self.config.plot_each_trial {
                    visualizer.render_trial(&TourView::new(&result, self.points));
                }
                report.push(result);
            }
        }

        for &algorithm in algorithms {
            if let Some(summary) = report.summary(algorithm) {
                info!(
                    %algorithm,
                    min = summary.min,
                    mean = summary.mean,
                    max = summary.max,
                    best_trial = summary.best_trial,
                    "experiment finished"
                );
            }
        }

        visualizer.render_comparison(&report.comparison(self.points));
        Ok(report)
    }
}
