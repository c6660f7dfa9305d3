//! Experiment configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TspError, TspResult};
use crate::models::Algorithm;

/// Number of trials when none is configured.
pub const DEFAULT_REPS: usize = 10;

/// Which heuristics an experiment runs.
///
/// Parses from `"NN"`, `"BI"` (or `"CI"`) and `"all"`, ignoring case.
///
/// # Examples
///
/// ```
/// use u_tsp::experiment::AlgorithmSelector;
///
/// let sel: AlgorithmSelector = "nn".parse().unwrap();
/// assert_eq!(sel, AlgorithmSelector::NearestNeighbor);
/// assert!("greedy".parse::<AlgorithmSelector>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AlgorithmSelector {
    /// Nearest neighbor only.
    NearestNeighbor,
    /// Cheapest insertion only.
    CheapestInsertion,
    /// Both, for side-by-side comparison.
    #[default]
    All,
}

impl AlgorithmSelector {
    /// Heuristics to run, in the order each trial runs them.
    pub fn algorithms(&self) -> &'static [Algorithm] {
        match self {
            Self::NearestNeighbor => &[Algorithm::NearestNeighbor],
            Self::CheapestInsertion => &[Algorithm::CheapestInsertion],
            Self::All => &[Algorithm::NearestNeighbor, Algorithm::CheapestInsertion],
        }
    }
}

impl FromStr for AlgorithmSelector {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nn" => Ok(Self::NearestNeighbor),
            "bi" | "ci" => Ok(Self::CheapestInsertion),
            "all" => Ok(Self::All),
            _ => Err(TspError::config(format!(
                "unrecognized algorithm '{s}', expected NN, BI or all"
            ))),
        }
    }
}

impl TryFrom<String> for AlgorithmSelector {
    type Error = TspError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AlgorithmSelector> for String {
    fn from(value: AlgorithmSelector) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AlgorithmSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NearestNeighbor => "NN",
            Self::CheapestInsertion => "BI",
            Self::All => "all",
        })
    }
}

/// How each trial picks its starting node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPolicy {
    /// Left to the constructor, which draws it at random every trial.
    #[default]
    Random,
    /// The same point index in every trial.
    Fixed(usize),
}

impl StartPolicy {
    /// The start handed to a constructor.
    pub fn resolve(&self) -> Option<usize> {
        match self {
            Self::Random => None,
            Self::Fixed(i) => Some(*i),
        }
    }
}

impl From<Option<usize>> for StartPolicy {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::Random, Self::Fixed)
    }
}

/// Configuration for a multi-trial experiment.
///
/// # Examples
///
/// ```
/// use u_tsp::experiment::{AlgorithmSelector, ExperimentConfig, StartPolicy};
///
/// let config = ExperimentConfig::default()
///     .with_reps(5)
///     .with_algorithm(AlgorithmSelector::NearestNeighbor)
///     .with_start(StartPolicy::Fixed(0))
///     .with_seed(42);
/// assert_eq!(config.reps, 5);
/// assert!(config.validate(3).is_ok());
/// assert!(config.validate(0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Number of independent trials per algorithm.
    pub reps: usize,
    /// Heuristics to run.
    pub algorithm: AlgorithmSelector,
    /// Starting-node policy.
    pub start: StartPolicy,
    /// Render every trial, not only the final comparison.
    pub plot_each_trial: bool,
    /// Seed for the random source; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            reps: DEFAULT_REPS,
            algorithm: AlgorithmSelector::All,
            start: StartPolicy::Random,
            plot_each_trial: false,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Sets the number of trials.
    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    /// Sets the algorithm selector.
    pub fn with_algorithm(mut self, algorithm: AlgorithmSelector) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the starting-node policy.
    pub fn with_start(mut self, start: StartPolicy) -> Self {
        self.start = start;
        self
    }

    /// Enables or disables per-trial rendering.
    pub fn with_plot_each_trial(mut self, plot: bool) -> Self {
        self.plot_each_trial = plot;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the configuration against a point set of size `num_points`.
    ///
    /// # Errors
    ///
    /// [`TspError::ConfigInvalid`] for zero trials,
    /// [`TspError::TooFewPoints`] if a selected algorithm needs more points,
    /// [`TspError::StartOutOfRange`] for a fixed start past the last point.
    pub fn validate(&self, num_points: usize) -> TspResult<()> {
        if self.reps == 0 {
            return Err(TspError::config("trial count must be a positive integer"));
        }
        for algorithm in self.algorithm.algorithms() {
            if num_points < algorithm.min_points() {
                return Err(TspError::TooFewPoints {
                    required: algorithm.min_points(),
                    actual: num_points,
                });
            }
        }
        crate::error::check_start(self.start.resolve(), num_points)
    }
}
