//! Multi-trial experiments over the constructive heuristics.
//!
//! - [`ExperimentConfig`] — Trial count, algorithm selector, start policy, seed
//! - [`Experiment`] — Runs the trials and collects an [`ExperimentReport`]
//! - [`Visualizer`] — Collaborator receiving per-trial tours and the final comparison

mod config;
mod harness;
mod report;
mod visualizer;

pub use config::{AlgorithmSelector, ExperimentConfig, StartPolicy, DEFAULT_REPS};
pub use harness::Experiment;
pub use report::{Comparison, ExperimentReport, LengthSummary};
pub use visualizer::{LogVisualizer, NoopVisualizer, TourView, Visualizer};
