//! Command-line entry point: load points, run an experiment, report.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use u_tsp::experiment::{
    AlgorithmSelector, Experiment, ExperimentConfig, LogVisualizer, StartPolicy, DEFAULT_REPS,
};
use u_tsp::io::load_points;
use u_tsp::TspError;

/// Exit status when the coordinate source cannot be used.
const EXIT_INPUT: u8 = 2;
/// Exit status for configuration and other failures.
const EXIT_FAILURE: u8 = 1;

/// Build approximate TSP tours over GeoJSON points with nearest-neighbor
/// and cheapest-insertion heuristics
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// GeoJSON FeatureCollection whose feature geometries are the points.
    #[arg(short, long)]
    input: PathBuf,

    /// Number of trials per algorithm.
    #[arg(short, long, default_value_t = DEFAULT_REPS, value_parser = parse_reps)]
    reps: usize,

    /// Heuristics to run: NN, BI or all.
    #[arg(short, long, default_value = "all", value_parser = parse_algorithm)]
    algorithm: AlgorithmSelector,

    /// Starting point index; random per trial when omitted.
    #[arg(short, long)]
    start: Option<usize>,

    /// Render every trial instead of only the final comparison.
    #[arg(long)]
    plot_each_trial: bool,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the full report as JSON to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

fn parse_reps(s: &str) -> Result<usize, String> {
    let val: usize = s.parse().map_err(|_| format!("'{s}' isn't a valid trial count"))?;
    if val == 0 {
        return Err("trial count must be a positive integer".into());
    }
    Ok(val)
}

fn parse_algorithm(s: &str) -> Result<AlgorithmSelector, String> {
    s.parse().map_err(|e: TspError| e.to_string())
}

fn init_logging(verbosity: &str) {
    let filter = EnvFilter::try_new(verbosity)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Cli) -> Result<()> {
    let points = load_points(&args.input)?;
    info!(points = points.len(), input = %args.input.display(), "loaded input");

    let mut config = ExperimentConfig::default()
        .with_reps(args.reps)
        .with_algorithm(args.algorithm)
        .with_start(StartPolicy::from(args.start))
        .with_plot_each_trial(args.plot_each_trial);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let experiment = Experiment::new(&points, config)?;
    let report = experiment.run(&mut LogVisualizer)?;

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("creating report file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!(output = %path.display(), "report written");
    }

    Ok(())
}

/// Picks the exit status and diagnostic prefix for a failed run.
fn classify(err: &anyhow::Error) -> (u8, &'static str) {
    match err.downcast_ref::<TspError>() {
        Some(e) if e.is_input_error() => (EXIT_INPUT, "cannot read input"),
        _ => (EXIT_FAILURE, "run failed"),
    }
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(&args.verbosity);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (code, what) = classify(&err);
            error!("{what}: {err:#}");
            ExitCode::from(code)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_input_error() {
        let err = anyhow::Error::from(TspError::InputNotFound {
            path: PathBuf::from("towns.geojson"),
        });
        assert_eq!(classify(&err), (EXIT_INPUT, "cannot read input"));
    }

    #[test]
    fn test_classify_config_error() {
        let err = anyhow::Error::from(TspError::config("unrecognized algorithm"));
        assert_eq!(classify(&err).0, EXIT_FAILURE);

        let err = anyhow::anyhow!("writing report failed");
        assert_eq!(classify(&err).0, EXIT_FAILURE);
    }

    #[test]
    fn test_parse_reps() {
        assert_eq!(parse_reps("5"), Ok(5));
        assert!(parse_reps("0").is_err());
        assert!(parse_reps("x").is_err());
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(parse_algorithm("BI"), Ok(AlgorithmSelector::CheapestInsertion));
        assert!(parse_algorithm("greedy").is_err());
    }
}
