//! Error types for tour construction and experiment runs.
//!
//! Every failure in this crate is fatal for the run that hit it: input
//! sources and configuration are validated once, after which the heuristics
//! are pure computation over in-memory data. Callers decide whether to exit.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for u-tsp operations.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for loading points and running experiments.
#[derive(Debug, Error)]
pub enum TspError {
    // ===== Input source errors =====
    /// The coordinate file does not exist.
    #[error("{}: file not found", .path.display())]
    InputNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The coordinate file exists but may not be read.
    #[error("{}: permission denied", .path.display())]
    PermissionDenied {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Any other I/O failure while reading the coordinate file.
    #[error("{}: incorrect file name or location ({source})", .path.display())]
    InputUnreadable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The coordinate file is not a usable GeoJSON feature collection.
    #[error("{}: invalid JSON file: {reason}", .path.display())]
    InputMalformed {
        /// Path that was requested.
        path: PathBuf,
        /// What was wrong with the content.
        reason: String,
    },

    // ===== Configuration errors =====
    /// An experiment option has an unrecognized or out-of-range value.
    #[error("configuration error: {message}")]
    ConfigInvalid {
        /// Description of the problem.
        message: String,
    },

    /// The point set is smaller than the algorithm requires.
    #[error("need at least {required} points, got {actual}")]
    TooFewPoints {
        /// Minimum number of points.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// A fixed starting node does not index into the point set.
    #[error("starting node {start} is out of range for {len} points")]
    StartOutOfRange {
        /// Requested starting index.
        start: usize,
        /// Number of points.
        len: usize,
    },
}

impl TspError {
    /// Creates a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Returns `true` for errors caused by the coordinate source.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound { .. }
                | Self::PermissionDenied { .. }
                | Self::InputUnreadable { .. }
                | Self::InputMalformed { .. }
        )
    }
}

/// Checks that `start` (if any) indexes into a set of `len` points.
pub(crate) fn check_start(start: Option<usize>, len: usize) -> TspResult<()> {
    match start {
        Some(start) if start >= len => Err(TspError::StartOutOfRange { start, len }),
        _ => Ok(()),
    }
}
