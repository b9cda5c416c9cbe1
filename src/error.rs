//! Error types for u-tsp.

use thiserror::Error;

/// Main error type for TSP loading and solving.
#[derive(Debug, Error)]
pub enum TspError {
    /// Reading an instance file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the instance file could not be interpreted.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The instance header has no `DIMENSION` field.
    #[error("missing DIMENSION field in instance header")]
    MissingDimension,

    /// The coordinate section holds fewer records than `DIMENSION` announced.
    #[error("expected {expected} coordinate records, found {found}")]
    DimensionMismatch {
        /// Value of the `DIMENSION` field.
        expected: usize,
        /// Number of records actually read.
        found: usize,
    },

    /// A solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An explicit distance matrix is malformed.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),

    /// The run was cancelled before any tour was produced.
    #[error("run was cancelled before producing a tour")]
    Cancelled,

    /// The instance is too small to build a tour over.
    #[error("instance with {0} cities is degenerate, at least 2 are required")]
    DegenerateInstance(usize),
}

/// Result type alias for u-tsp operations.
pub type Result<T> = std::result::Result<T, TspError>;
