//! Error types for interval selection.

use thiserror::Error;

/// Errors raised by the solvers, the dataset generator, and the benchmark harness.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Exhaustive search was asked to enumerate more subsets than it allows.
    #[error("exhaustive search limited to {limit} intervals, got {n}")]
    SizeLimitExceeded {
        /// Size of the rejected interval set.
        n: usize,
        /// Ceiling in force when the call was rejected.
        limit: usize,
    },

    /// Non-positive sizing or generation parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Failure while writing a tabular summary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for interval selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;
