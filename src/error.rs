//! Shared error types for the profiling pipeline.

use thiserror::Error;

/// Main error type for dataset profiling operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Processing or statistics requested over zero elements.
    #[error("dataset is empty")]
    EmptyDataset,

    /// The optional divisor of the compound operation was zero.
    #[error("divisor must be non-zero")]
    ZeroDivisor,

    /// Random sampling requested over an inverted interval.
    #[error("invalid sampling range: min {min} exceeds max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// User-supplied text that is not a non-negative integer.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),

    /// Report sink failures.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// History CSV failures.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON serialization failures.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
