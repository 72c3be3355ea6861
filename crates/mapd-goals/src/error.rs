//! Goal-stream subsystem error type.

use thiserror::Error;

/// Errors raised while constructing a [`crate::GoalStream`] from a `Real`
/// distribution file.
#[derive(Debug, Error)]
pub enum GoalsError {
    #[error("I/O error reading real-distribution CSV: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error reading real-distribution file: {0}")]
    Csv(#[from] csv::Error),

    #[error("real-distribution CSV row {0} has a non-integer product id: {1:?}")]
    InvalidProductId(usize, String),

    #[error("real-distribution CSV has no data rows")]
    EmptyDistribution,

    #[error("cargo pool for group is empty; cannot generate goals")]
    EmptyCargoPool,
}

pub type GoalsResult<T> = Result<T, GoalsError>;
