//! Planner-subsystem error type.

use thiserror::Error;

/// The planner returned no solution within its deadline.
///
/// A failure row is written to the CSV summary sink and the process exits
/// 1; this is the only `PlannerError` variant the top-level `mapd-sim` loop
/// treats as run-ending rather than fatal.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("planner exceeded its {0:?} deadline without returning a solution")]
    DeadlineExceeded(std::time::Duration),

    #[error("planner found no solution for the given starts/goals")]
    NoSolution,

    #[error("starts length {starts} does not match goals length {goals}")]
    LengthMismatch { starts: usize, goals: usize },
}

pub type PlannerResult<T> = Result<T, PlannerError>;
