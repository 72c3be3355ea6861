//! Error type for the top-level tick-loop orchestrator.

use mapd_instance::InstanceError;
use mapd_planner::PlannerError;
use thiserror::Error;

/// The tick loop's error classes: `ConfigError`/`GridError`/`GoalsError`/
/// `AgentError` bubble up through `InstanceError` at startup or mid-run; a
/// `PlannerFailure` ends the run without propagating further than here.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Instance(#[from] InstanceError),

    #[error("planner failed to produce a solution: {0}")]
    PlannerFailure(#[from] PlannerError),
}

pub type SimResult<T> = Result<T, SimError>;
