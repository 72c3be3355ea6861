//! Instance-subsystem error type.

use thiserror::Error;
use mapd_core::{ConfigError, GroupId};

/// Errors surfaced from `Instance::build` and the tick processors:
/// configuration and map problems are fatal at startup, cache invariant
/// violations are fatal mid-run.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] mapd_grid::GridError),

    #[error(transparent)]
    Goals(#[from] mapd_goals::GoalsError),

    #[error(transparent)]
    Agent(#[from] mapd_agent::AgentError),

    #[error("group {0} has no unloading port")]
    MissingPort(GroupId),

    #[error("map has {available} non-wall vertices, fewer than the {requested} agents requested")]
    NotEnoughStartVertices { available: usize, requested: usize },
}

pub type InstanceResult<T> = Result<T, InstanceError>;
