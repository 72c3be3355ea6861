//! AgentState subsystem error type.

use mapd_cache::CacheError;
use thiserror::Error;

/// A `commit_*` precondition violated while driving the FSM.
/// Fatal — indicates a bug upstream (planner reported `reached` falsely, or
/// two agents were dispatched at the same cache cell), never a normal
/// runtime condition.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Cache(#[from] CacheError),
}

pub type AgentResult<T> = Result<T, AgentError>;
