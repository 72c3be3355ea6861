//! Shared configuration error type.
//!
//! Sub-crates define their own error enums and convert into these where a
//! `ConfigError` needs to cross a crate boundary; this keeps `mapd-core`
//! itself free of a `mapd-*` dependency.

use thiserror::Error;

/// Unknown cache type, generator, or inconsistent workload sizes. Reported
/// at startup; the process terminates with a non-zero exit.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("num_agents ({num_agents}) must be divisible by group count ({groups})")]
    AgentsNotDivisibleByGroups { num_agents: u32, groups: u16 },

    #[error("num_agents ({num_agents}) must not exceed num_goals ({num_goals})")]
    AgentsExceedGoals { num_agents: u32, num_goals: u32 },

    #[error("look_ahead must be >= 1, got {0}")]
    LookAheadTooSmall(u32),

    #[error("delay_deadline must be >= 1, got {0}")]
    DelayDeadlineTooSmall(u32),

    #[error("agent_capacity must be >= 1, got {0}")]
    AgentCapacityTooSmall(u32),

    #[error("MK generator requires goals_m >= 1 and goals_k >= 1, got m={goals_m} k={goals_k}")]
    MkParamsInvalid { goals_m: u32, goals_k: u32 },

    #[error("real_dist_file is required when goals_gen = Real")]
    MissingRealDistFile,
}

pub type CoreResult<T> = Result<T, ConfigError>;
