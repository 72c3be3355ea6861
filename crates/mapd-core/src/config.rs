//! The flat run-parameter object.
//!
//! Passed by shared reference into each component's constructor — no
//! component stores a back-pointer to a `Config`.

use std::path::PathBuf;

use crate::error::{ConfigError, CoreResult};

/// Eviction policy selection. `None` disables the cache substrate entirely
/// (every goal is served from the warehouse).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CacheType {
    None,
    Lru,
    Fifo,
    Random,
}

/// Demand-generator selection for `GoalStream` construction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalsGen {
    /// Bounded-diversity sliding window (`goals_m`, `goals_k`).
    Mk,
    /// A/B/C harmonic-weighted classes.
    Zhang,
    /// Empirical frequency loaded from `real_dist_file`.
    Real,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub map_file: PathBuf,
    pub cache_type: CacheType,
    pub look_ahead: u32,
    pub delay_deadline: u32,
    pub num_goals: u32,
    pub num_agents: u32,
    pub agent_capacity: u32,
    pub goals_gen: GoalsGen,
    pub goals_m: u32,
    pub goals_k: u32,
    pub real_dist_file: Option<PathBuf>,
    pub random_seed: u64,
    pub time_limit_sec: f64,
    /// Enables the mid-route opportunistic insert (DirectToPort, not yet
    /// reached).
    pub optimization: bool,
}

impl Config {
    /// Validates cross-field constraints against the group count discovered
    /// from the map file (`groups`). Mirrors the startup assertions in the
    /// original implementation's parser/instance construction.
    pub fn validate(&self, groups: u16) -> CoreResult<()> {
        if groups == 0 || self.num_agents % groups as u32 != 0 {
            return Err(ConfigError::AgentsNotDivisibleByGroups {
                num_agents: self.num_agents,
                groups,
            });
        }
        if self.num_agents > self.num_goals {
            return Err(ConfigError::AgentsExceedGoals {
                num_agents: self.num_agents,
                num_goals: self.num_goals,
            });
        }
        if self.look_ahead < 1 {
            return Err(ConfigError::LookAheadTooSmall(self.look_ahead));
        }
        if self.delay_deadline < 1 {
            return Err(ConfigError::DelayDeadlineTooSmall(self.delay_deadline));
        }
        if self.agent_capacity < 1 {
            return Err(ConfigError::AgentCapacityTooSmall(self.agent_capacity));
        }
        if self.goals_gen == GoalsGen::Mk && (self.goals_m < 1 || self.goals_k < 1) {
            return Err(ConfigError::MkParamsInvalid {
                goals_m: self.goals_m,
                goals_k: self.goals_k,
            });
        }
        if self.goals_gen == GoalsGen::Real && self.real_dist_file.is_none() {
            return Err(ConfigError::MissingRealDistFile);
        }
        Ok(())
    }

    /// Number of agents assigned to each group, per the `group[a] = a ÷
    /// (N/G)` rule.
    #[inline]
    pub fn agents_per_group(&self, groups: u16) -> u32 {
        self.num_agents / groups as u32
    }
}
