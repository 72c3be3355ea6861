//! The planner's output: a tick-local sequence of conflict-free
//! configurations — tick-local trajectories ending at time `T`.

use mapd_core::VertexId;

/// One instant's worth of agent positions, indexed by `AgentId`.
pub type Configuration = Vec<VertexId>;

/// The result of one `Planner::solve` call.
///
/// `configs[0]` is the starting configuration passed into `solve`;
/// `configs.last()` is the terminal configuration `AgentState` inspects to
/// decide FSM transitions. Everything in between is sub-tick detail a
/// renderer could use to animate motion, but the core only ever looks at
/// the first and last entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    configs: Vec<Configuration>,
}

impl Solution {
    /// Build a solution from at least two configurations (start + terminal).
    ///
    /// # Panics
    /// Panics if `configs` has fewer than two entries — a solution always
    /// has a starting and a terminal configuration, even when no agent
    /// moved (`tick_len() == 0`, `configs.len() == 1` would be ambiguous).
    pub fn new(configs: Vec<Configuration>) -> Self {
        assert!(
            configs.len() >= 2,
            "a Solution needs a starting and a terminal configuration"
        );
        Self { configs }
    }

    /// The configuration the planner started from.
    #[inline]
    pub fn initial(&self) -> &Configuration {
        &self.configs[0]
    }

    /// The configuration `AgentState` transitions against.
    #[inline]
    pub fn terminal(&self) -> &Configuration {
        self.configs.last().expect("non-empty by construction")
    }

    /// Number of planner sub-steps this tick advanced by. `cargo_cnt[a]` is
    /// incremented by this value before any FSM transition is considered.
    #[inline]
    pub fn tick_len(&self) -> u32 {
        (self.configs.len() - 1) as u32
    }

    /// All intermediate configurations, start to terminal inclusive — for
    /// visualization or trace output only; the core never reads this.
    #[inline]
    pub fn configurations(&self) -> &[Configuration] {
        &self.configs
    }
}
