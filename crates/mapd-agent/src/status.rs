//! The 7-state per-agent status.

/// Where an agent is heading and why.
///
/// Transitions fire only when the planner reports that the agent's physical
/// position equals its current goal; see [`crate::transition::step_with_cache`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AgentStatus {
    /// Going to a cache slot to clear a garbage cargo (eviction).
    GarbageClear = 0,
    /// Going to the warehouse to pick up `cargo_goal`.
    WarehousePickup = 1,
    /// Going to a cache slot to read `cargo_goal` (cache hit).
    CacheRead = 2,
    /// Returning from the cache eviction to the warehouse cell of `cargo_goal`.
    PostEvictionReturn = 3,
    /// Carrying `cargo_goal` from warehouse to a reserved cache slot (insert).
    CacheInsert = 4,
    /// Carrying `cargo_goal` from warehouse directly to the port (cache full).
    DirectToPort = 5,
    /// Carrying `cargo_goal` from a cache slot to the port.
    CacheToPort = 6,
}

impl AgentStatus {
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Default for AgentStatus {
    /// Initial status for all agents: the cache starts empty, so every agent
    /// must fetch its first goal from the warehouse.
    fn default() -> Self {
        AgentStatus::WarehousePickup
    }
}
