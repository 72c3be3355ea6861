//! The single-agent FSM transition: `AgentState`'s core operation,
//! split into [`release_step`] (the `commit_*` branches) and [`reserve_step`]
//! (the `try_*` branches) so a multi-agent sweep can run every agent's
//! release before any agent's reservation, keeping a slot released this
//! tick visible to every agent's reservation attempt this same tick.
//! [`step_with_cache`] composes both for a single agent in one call.

use mapd_cache::{Cache, GcOutcome, InsertOutcome, ReadOutcome};
use mapd_core::{AgentId, CargoId, SimRng, VertexId};
use mapd_goals::GoalStream;

use crate::error::AgentResult;
use crate::status::AgentStatus;
use crate::store::AgentStore;

/// What happened during one agent's transition, for the caller (`Instance`)
/// to fold into its statistics accumulators. `AgentState` does not own the
/// counters itself — no component stores a back-pointer to shared state it
/// doesn't need for its own logic.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub cache_access: bool,
    pub cache_hit: bool,
    /// `Some(cargo_cnt)` when the agent just completed a delivery — the
    /// number of ticks the finished delivery took, for `cargo_steps`/
    /// makespan statistics. `cargo_cnt` has already been reset to 0 by the
    /// time this is returned.
    pub delivered_cargo_steps: Option<u32>,
}

/// Maps a cargo identity to its warehouse cell within one group.
///
/// Cargo identities are assigned densely per group at construction time
/// (`cargo_cells_by_group[g][cargo.index()]`, see `mapd-instance`), so this
/// is a plain index — no search required.
#[inline]
fn warehouse_cell(cargo_cells: &[VertexId], cargo: CargoId) -> VertexId {
    cargo_cells[cargo.index()]
}

/// The "release" half of the transition table: the three branches that
/// call a `commit_*` (lock-releasing) cache operation, plus the
/// cache-independent `PostEvictionReturn` bookkeeping step. Operates only on
/// the statuses `{GarbageClear, CacheRead, PostEvictionReturn, CacheInsert}`
/// — a no-op for any other status.
///
/// `status` is the agent's status *as observed at the start of this tick*,
/// passed explicitly rather than read from `store` so that a multi-agent
/// sweep can snapshot it once before any agent's release runs (see
/// `mapd_instance::Instance`'s two-pass sweep) and so a single call can't
/// accidentally cascade into a second transition for the same tick.
pub fn release_step(
    agent: AgentId,
    status: AgentStatus,
    store: &mut AgentStore,
    cache: &mut Cache,
    cargo_cells: &[VertexId],
    port: VertexId,
) -> AgentResult<()> {
    let i = agent.index();
    if !store.reached(agent) {
        return Ok(());
    }

    match status {
        AgentStatus::GarbageClear => {
            cache.commit_clear(store.garbage[i], store.goal[i])?;
            store.goal[i] = warehouse_cell(cargo_cells, store.garbage[i]);
            store.status[i] = AgentStatus::PostEvictionReturn;
        }
        AgentStatus::CacheRead => {
            cache.commit_read(store.goal[i])?;
            store.goal[i] = port;
            store.status[i] = AgentStatus::CacheToPort;
        }
        AgentStatus::PostEvictionReturn => {
            store.goal[i] = warehouse_cell(cargo_cells, store.cargo_goal[i]);
            store.status[i] = AgentStatus::WarehousePickup;
        }
        AgentStatus::CacheInsert => {
            cache.commit_insert(store.cargo_goal[i], store.goal[i])?;
            store.goal[i] = port;
            store.status[i] = AgentStatus::CacheToPort;
        }
        AgentStatus::WarehousePickup | AgentStatus::DirectToPort | AgentStatus::CacheToPort => {}
    }
    Ok(())
}

/// The "reservation" half of the transition table: every branch that
/// calls a `try_*` (lock-taking) cache operation. Operates only on the
/// statuses `{WarehousePickup, DirectToPort, CacheToPort}` — a no-op for any
/// other status. See [`release_step`] for why `status` is passed explicitly.
#[allow(clippy::too_many_arguments)]
pub fn reserve_step(
    agent: AgentId,
    status: AgentStatus,
    store: &mut AgentStore,
    cache: &mut Cache,
    goals: &mut GoalStream,
    cargo_cells: &[VertexId],
    port: VertexId,
    look_ahead: u32,
    delay_deadline: u32,
    optimization: bool,
    rng: &mut SimRng,
    outcome: &mut TransitionOutcome,
) {
    let i = agent.index();
    let reached = store.reached(agent);

    match status {
        AgentStatus::WarehousePickup => {
            if reached {
                match cache.try_insert(store.cargo_goal[i]) {
                    InsertOutcome::Reserved { cell, .. } => {
                        store.status[i] = AgentStatus::CacheInsert;
                        store.goal[i] = cell;
                    }
                    InsertOutcome::Rejected => {
                        store.status[i] = AgentStatus::DirectToPort;
                        store.goal[i] = port;
                    }
                }
            } else if let ReadOutcome::Hit { cell, .. } = cache.try_read(store.cargo_goal[i]) {
                // A newly observed cache hit while still walking to the
                // warehouse: redirect straight to the cache read instead of
                // leaving status at WarehousePickup.
                store.status[i] = AgentStatus::CacheRead;
                store.goal[i] = cell;
                outcome.cache_access = true;
                outcome.cache_hit = true;
            }
        }

        AgentStatus::DirectToPort => {
            if reached {
                outcome.delivered_cargo_steps = Some(finish_delivery(store, i));
                dispatch_next_goal(
                    store, i, cache, goals, cargo_cells, look_ahead, delay_deadline, rng, outcome,
                );
            } else if optimization {
                if let InsertOutcome::Reserved { cell, .. } = cache.try_insert(store.cargo_goal[i]) {
                    store.status[i] = AgentStatus::CacheInsert;
                    store.goal[i] = cell;
                }
            }
        }

        AgentStatus::CacheToPort => {
            if reached {
                outcome.delivered_cargo_steps = Some(finish_delivery(store, i));
                dispatch_next_goal(
                    store, i, cache, goals, cargo_cells, look_ahead, delay_deadline, rng, outcome,
                );
            }
        }

        AgentStatus::GarbageClear | AgentStatus::CacheRead | AgentStatus::PostEvictionReturn => {}
    }
}

/// Runs one agent's transition as a single call: the release half
/// followed by the reservation half, both gated on the status observed at
/// entry. Since the two halves act on disjoint status sets, this is
/// equivalent to calling [`release_step`] then [`reserve_step`] with the
/// same snapshot, and is safe to use standalone for a single agent. A
/// multi-agent sweep should instead run `release_step` for every agent
/// before `reserve_step` for any agent — see
/// `mapd_instance::Instance::update_on_reaching_goals_with_cache`'s two-pass
/// sweep. `cargo_cells` is this agent's group's warehouse cargo cells,
/// indexed by `CargoId`; `port` is the group's unloading port;
/// `optimization` enables the mid-route opportunistic insert (status 5, not
/// reached).
#[allow(clippy::too_many_arguments)]
pub fn step_with_cache(
    agent: AgentId,
    store: &mut AgentStore,
    cache: &mut Cache,
    goals: &mut GoalStream,
    cargo_cells: &[VertexId],
    port: VertexId,
    look_ahead: u32,
    delay_deadline: u32,
    optimization: bool,
    rng: &mut SimRng,
) -> AgentResult<TransitionOutcome> {
    let status = store.status[agent.index()];
    let mut outcome = TransitionOutcome::default();
    release_step(agent, status, store, cache, cargo_cells, port)?;
    reserve_step(
        agent, status, store, cache, goals, cargo_cells, port, look_ahead, delay_deadline,
        optimization, rng, &mut outcome,
    );
    Ok(outcome)
}

/// Records the just-finished delivery's step count and resets `cargo_cnt`.
/// Returns the recorded count.
fn finish_delivery(store: &mut AgentStore, i: usize) -> u32 {
    let cargo_steps = store.cargo_cnt[i];
    store.cargo_cnt[i] = 0;
    cargo_steps
}

/// Shared tail of the `status 5 → {2,0,1}` and `status 6 → {2,0,1}`
/// transitions: fetch the next goal and decide whether it is served from
/// the cache, by eviction, or from the warehouse.
#[allow(clippy::too_many_arguments)]
fn dispatch_next_goal(
    store: &mut AgentStore,
    i: usize,
    cache: &mut Cache,
    goals: &mut GoalStream,
    cargo_cells: &[VertexId],
    look_ahead: u32,
    delay_deadline: u32,
    rng: &mut SimRng,
    outcome: &mut TransitionOutcome,
) {
    let next = goals.next_goal(look_ahead as usize, delay_deadline, cache, rng);
    store.cargo_goal[i] = next;

    match cache.try_read(next) {
        ReadOutcome::Hit { cell, .. } => {
            store.status[i] = AgentStatus::CacheRead;
            store.goal[i] = cell;
            outcome.cache_access = true;
            outcome.cache_hit = true;
        }
        ReadOutcome::Miss => {
            outcome.cache_access = true;
            match cache.try_gc(next, rng) {
                GcOutcome::Reserved { cell, garbage, .. } => {
                    store.status[i] = AgentStatus::GarbageClear;
                    store.garbage[i] = garbage;
                    store.goal[i] = cell;
                }
                GcOutcome::Rejected => {
                    store.status[i] = AgentStatus::WarehousePickup;
                    store.goal[i] = warehouse_cell(cargo_cells, next);
                }
            }
        }
    }
}
