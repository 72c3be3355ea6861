//! `Instance`: bundles the grid, the per-agent arrays, and the per-group
//! caches/goal-streams, and drives the two tick processors.

use mapd_agent::{release_step, reserve_step, AgentStatus, AgentStore, TransitionOutcome};
use mapd_cache::{Cache, EvictionPolicy};
use mapd_core::{AgentId, CacheType, CargoId, Config, GoalsGen, GroupId, SimRng, VertexId};
use mapd_goals::GoalStream;
use mapd_grid::Grid;

use crate::error::{InstanceError, InstanceResult};
use crate::group::GroupState;
use crate::stats::Stats;

/// Maps a cargo identity to its warehouse cell within one group. Mirrors
/// `mapd_agent::transition`'s private helper — `Instance`'s cache-disabled
/// tick processor needs the same lookup but that helper isn't exported.
#[inline]
fn warehouse_cell(cargo_cells: &[VertexId], cargo: CargoId) -> VertexId {
    cargo_cells[cargo.index()]
}

fn eviction_policy_for(cache_type: CacheType) -> EvictionPolicy {
    match cache_type {
        CacheType::None => EvictionPolicy::Lru, // unused: no slot is ever reserved.
        CacheType::Lru => EvictionPolicy::Lru,
        CacheType::Fifo => EvictionPolicy::Fifo,
        CacheType::Random => EvictionPolicy::Random,
    }
}

pub struct Instance {
    pub grid: Grid,
    pub agents: AgentStore,
    pub groups: Vec<GroupState>,
    pub stats: Stats,
    cache_enabled: bool,
    look_ahead: u32,
    delay_deadline: u32,
    optimization: bool,
}

impl Instance {
    /// Builds an `Instance` from a loaded `Grid` and a validated `Config`.
    ///
    /// Starting positions are a uniform random sample, without replacement,
    /// of the grid's non-wall vertices, chosen once at construction — an
    /// agent's start cell is independent of its assigned group, since the
    /// coordinate space is shared across groups (see `mapd_grid::Grid`'s doc
    /// comment on group boundaries).
    pub fn build(config: &Config, grid: Grid, rng: &mut SimRng) -> InstanceResult<Self> {
        config.validate(grid.groups)?;

        let mut groups = build_groups(config, &grid, rng)?;
        let mut agents = AgentStore::new(config.num_agents as usize, grid.groups);

        assign_starts(&grid, &mut agents, rng)?;
        assign_initial_goals(&mut agents, &mut groups, config.delay_deadline, rng);

        Ok(Self {
            grid,
            agents,
            groups,
            stats: Stats::new(config.num_goals),
            cache_enabled: config.cache_type != CacheType::None,
            look_ahead: config.look_ahead,
            delay_deadline: config.delay_deadline,
            optimization: config.optimization,
        })
    }

    #[inline]
    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    /// Tick processor for a cache-enabled run: a two-pass sweep over every
    /// agent, ascending `AgentId` order, after folding the planner's terminal
    /// configuration into `agents.start` and the tick length into
    /// `agents.cargo_cnt`.
    ///
    /// Every agent's release (`commit_*`) must run before any agent's
    /// reservation (`try_*`) is attempted this tick, so a slot freed by one
    /// agent is visible to every other agent's reservation regardless of id
    /// order — not just to agents processed later in a single combined pass.
    /// This is done by snapshotting every agent's status before either pass,
    /// running [`release_step`] for the whole sweep first, then
    /// [`reserve_step`] for the whole sweep second, both gated on the
    /// snapshot rather than the (by-then partly mutated) live status.
    /// Returns the number of deliveries completed this tick.
    pub fn update_on_reaching_goals_with_cache(
        &mut self,
        terminal: &[VertexId],
        tick_len: u32,
        rng: &mut SimRng,
    ) -> InstanceResult<u32> {
        let _span = tracing::debug_span!("update_with_cache", agents = self.agents.count).entered();
        let look_ahead = self.look_ahead;
        let delay_deadline = self.delay_deadline;
        let optimization = self.optimization;

        self.agents.tick_cargo_cnt(tick_len);
        self.agents.start.copy_from_slice(terminal);

        let ids: Vec<AgentId> = self.agents.agent_ids().collect();
        let status_snapshot: Vec<AgentStatus> =
            ids.iter().map(|a| self.agents.status[a.index()]).collect();

        for &agent in &ids {
            let g = self.agents.group[agent.index()].index();
            let group = &mut self.groups[g];
            release_step(
                agent,
                status_snapshot[agent.index()],
                &mut self.agents,
                &mut group.cache,
                &group.cargo_cells,
                group.port,
            )?;
        }

        let mut reached = 0u32;
        for &agent in &ids {
            let g = self.agents.group[agent.index()].index();
            let group = &mut self.groups[g];
            let mut outcome = TransitionOutcome::default();
            reserve_step(
                agent,
                status_snapshot[agent.index()],
                &mut self.agents,
                &mut group.cache,
                &mut group.goals,
                &group.cargo_cells,
                group.port,
                look_ahead,
                delay_deadline,
                optimization,
                rng,
                &mut outcome,
            );

            if outcome.cache_access {
                self.stats.record_cache_access(outcome.cache_hit);
            }
            if let Some(steps) = outcome.delivered_cargo_steps {
                if self.stats.remain_goals > 0 {
                    self.stats.remain_goals -= 1;
                    self.stats.record_delivery(steps);
                    reached += 1;
                    tracing::debug!(agent = agent.index(), steps, remain_goals = self.stats.remain_goals, "delivery completed");
                }
            }
        }

        Ok(reached)
    }

    /// Degraded tick processor for `CacheType::None`: on reaching a port,
    /// draw a new goal and set it as both `goal` and `cargo_goal`; on
    /// reaching a cargo cell, set `goal` to the port.
    pub fn update_on_reaching_goals_without_cache(
        &mut self,
        terminal: &[VertexId],
        tick_len: u32,
        rng: &mut SimRng,
    ) -> InstanceResult<u32> {
        let _span = tracing::debug_span!("update_without_cache", agents = self.agents.count).entered();
        let look_ahead = self.look_ahead;
        let delay_deadline = self.delay_deadline;

        self.agents.tick_cargo_cnt(tick_len);
        self.agents.start.copy_from_slice(terminal);

        let ids: Vec<AgentId> = self.agents.agent_ids().collect();
        let mut reached = 0u32;

        for agent in ids {
            let i = agent.index();
            if !self.agents.reached(agent) {
                continue;
            }
            let g = self.agents.group[i].index();
            let group = &mut self.groups[g];

            if self.agents.goal[i] == group.port {
                let steps = self.agents.cargo_cnt[i];
                self.agents.cargo_cnt[i] = 0;
                if self.stats.remain_goals > 0 {
                    self.stats.remain_goals -= 1;
                    self.stats.record_delivery(steps);
                    reached += 1;
                    tracing::debug!(agent = i, steps, remain_goals = self.stats.remain_goals, "delivery completed");
                }

                let next = group
                    .goals
                    .next_goal(look_ahead as usize, delay_deadline, &group.cache, rng);
                self.agents.cargo_goal[i] = next;
                self.agents.goal[i] = warehouse_cell(&group.cargo_cells, next);
                self.agents.status[i] = AgentStatus::WarehousePickup;
            } else {
                self.agents.goal[i] = group.port;
            }
        }

        Ok(reached)
    }
}

fn build_groups(config: &Config, grid: &Grid, rng: &mut SimRng) -> InstanceResult<Vec<GroupState>> {
    let mut groups = Vec::with_capacity(grid.groups as usize);
    let goals_per_group = config.num_goals / grid.groups as u32 + 1;

    for g in 0..grid.groups {
        let group_id = GroupId(g);
        let cargo_cells = grid.cargo_cells_by_group[g as usize].clone();
        let cargo_pool: Vec<CargoId> = (0..cargo_cells.len() as u32).map(CargoId).collect();

        let port = grid
            .vertices
            .iter()
            .find(|v| v.is_port && v.group == group_id)
            .map(|v| v.id)
            .ok_or(InstanceError::MissingPort(group_id))?;

        let cache = Cache::new(
            grid.cache_cells_by_group[g as usize].clone(),
            eviction_policy_for(config.cache_type),
            config.agent_capacity,
        );

        let mut group_rng = rng.child(g as u64);
        let goals = match config.goals_gen {
            GoalsGen::Mk => GoalStream::from_mk(
                cargo_pool,
                goals_per_group as usize,
                config.goals_m as usize,
                config.goals_k as usize,
                &mut group_rng,
            ),
            GoalsGen::Zhang => {
                GoalStream::from_zhang(cargo_pool, goals_per_group as usize, &mut group_rng)
            }
            GoalsGen::Real => {
                let path = config
                    .real_dist_file
                    .as_ref()
                    .expect("validated: real_dist_file present for GoalsGen::Real");
                let frequencies = mapd_goals::load_real_distribution(path, &cargo_pool)?;
                GoalStream::from_real(
                    cargo_pool,
                    &frequencies,
                    goals_per_group as usize,
                    &mut group_rng,
                )
            }
        };

        groups.push(GroupState {
            cargo_cells,
            port,
            cache,
            goals,
        });
    }

    Ok(groups)
}

/// Picks `num_agents` distinct vertices uniformly at random via a partial
/// Fisher-Yates shuffle. Starts are fixed once at construction.
fn assign_starts(grid: &Grid, agents: &mut AgentStore, rng: &mut SimRng) -> InstanceResult<()> {
    let n = grid.vertices.len();
    if n < agents.count {
        return Err(InstanceError::NotEnoughStartVertices {
            available: n,
            requested: agents.count,
        });
    }

    let mut pool: Vec<VertexId> = grid.vertices.iter().map(|v| v.id).collect();
    for i in 0..agents.count {
        let j = i + rng.gen_range(0..(pool.len() - i));
        pool.swap(i, j);
        agents.start[i] = pool[i];
        // Every agent begins with no physical goal yet — the first goal
        // assignment below sets it.
        agents.goal[i] = pool[i];
    }
    Ok(())
}

/// Seeds every agent's first `cargo_goal`/`goal` from its group's stream.
/// Every agent's initial status is `WarehousePickup` — the cache is empty at
/// construction, so this is equivalent to a plain pop.
fn assign_initial_goals(
    agents: &mut AgentStore,
    groups: &mut [GroupState],
    delay_deadline: u32,
    rng: &mut SimRng,
) {
    for a in 0..agents.count {
        let g = agents.group[a].index();
        let group = &mut groups[g];
        let next = group.goals.next_goal(1, delay_deadline, &group.cache, rng);
        agents.cargo_goal[a] = next;
        agents.goal[a] = warehouse_cell(&group.cargo_cells, next);
        agents.status[a] = AgentStatus::WarehousePickup;
    }
}
