//! The `Sim` struct and its tick loop.

use std::time::Duration;

use mapd_core::{SimRng, Tick};
use mapd_instance::Instance;
use mapd_planner::{Planner, PlanningContext};

use crate::error::{SimError, SimResult};
use crate::observer::SimObserver;

/// The top-level tick-loop orchestrator.
///
/// Each tick: build a [`PlanningContext`] from `Instance`'s current
/// starts/goals, call `Planner::solve`, then feed the terminal
/// configuration into whichever of `Instance`'s two tick processors matches
/// `Instance::cache_enabled()`. Runs until every goal has been delivered or
/// the planner fails to produce a solution within its per-tick deadline
/// (`PlannerFailure`).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Planner> {
    /// The grid, agent store, and per-group caches/goal-streams.
    pub instance: Instance,

    /// The path-planning collaborator. Called once per tick.
    pub planner: P,

    /// The run's top-level deterministic RNG, threaded into every
    /// cache/goal-stream decision the tick processors make.
    pub rng: SimRng,

    /// Ticks elapsed since the run started.
    pub tick: Tick,

    /// Per-tick deadline passed to `Planner::solve` — a synchronous call
    /// bounded by a deadline supplied by the caller.
    pub time_limit: Duration,
}

impl<P: Planner> Sim<P> {
    /// Run until `Instance`'s statistics report every goal delivered, or
    /// the planner fails.
    ///
    /// Calls observer hooks at every tick boundary. Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let span = tracing::info_span!("sim_run");
        let _enter = span.enter();

        while !self.instance.stats.is_done() {
            let ctx = PlanningContext::new(
                &self.instance.grid,
                &self.instance.agents.start,
                &self.instance.agents.goal,
                self.time_limit,
            );

            let solution = match self.planner.solve(&ctx) {
                Ok(solution) => solution,
                Err(err) => {
                    tracing::error!(tick = self.tick.0, %err, "planner failed to produce a solution");
                    observer.on_sim_end(self.tick, &self.instance.stats, false);
                    return Err(SimError::PlannerFailure(err));
                }
            };

            let terminal = solution.terminal().clone();
            let tick_len = solution.tick_len();

            let reached = if self.instance.cache_enabled() {
                self.instance
                    .update_on_reaching_goals_with_cache(&terminal, tick_len, &mut self.rng)?
            } else {
                self.instance
                    .update_on_reaching_goals_without_cache(&terminal, tick_len, &mut self.rng)?
            };

            self.tick += tick_len as u64;
            tracing::debug!(tick = self.tick.0, reached, remain_goals = self.instance.stats.remain_goals, "tick complete");
            observer.on_tick_end(self.tick, reached, &self.instance.stats);
        }

        observer.on_sim_end(self.tick, &self.instance.stats, true);
        Ok(())
    }
}
