//! Fluent builder for constructing a [`Sim`].

use std::time::Duration;

use mapd_core::{Config, SimRng, Tick};
use mapd_grid::Grid;
use mapd_instance::Instance;
use mapd_planner::Planner;

use crate::error::SimResult;
use crate::sim::Sim;

/// Builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`Config`] — the flat run-parameter object.
/// - [`Grid`] — a parsed map (`mapd_grid::load_map`/`load_map_file`).
/// - `P: Planner` — the path-planning collaborator, e.g.
///   [`mapd_planner::GreedyStepPlanner`].
///
/// # Example
///
/// ```rust,ignore
/// let grid = mapd_grid::load_map_file("warehouse.map")?;
/// let sim = SimBuilder::new(config, grid, GreedyStepPlanner).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: Planner> {
    config:  Config,
    grid:    Grid,
    planner: P,
}

impl<P: Planner> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: Config, grid: Grid, planner: P) -> Self {
        Self { config, grid, planner }
    }

    /// Validate the configuration against the grid, build the `Instance`
    /// (agent placement, per-group caches and goal streams), and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        let mut rng = SimRng::new(self.config.random_seed);
        let time_limit = Duration::from_secs_f64(self.config.time_limit_sec.max(0.0));
        let instance = Instance::build(&self.config, self.grid, &mut rng)?;

        Ok(Sim {
            instance,
            planner: self.planner,
            rng,
            tick: Tick::ZERO,
            time_limit,
        })
    }
}
