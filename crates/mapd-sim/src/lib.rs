//! `mapd-sim` — the top-level tick loop wiring a [`Planner`][mapd_planner::Planner],
//! an [`Instance`][mapd_instance::Instance], and a pluggable [`SimObserver`]
//! together into a runnable simulation.
//!
//! # Tick loop
//!
//! ```text
//! loop until instance.stats.is_done() or the time limit elapses:
//!   ① Plan   — build a PlanningContext from the current Instance state and
//!              call Planner::solve to get a Solution for this tick.
//!              A PlannerFailure ends the run.
//!   ② Apply  — advance every AgentState through its FSM step, dispatching
//!              to the cache-enabled or cache-disabled update path per
//!              Config::cache_type.
//!   ③ Notify — advance the tick counter and call SimObserver::on_tick_end
//!              with the number of goals reached this tick.
//! on exit, call SimObserver::on_sim_end with the final tick and success flag.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mapd_core::Config;
//! use mapd_grid::load_map_file;
//! use mapd_planner::GreedyStepPlanner;
//! use mapd_sim::{NoopObserver, SimBuilder};
//!
//! let grid = load_map_file("warehouse.map")?;
//! let mut sim = SimBuilder::new(config, grid, GreedyStepPlanner).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod logging;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use logging::init_tracing;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
