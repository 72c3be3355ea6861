//! `mapd-instance` — `Instance`: bundles the grid, the per-agent arrays, and
//! the per-group caches/goal-streams, and exposes the two tick processors.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|------------------------------------------------------------|
//! | [`instance`] | `Instance`, its `build` constructor, the tick processors     |
//! | [`group`]    | `GroupState` — one group's cache, goal stream, and cells     |
//! | [`stats`]    | `Stats` — cache-hit/latency accumulators for the summary row |
//! | [`error`]    | `InstanceError`, `InstanceResult<T>`                         |
//!
//! `mapd-sim` drives the tick loop: build a `mapd_planner::PlanningContext`
//! from `Instance::agents`, call the planner, then feed the terminal
//! configuration into whichever tick processor matches
//! `Instance::cache_enabled()`.

pub mod error;
pub mod group;
pub mod instance;
pub mod stats;


pub use error::{InstanceError, InstanceResult};
pub use group::GroupState;
pub use instance::Instance;
pub use stats::Stats;
