//! `mapd-planner` — the "multi-agent path planner" external collaborator,
//! specified only at its interface.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|---------------------------------------------------------------|
//! | [`context`]  | `PlanningContext<'a>` — read-only input to one `solve` call   |
//! | [`solution`] | `Solution`, `Configuration` — the planner's output             |
//! | [`model`]    | `Planner` trait                                                |
//! | [`greedy`]   | `GreedyStepPlanner` — a collision-ignorant default planner     |
//! | [`error`]    | `PlannerError`, `PlannerResult<T>`                              |
//!
//! # Design notes
//!
//! `mapd-sim` calls `Planner::solve` once per tick with the current
//! starting positions and current goals; the returned `Solution`'s terminal
//! configuration is what `mapd-instance`'s tick processors feed into
//! `mapd_agent::transition::step_with_cache`. Planning collision-free paths
//! is explicitly out of scope here — this crate only fixes the shape of that
//! boundary, not an algorithm behind it. [`GreedyStepPlanner`] is provided
//! so the rest of the core has something to run end to end; production use
//! would substitute a real conflict-free multi-agent path-finding engine.

pub mod context;
pub mod error;
pub mod greedy;
pub mod model;
pub mod solution;

#[cfg(test)]
mod tests;

pub use context::PlanningContext;
pub use error::{PlannerError, PlannerResult};
pub use greedy::GreedyStepPlanner;
pub use model::Planner;
pub use solution::{Configuration, Solution};
