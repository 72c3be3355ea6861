//! `mapd-agent` — the per-agent scalar arrays plus `AgentState`: the
//! 7-state FSM that drives cache-aware task assignment.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`status`]     | `AgentStatus`, the 7-state enum                         |
//! | [`store`]      | `AgentStore` — Structure-of-Arrays per-agent fields      |
//! | [`transition`] | `step_with_cache`, `TransitionOutcome` — the FSM itself  |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                          |
//!
//! `step_with_cache` drives a single agent through both halves of one
//! tick's transition and is convenient for tests and the cache-disabled
//! path. A cache-enabled multi-agent sweep instead calls `release_step` for
//! every agent, in ascending `AgentId` order, before calling `reserve_step`
//! for any agent — so a slot released this tick by any agent is visible to
//! every agent's reservation attempt within the same tick — and
//! `mapd-instance`'s tick processor implements that two-pass sweep.

pub mod error;
pub mod status;
pub mod store;
pub mod transition;

#[cfg(test)]
mod tests;

pub use error::{AgentError, AgentResult};
pub use status::AgentStatus;
pub use store::AgentStore;
pub use transition::{release_step, reserve_step, step_with_cache, TransitionOutcome};
