//! The `Planner` trait — the "multi-agent path planner" external
//! collaborator, specified only at its interface.

use crate::context::PlanningContext;
use crate::error::PlannerResult;
use crate::solution::Solution;

/// Produces a conflict-free one-tick advance for every agent.
///
/// Implement this trait to plug in an actual multi-agent path-finding
/// algorithm. Planning collision-free paths is explicitly out of scope for
/// this crate — the core only depends on `solve`'s signature, not on any
/// particular algorithm behind it.
///
/// # Required methods
///
/// Only [`solve`][Self::solve] is required.
///
/// # Determinism
///
/// Implementations should be deterministic for a given `PlanningContext` so
/// that a run with a fixed `random_seed` reproduces exactly; `mapd-sim`
/// never assumes this, but downstream statistics' seed tests do.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysStay;
///
/// impl Planner for AlwaysStay {
///     fn solve(&self, ctx: &PlanningContext<'_>) -> PlannerResult<Solution> {
///         let cfg = ctx.starts.to_vec();
///         Ok(Solution::new(vec![cfg.clone(), cfg]))
///     }
/// }
/// ```
pub trait Planner: Send + Sync + 'static {
    /// Plan one tick's advance for every agent in `ctx`.
    ///
    /// Returns `Err(PlannerError::DeadlineExceeded)` (or `NoSolution`) if no
    /// solution could be produced within `ctx.deadline` — the caller
    /// (`mapd-sim`) treats that as a `PlannerFailure` and ends the run.
    fn solve(&self, ctx: &PlanningContext<'_>) -> PlannerResult<Solution>;
}
