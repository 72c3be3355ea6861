//! Read-only input passed to every `Planner::solve` call.

use std::time::Duration;

use mapd_core::VertexId;
use mapd_grid::Grid;

/// A read-only snapshot of what one planner invocation has to work with:
/// the grid, the per-agent starting cells, the per-agent goal cells, and
/// the deadline by which a solution must be returned — a synchronous call
/// bounded by a deadline supplied by the caller.
///
/// `starts` and `goals` are parallel arrays of length `num_agents`, indexed
/// by `AgentId`. `mapd-sim` builds a new `PlanningContext` once per tick
/// from `Instance`'s current agent positions and goals.
pub struct PlanningContext<'a> {
    pub grid: &'a Grid,
    pub starts: &'a [VertexId],
    pub goals: &'a [VertexId],
    pub deadline: Duration,
}

impl<'a> PlanningContext<'a> {
    #[inline]
    pub fn new(
        grid: &'a Grid,
        starts: &'a [VertexId],
        goals: &'a [VertexId],
        deadline: Duration,
    ) -> Self {
        Self {
            grid,
            starts,
            goals,
            deadline,
        }
    }

    #[inline]
    pub fn num_agents(&self) -> usize {
        self.starts.len()
    }
}
