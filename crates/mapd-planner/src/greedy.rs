//! A simple default `Planner`: independent per-agent BFS, one step per
//! tick, with no collision resolution.
//!
//! Planning collision-free paths is explicitly out of scope for this crate —
//! `GreedyStepPlanner` exists so the rest of the core (`AgentState`,
//! `Cache`, `GoalStream`) has something to run against end to end. Swap it
//! for a real conflict-free multi-agent path-finding algorithm by
//! implementing [`crate::Planner`] yourself.

use std::collections::VecDeque;
use std::time::Instant;

use mapd_core::VertexId;
use mapd_grid::Grid;

use crate::context::PlanningContext;
use crate::error::{PlannerError, PlannerResult};
use crate::solution::Solution;

/// Breadth-first-search shortest path, one step at a time, agent by agent.
///
/// Each call to [`Planner::solve`][crate::Planner::solve] advances every
/// agent that isn't already at its goal by exactly one hop along its own
/// shortest path, recomputed fresh each tick (no path cache — `Grid` can
/// change composition of cargo/cache cells over a run only at the margins
/// this core cares about, and a fresh BFS is simplest to reason about).
/// Agents may end up sharing a cell; resolving that is the out-of-scope
/// planner's job, not this stand-in's.
pub struct GreedyStepPlanner;

impl GreedyStepPlanner {
    /// Returns the first hop of a shortest path from `from` to `to`, or
    /// `from` itself if `from == to` or no path exists.
    fn next_hop(grid: &Grid, from: VertexId, to: VertexId) -> VertexId {
        if from == to {
            return from;
        }

        let n = grid.vertices.len();
        let mut prev = vec![VertexId::INVALID; n];
        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();

        visited[from.index()] = true;
        queue.push_back(from);

        while let Some(u) = queue.pop_front() {
            if u == to {
                break;
            }
            for v in grid.neighbors(u) {
                if !visited[v.index()] {
                    visited[v.index()] = true;
                    prev[v.index()] = u;
                    queue.push_back(v);
                }
            }
        }

        if !visited[to.index()] {
            return from; // unreachable: stay put.
        }

        // Walk back from `to` to `from`, collecting the path, then take the
        // first step after `from`.
        let mut cur = to;
        let mut path = vec![cur];
        while cur != from {
            cur = prev[cur.index()];
            path.push(cur);
        }
        path.reverse();
        path.get(1).copied().unwrap_or(from)
    }
}

impl crate::Planner for GreedyStepPlanner {
    fn solve(&self, ctx: &PlanningContext<'_>) -> PlannerResult<Solution> {
        if ctx.starts.len() != ctx.goals.len() {
            return Err(PlannerError::LengthMismatch {
                starts: ctx.starts.len(),
                goals: ctx.goals.len(),
            });
        }

        let started = Instant::now();
        let mut terminal = Vec::with_capacity(ctx.starts.len());

        for (&start, &goal) in ctx.starts.iter().zip(ctx.goals.iter()) {
            if started.elapsed() > ctx.deadline {
                return Err(PlannerError::DeadlineExceeded(ctx.deadline));
            }
            terminal.push(Self::next_hop(ctx.grid, start, goal));
        }

        Ok(Solution::new(vec![ctx.starts.to_vec(), terminal]))
    }
}
