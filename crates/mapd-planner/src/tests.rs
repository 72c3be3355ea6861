//! Unit tests for mapd-planner.

use std::time::Duration;

use mapd_core::VertexId;
use mapd_grid::{GraphType, GridBuilder, VertexKind};

use crate::{GreedyStepPlanner, Planner, PlanningContext, Solution};

/// A 1x5 aisle corridor: v0 - v1 - v2 - v3 - v4.
fn corridor(len: u32) -> mapd_grid::Grid {
    let mut b = GridBuilder::new(GraphType::SinglePort, len, 1, 1);
    for col in 0..len {
        b.add_cell(0, col, mapd_core::GroupId(0), VertexKind::Aisle, false);
    }
    b.build()
}

// ── Solution ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod solution_tests {
    use super::*;

    #[test]
    fn initial_and_terminal() {
        let start = vec![VertexId(0), VertexId(1)];
        let end = vec![VertexId(1), VertexId(2)];
        let sol = Solution::new(vec![start.clone(), end.clone()]);
        assert_eq!(sol.initial(), &start);
        assert_eq!(sol.terminal(), &end);
        assert_eq!(sol.tick_len(), 1);
    }

    #[test]
    fn tick_len_counts_sub_steps() {
        let a = vec![VertexId(0)];
        let b = vec![VertexId(1)];
        let c = vec![VertexId(2)];
        let sol = Solution::new(vec![a, b, c]);
        assert_eq!(sol.tick_len(), 2);
        assert_eq!(sol.configurations().len(), 3);
    }

    #[test]
    #[should_panic]
    fn rejects_single_configuration() {
        Solution::new(vec![vec![VertexId(0)]]);
    }
}

// ── PlanningContext ───────────────────────────────────────────────────────────

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn fields_accessible() {
        let grid = corridor(5);
        let starts = vec![VertexId(0), VertexId(1)];
        let goals = vec![VertexId(4), VertexId(3)];
        let ctx = PlanningContext::new(&grid, &starts, &goals, Duration::from_millis(50));
        assert_eq!(ctx.num_agents(), 2);
        assert_eq!(ctx.deadline, Duration::from_millis(50));
    }
}

// ── GreedyStepPlanner ─────────────────────────────────────────────────────────

#[cfg(test)]
mod greedy_tests {
    use super::*;

    #[test]
    fn steps_one_hop_toward_goal() {
        let grid = corridor(5);
        let starts = vec![VertexId(0)];
        let goals = vec![VertexId(4)];
        let ctx = PlanningContext::new(&grid, &starts, &goals, Duration::from_millis(50));
        let sol = GreedyStepPlanner.solve(&ctx).expect("solves");
        assert_eq!(sol.initial(), &starts);
        assert_eq!(sol.terminal(), &[VertexId(1)]);
    }

    #[test]
    fn agent_already_at_goal_stays() {
        let grid = corridor(5);
        let starts = vec![VertexId(2)];
        let goals = vec![VertexId(2)];
        let ctx = PlanningContext::new(&grid, &starts, &goals, Duration::from_millis(50));
        let sol = GreedyStepPlanner.solve(&ctx).expect("solves");
        assert_eq!(sol.terminal(), &[VertexId(2)]);
    }

    #[test]
    fn multiple_agents_advance_independently() {
        let grid = corridor(5);
        let starts = vec![VertexId(0), VertexId(4)];
        let goals = vec![VertexId(4), VertexId(0)];
        let ctx = PlanningContext::new(&grid, &starts, &goals, Duration::from_millis(50));
        let sol = GreedyStepPlanner.solve(&ctx).expect("solves");
        assert_eq!(sol.terminal(), &[VertexId(1), VertexId(3)]);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let grid = corridor(5);
        let starts = vec![VertexId(0), VertexId(1)];
        let goals = vec![VertexId(4)];
        let ctx = PlanningContext::new(&grid, &starts, &goals, Duration::from_millis(50));
        assert!(GreedyStepPlanner.solve(&ctx).is_err());
    }
}

// ── Custom Planner ────────────────────────────────────────────────────────────

#[cfg(test)]
mod custom_planner_tests {
    use crate::error::PlannerResult;

    use super::*;

    /// A planner that never moves anyone.
    struct AlwaysStay;

    impl Planner for AlwaysStay {
        fn solve(&self, ctx: &PlanningContext<'_>) -> PlannerResult<Solution> {
            let cfg = ctx.starts.to_vec();
            Ok(Solution::new(vec![cfg.clone(), cfg]))
        }
    }

    #[test]
    fn custom_planner_used_via_trait_object() {
        let grid = corridor(5);
        let starts = vec![VertexId(0)];
        let goals = vec![VertexId(4)];
        let ctx = PlanningContext::new(&grid, &starts, &goals, Duration::from_millis(50));
        let planner: Box<dyn Planner> = Box::new(AlwaysStay);
        let sol = planner.solve(&ctx).expect("solves");
        assert_eq!(sol.terminal(), &starts);
    }
}
