//! `GoalStream`: the per-group demand queue and its cache-aware look-ahead
//! reorder.

use std::collections::VecDeque;

use mapd_cache::Cache;
use mapd_core::{CargoId, SimRng};

use crate::generator::{generate_mk, generate_real, generate_zhang};

/// A group's cargo demand queue `Q_g` paired with per-entry delay counters
/// `D_g`.
///
/// `cargo_pool` is `C_g`, the set of deliverable cargo identities for this
/// group; it backs the "queue ran dry" fallback in [`GoalStream::next_goal`].
pub struct GoalStream {
    cargo_pool: Vec<CargoId>,
    queue: VecDeque<CargoId>,
    delay: VecDeque<u32>,
}

impl GoalStream {
    /// Builds a queue of `length` goals using the MK(m, k) bounded-diversity
    /// generator.
    pub fn from_mk(
        cargo_pool: Vec<CargoId>,
        length: usize,
        m: usize,
        k: usize,
        rng: &mut SimRng,
    ) -> Self {
        let goals = generate_mk(&cargo_pool, length, m, k, rng);
        Self::from_goals(cargo_pool, goals)
    }

    /// Builds a queue of `length` goals using the Zhang A/B/C harmonic
    /// generator.
    pub fn from_zhang(cargo_pool: Vec<CargoId>, length: usize, rng: &mut SimRng) -> Self {
        let goals = generate_zhang(&cargo_pool, length, rng);
        Self::from_goals(cargo_pool, goals)
    }

    /// Builds a queue of `length` goals drawn from an empirical frequency
    /// table (one frequency per `cargo_pool` entry, same order — see
    /// [`crate::loader::load_real_distribution`]).
    pub fn from_real(
        cargo_pool: Vec<CargoId>,
        frequencies: &[f64],
        length: usize,
        rng: &mut SimRng,
    ) -> Self {
        let goals = generate_real(&cargo_pool, frequencies, length, rng);
        Self::from_goals(cargo_pool, goals)
    }

    fn from_goals(cargo_pool: Vec<CargoId>, goals: Vec<CargoId>) -> Self {
        let len = goals.len();
        Self {
            cargo_pool,
            queue: goals.into(),
            delay: std::iter::repeat(0u32).take(len).collect(),
        }
    }

    /// Test/seed-scenario constructor: build directly from an explicit queue
    /// and matching delay vector, for scenarios that specify queue contents
    /// directly rather than a generator run.
    #[cfg(test)]
    pub(crate) fn from_parts(cargo_pool: Vec<CargoId>, queue: Vec<CargoId>, delay: Vec<u32>) -> Self {
        assert_eq!(queue.len(), delay.len());
        Self {
            cargo_pool,
            queue: queue.into(),
            delay: delay.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn queue_snapshot(&self) -> Vec<CargoId> {
        self.queue.iter().copied().collect()
    }

    #[cfg(test)]
    pub(crate) fn delay_snapshot(&self) -> Vec<u32> {
        self.delay.iter().copied().collect()
    }

    /// Pops the next goal for this group, reordering around a look-ahead
    /// window of cache hits and starved entries.
    ///
    /// 1. Pops up to `look_ahead` heads from the queue into a scratch buffer.
    /// 2. Scans them in order for the first entry that is either a cache hit
    ///    (per [`Cache::look_ahead_hit`]) or has waited `delay_deadline`
    ///    ticks or more.
    /// 3. That entry is the selected goal.
    /// 4. The rest are pushed back to the front of the queue, in their
    ///    original relative order, each with delay incremented by one.
    /// 5. If the queue was empty, a uniformly random cargo from the group's
    ///    pool is returned instead.
    pub fn next_goal(
        &mut self,
        look_ahead: usize,
        delay_deadline: u32,
        cache: &Cache,
        rng: &mut SimRng,
    ) -> CargoId {
        if self.queue.is_empty() {
            return self.cargo_pool[rng.gen_range(0..self.cargo_pool.len())];
        }

        let take = look_ahead.max(1).min(self.queue.len());
        let mut temp_goal = Vec::with_capacity(take);
        let mut temp_delay = Vec::with_capacity(take);
        for _ in 0..take {
            temp_goal.push(self.queue.pop_front().expect("take <= queue.len()"));
            temp_delay.push(self.delay.pop_front().expect("take <= queue.len()"));
        }

        let selected_idx = temp_goal
            .iter()
            .zip(temp_delay.iter())
            .position(|(&goal, &delay)| cache.look_ahead_hit(goal) || delay >= delay_deadline)
            .unwrap_or(0);

        let selected = temp_goal[selected_idx];

        let remaining: Vec<(CargoId, u32)> = temp_goal
            .iter()
            .zip(temp_delay.iter())
            .enumerate()
            .filter(|&(i, _)| i != selected_idx)
            .map(|(_, (&goal, &delay))| (goal, delay + 1))
            .collect();

        for &(goal, delay) in remaining.iter().rev() {
            self.queue.push_front(goal);
            self.delay.push_front(delay);
        }

        selected
    }
}
