//! The per-group cache substrate.
//!
//! All operations act on a single group; the slot vectors are private to
//! that group (one `Cache` instance per group, held by `Instance`). Lock
//! counters, not mutexes — concurrency here is logical, coordinated by a
//! single-threaded release/reserve sweep over all agents.

use rustc_hash::FxHashMap;

use mapd_core::{CargoId, SimRng, SlotId, VertexId};

use crate::error::{CacheError, CacheResult};
use crate::policy::EvictionPolicy;

/// Outcome of [`Cache::try_read`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Hit { slot: SlotId, cell: VertexId },
    Miss,
}

/// Outcome of [`Cache::try_insert`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Reserved { slot: SlotId, cell: VertexId },
    Rejected,
}

/// Outcome of [`Cache::try_gc`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GcOutcome {
    Reserved {
        slot: SlotId,
        cell: VertexId,
        garbage: CargoId,
    },
    Rejected,
}

/// A single group's associative cache over its physical cache cells.
pub struct Cache {
    policy: EvictionPolicy,
    agent_capacity: u32,

    cell: Vec<VertexId>,
    cargo: Vec<CargoId>,
    incoming: Vec<CargoId>,
    remaining: Vec<u32>,
    get_lock: Vec<u32>,
    insert_or_clear_lock: Vec<bool>,
    is_empty: Vec<bool>,
    lru_stamp: Vec<u64>,
    fifo_stamp: Vec<u64>,

    lru_counter: u64,
    fifo_counter: u64,

    cell_to_slot: FxHashMap<VertexId, SlotId>,
}

impl Cache {
    /// Build a cache over `cells`, one slot per cell. `is_empty` starts
    /// `true` for every slot (all locks and counts start at zero).
    pub fn new(cells: Vec<VertexId>, policy: EvictionPolicy, agent_capacity: u32) -> Self {
        let k = cells.len();
        let cell_to_slot = cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, SlotId(i as u32)))
            .collect();
        Self {
            policy,
            agent_capacity,
            cell: cells,
            cargo: vec![CargoId::INVALID; k],
            incoming: vec![CargoId::INVALID; k],
            remaining: vec![0; k],
            get_lock: vec![0; k],
            insert_or_clear_lock: vec![false; k],
            is_empty: vec![true; k],
            lru_stamp: vec![0; k],
            fifo_stamp: vec![0; k],
            lru_counter: 0,
            fifo_counter: 0,
            cell_to_slot,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.cell.len()
    }

    /// Seed a slot's raw state directly. Only compiled for tests, to exercise
    /// exact `lru_stamp`/`fifo_stamp` starting values rather than having to
    /// replay a sequence of operations to reach them.
    #[cfg(test)]
    pub(crate) fn seed_slot(
        &mut self,
        slot: SlotId,
        cargo: CargoId,
        remaining: u32,
        lru_stamp: u64,
        fifo_stamp: u64,
    ) {
        let i = slot.index();
        self.cargo[i] = cargo;
        self.remaining[i] = remaining;
        self.lru_stamp[i] = lru_stamp;
        self.fifo_stamp[i] = fifo_stamp;
        self.recompute_is_empty(i);
    }

    pub fn cell_of(&self, slot: SlotId) -> VertexId {
        self.cell[slot.index()]
    }

    fn slot_for_cell(&self, cell: VertexId) -> CacheResult<SlotId> {
        self.cell_to_slot
            .get(&cell)
            .copied()
            .ok_or(CacheError::NotACacheCell(cell))
    }

    fn stamp(&mut self, slot: SlotId, is_write: bool) {
        let i = slot.index();
        if self.policy.touches_lru(is_write) {
            self.lru_counter += 1;
            self.lru_stamp[i] = self.lru_counter;
        }
        if self.policy.touches_fifo(is_write) {
            self.fifo_counter += 1;
            self.fifo_stamp[i] = self.fifo_counter;
        }
    }

    fn recompute_is_empty(&mut self, i: usize) {
        self.is_empty[i] =
            self.remaining[i] == 0 && self.get_lock[i] == 0 && !self.insert_or_clear_lock[i];
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Pure read, no locks taken. Used by `GoalStream`'s look-ahead reorder.
    pub fn look_ahead_hit(&self, cargo: CargoId) -> bool {
        (0..self.cell.len()).any(|i| {
            self.cargo[i] == cargo && self.remaining[i] > 0 && !self.insert_or_clear_lock[i]
        })
    }

    pub fn try_read(&mut self, cargo: CargoId) -> ReadOutcome {
        let Some(i) = (0..self.cell.len()).find(|&i| {
            self.cargo[i] == cargo && self.remaining[i] > 0 && !self.insert_or_clear_lock[i]
        }) else {
            tracing::debug!(?cargo, "cache read miss");
            return ReadOutcome::Miss;
        };

        self.get_lock[i] += 1;
        let slot = SlotId(i as u32);
        self.stamp(slot, false);
        self.remaining[i] -= 1;
        self.recompute_is_empty(i);

        tracing::debug!(?cargo, slot = i, "cache read hit");
        ReadOutcome::Hit {
            slot,
            cell: self.cell[i],
        }
    }

    /// Called when an agent arrives at a warehouse cargo cell holding
    /// `cargo`. Avoids duplicate caches: rejects if `cargo` is already
    /// cached or mid-insert anywhere in this group.
    ///
    /// The identity check matches on `cargo[i] == cargo` alone, regardless of
    /// `remaining` — a slot a `commit_read` has just drained to
    /// `remaining == 0` still carries that cargo's identity until some other
    /// cargo is later inserted into that exact slot, so the same cargo stays
    /// rejected here in the meantime rather than being treated as absent.
    pub fn try_insert(&mut self, cargo: CargoId) -> InsertOutcome {
        let already_present =
            (0..self.cell.len()).any(|i| self.cargo[i] == cargo || self.incoming[i] == cargo);
        if already_present {
            return InsertOutcome::Rejected;
        }

        let Some(i) = (0..self.cell.len()).find(|&i| self.is_empty[i]) else {
            return InsertOutcome::Rejected;
        };

        self.insert_or_clear_lock[i] = true;
        self.incoming[i] = cargo;
        let slot = SlotId(i as u32);
        self.stamp(slot, true);
        self.is_empty[i] = false;

        InsertOutcome::Reserved {
            slot,
            cell: self.cell[i],
        }
    }

    /// Called when `try_insert` failed and the cache is saturated (no empty
    /// slots). Selects a victim via the eviction policy among slots with no
    /// outstanding reservation or reader.
    pub fn try_gc(&mut self, cargo: CargoId, rng: &mut SimRng) -> GcOutcome {
        if self.is_empty.iter().any(|&e| e) {
            return GcOutcome::Rejected;
        }

        let candidates: Vec<(u32, u64, u64)> = (0..self.cell.len())
            .filter(|&i| !self.insert_or_clear_lock[i] && self.get_lock[i] == 0)
            .map(|i| (i as u32, self.lru_stamp[i], self.fifo_stamp[i]))
            .collect();

        let Some(victim) = self.policy.select(&candidates, rng) else {
            tracing::warn!(?cargo, "no eviction candidate, gc rejected");
            return GcOutcome::Rejected;
        };

        let i = victim as usize;
        self.insert_or_clear_lock[i] = true;
        let slot = SlotId(victim);
        self.stamp(slot, true);
        let garbage = self.cargo[i];

        tracing::debug!(?cargo, ?garbage, slot = i, "cache eviction reserved");
        GcOutcome::Reserved {
            slot,
            cell: self.cell[i],
            garbage,
        }
    }

    /// Called when an agent reaches `cell` carrying `cargo` reserved via
    /// `try_insert`. `remaining` is set to `agent_capacity - 1`: the
    /// delivering agent itself consumes one copy by continuing to the port.
    pub fn commit_insert(&mut self, cargo: CargoId, cell: VertexId) -> CacheResult<()> {
        let slot = self.slot_for_cell(cell)?;
        let i = slot.index();

        if self.incoming[i] != cargo {
            return Err(CacheError::IncomingMismatch { cargo, cell });
        }
        if self.cargo[i] == cargo && self.remaining[i] > 0 {
            return Err(CacheError::AlreadyCached(cargo));
        }

        self.cargo[i] = cargo;
        self.remaining[i] = self.agent_capacity.saturating_sub(1);
        self.incoming[i] = CargoId::INVALID;
        self.insert_or_clear_lock[i] = false;
        self.is_empty[i] = false;
        Ok(())
    }

    /// Called when an agent reaches a cell reserved via `try_read`.
    pub fn commit_read(&mut self, cell: VertexId) -> CacheResult<()> {
        let slot = self.slot_for_cell(cell)?;
        let i = slot.index();
        if self.get_lock[i] == 0 {
            return Err(CacheError::NoOutstandingReadLock(cell));
        }
        self.get_lock[i] -= 1;
        if self.get_lock[i] == 0 && self.remaining[i] == 0 {
            self.is_empty[i] = true;
        }
        Ok(())
    }

    /// Called when an agent reaches a cell reserved via `try_gc`.
    pub fn commit_clear(&mut self, cell: VertexId) -> CacheResult<()> {
        let slot = self.slot_for_cell(cell)?;
        let i = slot.index();
        if !self.insert_or_clear_lock[i] {
            return Err(CacheError::NoOutstandingClearLock(cell));
        }
        self.insert_or_clear_lock[i] = false;
        self.is_empty[i] = true;
        self.remaining[i] = 0;
        self.cargo[i] = CargoId::INVALID;
        Ok(())
    }

    // ── Invariant checks (also usable by callers that want to assert the
    // invariants hold at a tick boundary) ─────────────────────────────────

    pub fn get_lock_of(&self, cell: VertexId) -> CacheResult<u32> {
        Ok(self.get_lock[self.slot_for_cell(cell)?.index()])
    }

    pub fn insert_or_clear_lock_of(&self, cell: VertexId) -> CacheResult<bool> {
        Ok(self.insert_or_clear_lock[self.slot_for_cell(cell)?.index()])
    }

    pub fn is_empty_of(&self, cell: VertexId) -> CacheResult<bool> {
        Ok(self.is_empty[self.slot_for_cell(cell)?.index()])
    }

    /// Checks the invariant `is_empty[i] <=> remaining==0 && get_lock==0 &&
    /// !insert_or_clear_lock[i]` for every slot.
    pub fn check_is_empty_invariant(&self) -> bool {
        (0..self.cell.len()).all(|i| {
            self.is_empty[i]
                == (self.remaining[i] == 0 && self.get_lock[i] == 0 && !self.insert_or_clear_lock[i])
        })
    }
}
