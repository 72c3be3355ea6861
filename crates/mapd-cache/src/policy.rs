//! Eviction policy dispatch.
//!
//! The three policies share one signature — `select(candidates) ->
//! Option<SlotId>` and `stamp(slot, is_write)` — and are dispatched from
//! tagged variants rather than through a trait object or
//! inheritance hierarchy: there are exactly three policies, known at
//! construction time, and a `match` is cheaper and more legible than a
//! `Box<dyn Policy>` indirection for a per-tick hot path.

use mapd_core::SimRng;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EvictionPolicy {
    Lru,
    Fifo,
    Random,
}

impl EvictionPolicy {
    /// Pick a victim among `candidates` (slot index, lru_stamp, fifo_stamp
    /// triples). Ties go to the lowest slot index.
    pub(crate) fn select(
        self,
        candidates: &[(u32, u64, u64)],
        rng: &mut SimRng,
    ) -> Option<u32> {
        match self {
            EvictionPolicy::Lru => candidates
                .iter()
                .min_by_key(|&&(idx, lru, _fifo)| (lru, idx))
                .map(|&(idx, _, _)| idx),
            EvictionPolicy::Fifo => candidates
                .iter()
                .min_by_key(|&&(idx, _lru, fifo)| (fifo, idx))
                .map(|&(idx, _, _)| idx),
            EvictionPolicy::Random => {
                if candidates.is_empty() {
                    None
                } else {
                    let i = rng.gen_range(0..candidates.len());
                    Some(candidates[i].0)
                }
            }
        }
    }

    /// Whether this policy's stamp advances for the given event kind.
    /// LRU advances on both reads and writes; FIFO only on writes; Random
    /// never touches a stamp.
    #[inline]
    pub(crate) fn touches_lru(self, _is_write: bool) -> bool {
        matches!(self, EvictionPolicy::Lru)
    }

    #[inline]
    pub(crate) fn touches_fifo(self, is_write: bool) -> bool {
        matches!(self, EvictionPolicy::Fifo) && is_write
    }
}
