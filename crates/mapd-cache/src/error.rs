//! Cache-subsystem error type.

use mapd_core::{CargoId, VertexId};
use thiserror::Error;

/// An assert-grade precondition violated by the caller. Fatal — indicates a
/// bug in `AgentState`, not a recoverable condition.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cell {0} is not a cache cell of this group")]
    NotACacheCell(VertexId),

    #[error("commit_insert called for cargo {cargo} but incoming[{cell}] != {cargo}")]
    IncomingMismatch { cargo: CargoId, cell: VertexId },

    #[error("commit_insert called for cargo {0} which is already cached")]
    AlreadyCached(CargoId),

    #[error("commit_read/commit_clear called on slot at {0} with get_lock == 0")]
    NoOutstandingReadLock(VertexId),

    #[error("commit_clear called on slot at {0} with insert_or_clear_lock == 0")]
    NoOutstandingClearLock(VertexId),
}

pub type CacheResult<T> = Result<T, CacheError>;
