//! `mapd-cache` — the cache substrate: a grouped, lock-protected associative
//! store of cargo identities pinned to physical cache cells.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|----------------------------------------------------------|
//! | [`cache`]  | `Cache`, `ReadOutcome`, `InsertOutcome`, `GcOutcome`  |
//! | [`policy`] | `EvictionPolicy` (LRU / FIFO / Random, tagged dispatch) |
//! | [`error`]  | `CacheError`, `CacheResult<T>`                        |

pub mod cache;
pub mod error;
pub mod policy;


pub use cache::{Cache, GcOutcome, InsertOutcome, ReadOutcome};
pub use error::{CacheError, CacheResult};
pub use policy::EvictionPolicy;
