//! `mapd-core` — foundational types for the cache-aware MAPD controller.
//!
//! This crate is a dependency of every other `mapd-*` crate. It intentionally
//! has no `mapd-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `VertexId`, `GroupId`, `CargoId`, `SlotId`     |
//! | [`time`]   | `Tick`                                                    |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng` (group/run-level)        |
//! | [`config`] | `Config`, `CacheType`, `GoalsGen` — the Configuration Surface |
//! | [`error`]  | `ConfigError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CacheType, Config, GoalsGen};
pub use error::{ConfigError, CoreResult};
pub use ids::{AgentId, CargoId, GroupId, SlotId, VertexId};
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
