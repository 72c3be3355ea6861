//! `mapd-goals` — the per-group demand queue, `GoalStream`: three
//! construction-time generators (MK bounded-diversity, Zhang harmonic A/B/C,
//! Real empirical frequencies) plus the cache-aware look-ahead reorder.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`generator`]  | `generate_mk`, `generate_zhang`, `generate_real`, `zhang_probabilities` |
//! | [`stream`]     | `GoalStream`, the `next_goal` look-ahead reorder       |
//! | [`loader`]     | `load_real_distribution`, CSV frequency loading        |
//! | [`error`]      | `GoalsError`, `GoalsResult<T>`                         |

pub mod error;
pub mod generator;
pub mod loader;
pub mod stream;

#[cfg(test)]
mod tests;

pub use error::{GoalsError, GoalsResult};
pub use generator::{generate_mk, generate_real, generate_zhang, zhang_probabilities};
pub use loader::{load_real_distribution, load_real_distribution_reader};
pub use stream::GoalStream;
