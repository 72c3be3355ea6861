//! `mapd-grid` — grid/graph construction and neighbour computation.
//!
//! Specified only at its interface per the purpose statement: this crate
//! builds the `Grid` (an arena of vertices plus CSR neighbour adjacency) from
//! a map file and exposes neighbour queries; it does not plan paths.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|--------------------------------------------------------|
//! | [`network`] | `Grid` (CSR arena), `GridBuilder`, `Vertex`, `VertexKind` |
//! | [`parser`]  | `load_map`, `load_map_file`                           |
//! | [`error`]   | `GridError`, `GridResult<T>`                          |

pub mod error;
pub mod network;
pub mod parser;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use network::{GraphType, Grid, GridBuilder, Vertex, VertexKind};
pub use parser::{load_map, load_map_file};
