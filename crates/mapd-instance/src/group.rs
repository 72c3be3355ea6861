//! Per-group bundle: one `Cache`, one `GoalStream`, and the warehouse/port
//! cells that belong to it. Each group owns an independent cache, cargo
//! pool, unloading port, and goal stream.

use mapd_cache::Cache;
use mapd_core::VertexId;
use mapd_goals::GoalStream;

pub struct GroupState {
    /// Warehouse cargo cells, indexed by `CargoId` — dense and stable, set
    /// once at construction from `Grid::cargo_cells_by_group`.
    pub cargo_cells: Vec<VertexId>,
    pub port: VertexId,
    pub cache: Cache,
    pub goals: GoalStream,
}
