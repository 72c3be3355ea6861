//! Grid representation and builder.
//!
//! # Data layout
//!
//! The grid uses **Compressed Sparse Row (CSR)** format for neighbour
//! adjacency, the same scheme a road network would use for outgoing edges:
//! given a `VertexId v`, its neighbours occupy the slice
//!
//! ```text
//! neighbor_list[ neighbor_start[v] .. neighbor_start[v+1] ]
//! ```
//!
//! Wall cells never get a `Vertex`; the planar array holds `None` for them.
//! Vertices are otherwise stored in one owning arena (`Vec<Vertex>`) and
//! neighbour lists hold `VertexId`s into that arena — the graph may be
//! cyclic, so there is no attempt at reference-counted ownership.

use mapd_core::{GroupId, VertexId};

/// What a non-wall cell is used for.
///
/// `CacheCell` and `CargoCell` are collectively "cargo cells" in the map
/// legend and share a reachability rule: only enterable from an `Aisle`
/// neighbour, never from another cargo cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexKind {
    Aisle,
    CacheCell,
    CargoCell,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphType {
    SinglePort,
    MultiPort,
}

/// A grid cell: a stable id, a planar index, a group tag, and a kind.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub id: VertexId,
    pub group: GroupId,
    pub row: u32,
    pub col: u32,
    pub kind: VertexKind,
    /// Set for aisle cells marked `U` in the map — unloading ports are
    /// aisle cells, not a distinct reachability class.
    pub is_port: bool,
}

impl Vertex {
    #[inline]
    pub fn is_cargo(&self) -> bool {
        matches!(self.kind, VertexKind::CacheCell | VertexKind::CargoCell)
    }
}

/// The grid: an arena of vertices plus CSR neighbour adjacency.
///
/// Groups share one coordinate space — a vertex in group `g`'s last row can
/// be a physical neighbour of a vertex in group `g+1`'s first row, and the
/// neighbour computation below does not special-case group boundaries; it
/// is purely a function of wall/cargo adjacency (mirrors the reference
/// grid-loader, which never resets its row counter between map blocks).
pub struct Grid {
    pub graph_type: GraphType,
    pub width: u32,
    pub height: u32,
    pub groups: u16,

    pub vertices: Vec<Vertex>,
    /// Planar index (`row * width + col`) to vertex, `None` for walls.
    planar: Vec<Option<VertexId>>,

    /// CSR row pointer. Length = `vertices.len() + 1`.
    neighbor_start: Vec<u32>,
    neighbor_list: Vec<VertexId>,

    pub ports: Vec<VertexId>,
    pub cache_cells_by_group: Vec<Vec<VertexId>>,
    pub cargo_cells_by_group: Vec<Vec<VertexId>>,
}

impl Grid {
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    #[inline]
    pub fn at(&self, row: u32, col: u32) -> Option<VertexId> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.planar[(row * self.width + col) as usize]
    }

    /// Iterator over the `VertexId`s reachable in one step from `v`.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let start = self.neighbor_start[v.index()] as usize;
        let end = self.neighbor_start[v.index() + 1] as usize;
        self.neighbor_list[start..end].iter().copied()
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

pub struct GridBuilder {
    graph_type: GraphType,
    width: u32,
    height: u32,
    groups: u16,
    vertices: Vec<Vertex>,
    planar: Vec<Option<VertexId>>,
    ports: Vec<VertexId>,
    cache_cells_by_group: Vec<Vec<VertexId>>,
    cargo_cells_by_group: Vec<Vec<VertexId>>,
}

impl GridBuilder {
    pub fn new(graph_type: GraphType, width: u32, height: u32, groups: u16) -> Self {
        Self {
            graph_type,
            width,
            height,
            groups,
            vertices: Vec::new(),
            planar: vec![None; (width * height) as usize],
            ports: Vec::new(),
            cache_cells_by_group: vec![Vec::new(); groups as usize],
            cargo_cells_by_group: vec![Vec::new(); groups as usize],
        }
    }

    /// Place a non-wall cell at `(row, col)` belonging to `group`.
    pub fn add_cell(
        &mut self,
        row: u32,
        col: u32,
        group: GroupId,
        kind: VertexKind,
        is_port: bool,
    ) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex {
            id,
            group,
            row,
            col,
            kind,
            is_port,
        });
        self.planar[(row * self.width + col) as usize] = Some(id);

        if is_port {
            self.ports.push(id);
        }
        match kind {
            VertexKind::CacheCell => self.cache_cells_by_group[group.index()].push(id),
            VertexKind::CargoCell => self.cargo_cells_by_group[group.index()].push(id),
            VertexKind::Aisle => {}
        }
        id
    }

    /// Compute CSR neighbour adjacency and consume the builder.
    ///
    /// A cargo cell (`CacheCell`/`CargoCell`) only gets an edge to an
    /// adjacent aisle cell; an aisle cell gets an edge to any adjacent
    /// non-wall cell, cargo or aisle.
    pub fn build(self) -> Grid {
        let n = self.vertices.len();
        let mut adj: Vec<Vec<VertexId>> = vec![Vec::new(); n];

        for row in 0..self.height {
            for col in 0..self.width {
                let Some(v_id) = self.planar[(row * self.width + col) as usize] else {
                    continue;
                };
                let v = &self.vertices[v_id.index()];

                let candidates = [
                    (col > 0).then(|| (row, col - 1)),
                    (col + 1 < self.width).then(|| (row, col + 1)),
                    (row + 1 < self.height).then(|| (row + 1, col)),
                    (row > 0).then(|| (row - 1, col)),
                ];

                for cand in candidates.into_iter().flatten() {
                    let Some(u_id) = self.planar[(cand.0 * self.width + cand.1) as usize] else {
                        continue;
                    };
                    let u = &self.vertices[u_id.index()];
                    if v.is_cargo() {
                        if !u.is_cargo() {
                            adj[v_id.index()].push(u_id);
                        }
                    } else {
                        adj[v_id.index()].push(u_id);
                    }
                }
            }
        }

        let mut neighbor_start = Vec::with_capacity(n + 1);
        let mut neighbor_list = Vec::new();
        neighbor_start.push(0u32);
        for list in &adj {
            neighbor_list.extend_from_slice(list);
            neighbor_start.push(neighbor_list.len() as u32);
        }

        Grid {
            graph_type: self.graph_type,
            width: self.width,
            height: self.height,
            groups: self.groups,
            vertices: self.vertices,
            planar: self.planar,
            neighbor_start,
            neighbor_list,
            ports: self.ports,
            cache_cells_by_group: self.cache_cells_by_group,
            cargo_cells_by_group: self.cargo_cells_by_group,
        }
    }
}
