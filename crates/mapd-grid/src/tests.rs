//! Unit tests for map parsing and neighbour computation.

use std::io::Cursor;

use crate::network::VertexKind;
use crate::parser::load_map;

fn single_group_map() -> &'static str {
    "type single_port\n\
     group 1\n\
     height 3\n\
     width 5\n\
     map\n\
     .....\n\
     .HCU.\n\
     .....\n\
     \n"
}

fn two_group_map() -> &'static str {
    // group 0 occupies rows 0-1, group 1 occupies rows 2-3 (shared coordinate space).
    "type multi_port\n\
     group 2\n\
     height 4\n\
     width 3\n\
     map\n\
     .H.\n\
     .U.\n\
     \n\
     .C.\n\
     .U.\n\
     \n"
}

#[cfg(test)]
mod parsing {
    use super::*;

    #[test]
    fn header_and_dimensions() {
        let grid = load_map(Cursor::new(single_group_map())).unwrap();
        assert_eq!(grid.width, 5);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.groups, 1);
    }

    #[test]
    fn walls_get_no_vertex() {
        let grid = load_map(Cursor::new(
            "type single_port\ngroup 1\nheight 1\nwidth 3\nmap\nT.T\n\n",
        ))
        .unwrap();
        assert!(grid.at(0, 0).is_none());
        assert!(grid.at(0, 1).is_some());
        assert!(grid.at(0, 2).is_none());
    }

    #[test]
    fn kinds_assigned_from_legend() {
        let grid = load_map(Cursor::new(single_group_map())).unwrap();
        let h = grid.vertex(grid.at(1, 1).unwrap());
        let c = grid.vertex(grid.at(1, 2).unwrap());
        let u = grid.vertex(grid.at(1, 3).unwrap());
        let aisle = grid.vertex(grid.at(0, 0).unwrap());

        assert_eq!(h.kind, VertexKind::CargoCell);
        assert!(h.is_cargo());
        assert_eq!(c.kind, VertexKind::CacheCell);
        assert!(c.is_cargo());
        assert_eq!(u.kind, VertexKind::Aisle);
        assert!(u.is_port);
        assert!(!u.is_cargo());
        assert!(!aisle.is_port);
    }

    #[test]
    fn rejects_row_width_mismatch() {
        let err = load_map(Cursor::new(
            "type single_port\ngroup 1\nheight 1\nwidth 5\nmap\n...\n\n",
        ));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_unknown_graph_type() {
        let err = load_map(Cursor::new(
            "type triple_port\ngroup 1\nheight 1\nwidth 1\nmap\n.\n\n",
        ));
        assert!(err.is_err());
    }

    #[test]
    fn tolerates_crlf() {
        let text = "type single_port\r\ngroup 1\r\nheight 1\r\nwidth 1\r\nmap\r\n.\r\n\r\n";
        let grid = load_map(Cursor::new(text)).unwrap();
        assert_eq!(grid.width, 1);
        assert!(grid.at(0, 0).is_some());
    }
}

#[cfg(test)]
mod neighbours {
    use super::*;

    #[test]
    fn cargo_cell_excludes_other_cargo_neighbours() {
        let grid = load_map(Cursor::new(single_group_map())).unwrap();
        let h_id = grid.at(1, 1).unwrap();
        let neighbors: Vec<_> = grid.neighbors(h_id).collect();
        // H at (1,1): left (1,0) aisle, up (0,1) aisle, down (2,1) aisle — 3.
        // right (1,2) is C, a cargo cell, excluded.
        assert_eq!(neighbors.len(), 3);
        assert!(!neighbors.contains(&grid.at(1, 2).unwrap()));
    }

    #[test]
    fn aisle_cell_includes_cargo_neighbours() {
        let grid = load_map(Cursor::new(single_group_map())).unwrap();
        let aisle_id = grid.at(1, 0).unwrap();
        let neighbors: Vec<_> = grid.neighbors(aisle_id).collect();
        // (1,0): right (1,1)=H, up (0,0), down (2,0) — 3.
        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.contains(&grid.at(1, 1).unwrap()));
    }

    #[test]
    fn cache_cell_reaches_port_through_aisle_rule() {
        let grid = load_map(Cursor::new(single_group_map())).unwrap();
        let c_id = grid.at(1, 2).unwrap();
        let neighbors: Vec<_> = grid.neighbors(c_id).collect();
        // (1,2): left (1,1)=H cargo excluded, right (1,3)=U aisle included,
        // up (0,2) aisle, down (2,2) aisle — 3.
        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.contains(&grid.at(1, 3).unwrap()));
        assert!(!neighbors.contains(&grid.at(1, 1).unwrap()));
    }
}

#[cfg(test)]
mod groups {
    use super::*;

    #[test]
    fn groups_share_one_coordinate_space() {
        let grid = load_map(Cursor::new(two_group_map())).unwrap();
        assert_eq!(grid.groups, 2);

        let g0_cargo = grid.vertex(grid.at(0, 1).unwrap());
        let g1_cache = grid.vertex(grid.at(2, 1).unwrap());
        assert_eq!(g0_cargo.group.0, 0);
        assert_eq!(g1_cache.group.0, 1);

        // Group 0's port (row 1) and group 1's cache cell (row 2) are
        // physically adjacent and connected despite the group boundary.
        let g0_port = grid.at(1, 1).unwrap();
        let neighbors: Vec<_> = grid.neighbors(g0_port).collect();
        assert!(neighbors.contains(&grid.at(2, 1).unwrap()));
    }

    #[test]
    fn cache_and_cargo_cells_bucketed_per_group() {
        let grid = load_map(Cursor::new(two_group_map())).unwrap();
        assert_eq!(grid.cargo_cells_by_group[0].len(), 1);
        assert_eq!(grid.cache_cells_by_group[1].len(), 1);
        assert!(grid.cache_cells_by_group[0].is_empty());
    }

    #[test]
    fn ports_collected_regardless_of_group() {
        let grid = load_map(Cursor::new(two_group_map())).unwrap();
        assert_eq!(grid.ports.len(), 2);
    }
}
