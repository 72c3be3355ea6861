//! Map file loader.
//!
//! Header lines `type`, `group`, `height`, `width` in any order, then a
//! `map` line, then `group` blank-line-delimited blocks of `height` rows of
//! `width` characters each. `\r` at end-of-line is tolerated.
//!
//! Groups share one coordinate space: the row counter is **not** reset
//! between blocks, so `height` in the header is the grid's total height,
//! not a single block's height (mirrors the reference loader).

use std::io::BufRead;

use mapd_core::GroupId;

use crate::error::{GridError, GridResult};
use crate::network::{GraphType, Grid, GridBuilder, VertexKind};

fn strip_crlf(line: &str) -> &str {
    line.trim_end_matches('\r')
}

fn parse_header_field<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key)?.strip_prefix(' ')
}

/// Parse a map file from any `BufRead` source (a file, or an in-memory
/// cursor in tests).
pub fn load_map(reader: impl BufRead) -> GridResult<Grid> {
    let mut lines = reader.lines();

    let mut graph_type: Option<GraphType> = None;
    let mut groups: Option<u16> = None;
    let mut height: Option<u32> = None;
    let mut width: Option<u32> = None;

    loop {
        let Some(line) = lines.next() else {
            return Err(GridError::Parse("map file ended before `map` line".into()));
        };
        let line = line?;
        let line = strip_crlf(&line);

        if let Some(v) = parse_header_field(line, "type") {
            graph_type = Some(match v {
                "single_port" => GraphType::SinglePort,
                "multi_port" => GraphType::MultiPort,
                other => return Err(GridError::UnknownGraphType(other.to_string())),
            });
        } else if let Some(v) = parse_header_field(line, "group") {
            groups = Some(
                v.parse()
                    .map_err(|_| GridError::Parse(format!("bad group count: {v}")))?,
            );
        } else if let Some(v) = parse_header_field(line, "height") {
            height = Some(
                v.parse()
                    .map_err(|_| GridError::Parse(format!("bad height: {v}")))?,
            );
        } else if let Some(v) = parse_header_field(line, "width") {
            width = Some(
                v.parse()
                    .map_err(|_| GridError::Parse(format!("bad width: {v}")))?,
            );
        } else if line == "map" {
            break;
        }
    }

    let graph_type = graph_type.ok_or(GridError::MissingHeaderField("type"))?;
    let groups = groups.ok_or(GridError::MissingHeaderField("group"))?;
    let height = height.ok_or(GridError::MissingHeaderField("height"))?;
    let width = width.ok_or(GridError::MissingHeaderField("width"))?;

    let mut builder = GridBuilder::new(graph_type, width, height, groups);

    let mut row: u32 = 0;
    let mut group_cnt: u16 = 0;

    for line in lines {
        let line = line?;
        let line = strip_crlf(&line);

        if line.is_empty() {
            group_cnt += 1;
            if group_cnt >= groups {
                break;
            }
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        if chars.len() != width as usize {
            return Err(GridError::RowWidthMismatch {
                row: row as usize,
                got: chars.len(),
                width: width as usize,
            });
        }

        let group = GroupId(group_cnt);
        for (col, &ch) in chars.iter().enumerate() {
            let col = col as u32;
            match ch {
                'T' | '@' => continue,
                '.' => {
                    builder.add_cell(row, col, group, VertexKind::Aisle, false);
                }
                'U' => {
                    builder.add_cell(row, col, group, VertexKind::Aisle, true);
                }
                'C' => {
                    builder.add_cell(row, col, group, VertexKind::CacheCell, false);
                }
                'H' => {
                    builder.add_cell(row, col, group, VertexKind::CargoCell, false);
                }
                other => {
                    return Err(GridError::Parse(format!(
                        "unrecognized map character {other:?} at row {row} col {col}"
                    )))
                }
            }
        }
        row += 1;
    }

    if group_cnt < groups {
        return Err(GridError::GroupCountMismatch {
            declared: groups,
            found: group_cnt,
        });
    }

    Ok(builder.build())
}

/// Convenience wrapper reading directly from a filesystem path.
pub fn load_map_file(path: impl AsRef<std::path::Path>) -> GridResult<Grid> {
    let file = std::fs::File::open(path)?;
    load_map(std::io::BufReader::new(file))
}
