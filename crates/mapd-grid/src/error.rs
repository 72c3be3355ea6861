//! Grid-subsystem error type.

use thiserror::Error;

/// Map file missing or malformed. Reported at startup; the process
/// terminates with a non-zero exit.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("I/O error reading map file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed map file: {0}")]
    Parse(String),

    #[error("unknown graph type {0:?}, expected single_port or multi_port")]
    UnknownGraphType(String),

    #[error("map header missing required field `{0}`")]
    MissingHeaderField(&'static str),

    #[error("map body row {row} has length {got}, expected width {width}")]
    RowWidthMismatch { row: usize, got: usize, width: usize },

    #[error("map declared {declared} groups but body has {found} blank-line-delimited blocks")]
    GroupCountMismatch { declared: u16, found: u16 },
}

pub type GridResult<T> = Result<T, GridError>;
