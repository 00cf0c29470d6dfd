use std::fmt;

use thiserror::Error;

/// Location of a cell as passed in by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRef {
    Index(usize),
    Coords { row: usize, col: usize },
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRef::Index(index) => write!(f, "index {index}"),
            CellRef::Coords { row, col } => write!(f, "({row}, {col})"),
        }
    }
}

/// Errors raised by [`Grid`](crate::Grid) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("cell {0} is outside the grid")]
    IndexOutOfRange(CellRef),
    #[error("grid has not been populated")]
    NotBuilt,
}
