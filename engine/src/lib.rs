/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* Edges do not wrap: a cell on the border simply has fewer neighbors.
*/

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::Cell;
pub use error::{CellRef, GridError};
pub use grid::Grid;
