use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cell::Cell;
use crate::error::{CellRef, GridError};

/// Fixed-size board of cells stored row-major (`row * width + col`).
///
/// A grid is either unbuilt (no cells) or fully built with every neighbor
/// list wired. Populating swaps in a completely new cell set at once.
///
/// Two grids are equal when their dimensions, cell liveness, adjacency and
/// generation counter match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    generation: u64,
}

impl Grid {
    /// Creates an unbuilt grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tears down any existing cells and builds a `width` x `height` board,
    /// asking `initializer(row, col)` for the starting liveness of each cell.
    ///
    /// On `InvalidDimension`, including a cell count that does not fit in
    /// memory, the current board is left untouched.
    pub fn populate<F>(
        &mut self,
        width: usize,
        height: usize,
        mut initializer: F,
    ) -> Result<(), GridError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let invalid = || GridError::InvalidDimension { width, height };
        if width < 1 || height < 1 {
            return Err(invalid());
        }
        let len = width.checked_mul(height).ok_or_else(invalid)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid())?;
        for row in 0..height {
            for col in 0..width {
                let mut cell = Cell::new();
                cell.set_alive(initializer(row, col));
                cells.push(cell);
            }
        }

        for row in 0..height {
            // Clamp rows by height and columns by width; edges don't wrap.
            let top = row.saturating_sub(1);
            let bottom = (row + 1).min(height - 1);
            for col in 0..width {
                let left = col.saturating_sub(1);
                let right = (col + 1).min(width - 1);

                let cell = &mut cells[row * width + col];
                for neighbor_row in top..=bottom {
                    for neighbor_col in left..=right {
                        if neighbor_row == row && neighbor_col == col {
                            // Skip the current cell
                            continue;
                        }
                        cell.add_neighbor(neighbor_row * width + neighbor_col);
                    }
                }
            }
        }

        self.width = width;
        self.height = height;
        self.cells = cells;
        self.generation = 0;

        log::debug!(
            "populated {}x{} grid, {} alive",
            width,
            height,
            self.population()
        );
        Ok(())
    }

    /// Builds the board with an unbiased coin flip per cell drawn from `rng`.
    pub fn populate_random<R>(
        &mut self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<(), GridError>
    where
        R: Rng + ?Sized,
    {
        self.populate(width, height, |_, _| rng.random_bool(0.5))
    }

    /// Like [`Grid::populate_random`] with a ChaCha generator. `None` seeds
    /// from the operating system.
    pub fn populate_seeded(
        &mut self,
        width: usize,
        height: usize,
        seed: Option<u64>,
    ) -> Result<(), GridError> {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        self.populate_random(width, height, &mut rng)
    }

    /// Re-rolls every cell's liveness in place. Adjacency is kept.
    pub fn randomize<R>(&mut self, rng: &mut R) -> Result<(), GridError>
    where
        R: Rng + ?Sized,
    {
        self.ensure_built()?;
        for cell in &mut self.cells {
            cell.set_alive(rng.random_bool(0.5));
        }
        self.generation = 0;
        Ok(())
    }

    /// Advance the grid by one generation.
    ///
    /// Every cell computes its next state before any cell commits, so no cell
    /// ever sees a neighbor's new value within the same generation. Returns
    /// `true` if at least one cell changed.
    pub fn advance(&mut self) -> Result<bool, GridError> {
        self.ensure_built()?;

        for index in 0..self.cells.len() {
            let alive_neighbors = self.cells[index].alive_neighbors(&self.cells);
            self.cells[index].compute_next(alive_neighbors);
        }

        let mut changed = false;
        for cell in &mut self.cells {
            changed |= cell.commit();
        }

        self.generation += 1;
        log::trace!("generation {} changed: {}", self.generation, changed);
        Ok(changed)
    }

    /// Flips a single cell.
    pub fn toggle_cell(&mut self, index: usize) -> Result<(), GridError> {
        self.cell_mut(index)?.toggle();
        Ok(())
    }

    /// Sets a single cell. Returns `true` if its liveness changed.
    pub fn set_alive(&mut self, index: usize, alive: bool) -> Result<bool, GridError> {
        Ok(self.cell_mut(index)?.set_alive(alive))
    }

    /// Kills every cell without rebuilding the board.
    pub fn clear(&mut self) -> Result<(), GridError> {
        self.ensure_built()?;
        for cell in &mut self.cells {
            cell.set_alive(false);
        }
        Ok(())
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let index = self.index_of(row, col)?;
        Ok(self.cells[index].is_alive())
    }

    pub fn is_alive_at(&self, index: usize) -> Result<bool, GridError> {
        Ok(self.cell(index)?.is_alive())
    }

    pub fn cell(&self, index: usize) -> Result<&Cell, GridError> {
        self.ensure_built()?;
        self.cells
            .get(index)
            .ok_or(GridError::IndexOutOfRange(CellRef::Index(index)))
    }

    /// Neighbor indices of the cell at `index`.
    pub fn neighbors(&self, index: usize) -> Result<&[usize], GridError> {
        Ok(self.cell(index)?.neighbors())
    }

    pub fn index_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        self.ensure_built()?;
        if row >= self.height || col >= self.width {
            return Err(GridError::IndexOutOfRange(CellRef::Coords { row, col }));
        }
        Ok(row * self.width + col)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_built(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Generations advanced since the board was last populated or randomized.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut Cell, GridError> {
        self.ensure_built()?;
        self.cells
            .get_mut(index)
            .ok_or(GridError::IndexOutOfRange(CellRef::Index(index)))
    }

    fn ensure_built(&self) -> Result<(), GridError> {
        if self.is_built() {
            Ok(())
        } else {
            Err(GridError::NotBuilt)
        }
    }
}
