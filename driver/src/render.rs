use life_engine::Grid;

const ALIVE: char = '#';
const DEAD: char = '.';

/// Text frame of the grid, one line per row.
pub fn frame(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for (index, cell) in grid.cells().iter().enumerate() {
        out.push(if cell.is_alive() { ALIVE } else { DEAD });
        if (index + 1) % grid.width() == 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_rows_top_to_bottom() {
        let mut grid = Grid::new();
        grid.populate(3, 2, |row, col| row == col).unwrap();
        assert_eq!(frame(&grid), "#..\n.#.\n");
    }

    #[test]
    fn unbuilt_grid_is_empty() {
        assert_eq!(frame(&Grid::new()), "");
    }
}
