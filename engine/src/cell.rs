/// A single automaton unit.
///
/// Neighbors are stored as indices into the owning grid's cell storage, so a
/// cell on its own never dereferences anything; the grid hands its cell slice
/// in when the neighborhood has to be read.
///
/// Equality compares liveness and neighbors only; the pending state is
/// scratch space for a single advance.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    alive: bool,
    pending_alive: bool,
    neighbors: Vec<usize>,
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.alive == other.alive && self.neighbors == other.neighbors
    }
}

impl Eq for Cell {}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets liveness. Returns `true` only if the value actually changed.
    pub fn set_alive(&mut self, alive: bool) -> bool {
        if self.alive == alive {
            return false;
        }
        self.alive = alive;
        true
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Flips liveness unconditionally.
    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }

    /// Appends a neighbor index. No de-duplication happens here.
    pub fn add_neighbor(&mut self, index: usize) {
        self.neighbors.push(index);
    }

    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Counts live neighbors, reading the current generation only.
    pub(crate) fn alive_neighbors(&self, cells: &[Cell]) -> usize {
        self.neighbors
            .iter()
            .filter(|&&index| cells[index].alive)
            .count()
    }

    /// Phase 0: stores the next state without touching current liveness.
    pub(crate) fn compute_next(&mut self, alive_neighbors: usize) {
        self.pending_alive = next_state(self.alive, alive_neighbors);
    }

    /// Phase 1: applies the pending state. Returns `true` if it changed.
    pub(crate) fn commit(&mut self) -> bool {
        self.set_alive(self.pending_alive)
    }
}

/// Birth on 3, survival on 2 or 3.
pub fn next_state(alive: bool, alive_neighbors: usize) -> bool {
    match (alive, alive_neighbors) {
        (true, 2..=3) => true, // Survives
        (false, 3) => true,    // Becomes alive
        _ => false,            // Dies or remains dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_dead_and_isolated() {
        let cell = Cell::new();
        assert!(!cell.is_alive());
        assert!(cell.neighbors().is_empty());
    }

    #[test]
    fn set_alive_reports_changes_only() {
        let mut cell = Cell::new();
        assert!(!cell.set_alive(false));
        assert!(cell.set_alive(true));
        assert!(!cell.set_alive(true));
        assert!(cell.is_alive());
    }

    #[test]
    fn toggle_flips_unconditionally() {
        let mut cell = Cell::new();
        cell.toggle();
        assert!(cell.is_alive());
        cell.toggle();
        assert!(!cell.is_alive());
    }

    #[test]
    fn add_neighbor_keeps_duplicates() {
        let mut cell = Cell::new();
        cell.add_neighbor(3);
        cell.add_neighbor(3);
        assert_eq!(cell.neighbors(), &[3, 3]);
    }

    #[test]
    fn rule_table() {
        for count in 0..=8 {
            let survives = count == 2 || count == 3;
            assert_eq!(next_state(true, count), survives, "alive, {count}");
            assert_eq!(next_state(false, count), count == 3, "dead, {count}");
        }
    }

    #[test]
    fn compute_next_leaves_current_state_alone() {
        let mut cells = vec![Cell::new(), Cell::new(), Cell::new(), Cell::new()];
        for neighbor in 1..4 {
            cells[0].add_neighbor(neighbor);
            cells[neighbor].set_alive(true);
        }

        let count = cells[0].alive_neighbors(&cells);
        assert_eq!(count, 3);
        cells[0].compute_next(count);
        assert!(!cells[0].is_alive());

        assert!(cells[0].commit());
        assert!(cells[0].is_alive());
        assert!(!cells[0].commit());
    }

    #[test]
    fn equality_ignores_pending_state() {
        let mut staged = Cell::new();
        staged.add_neighbor(1);
        staged.compute_next(3);

        let mut plain = Cell::new();
        plain.add_neighbor(1);

        assert_eq!(staged, plain);
        plain.toggle();
        assert_ne!(staged, plain);
    }
}
