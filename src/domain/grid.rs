use super::Cell;

/// Grid manages the bounded 2D cellular automaton board.
/// Uses functional, immutable updates: `evolve` returns a fresh grid and
/// never touches its input, so each generation wholly replaces the last.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid from explicit rows of booleans.
    /// Panics if the rows are ragged; the rest of the crate assumes a
    /// rectangular board and this is the only seam where raggedness could
    /// enter.
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        assert!(
            rows.iter().all(|row| row.len() == width),
            "grid rows must all have the same length"
        );

        let cells = rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|&alive| if alive { Cell::Alive } else { Cell::Dead })
            .collect();

        Self { width, height, cells }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors among the 8 adjacent positions.
    /// The boundary is closed: positions outside the grid count as dead,
    /// with no wraparound.
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as i32, y as i32);

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let (nx, ny) = (x + dx, y + dy);
                (nx >= 0 && ny >= 0)
                    .then(|| self.get(nx as usize, ny as usize))
                    .flatten()
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure transition to the next generation - returns a new grid of
    /// identical dimensions
    pub fn evolve(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                let neighbors = self.count_live_neighbors(x, y);
                current.evolve(neighbors)
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Number of live cells on the board
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_evolve_preserves_dimensions() {
        let grid = Grid::new(7, 5);
        assert_eq!(grid.evolve().dimensions(), (7, 5));
    }

    #[test]
    fn test_all_dead_stays_all_dead() {
        let grid = Grid::new(6, 6);
        assert_eq!(grid.evolve(), Grid::new(6, 6));
    }

    #[test]
    fn test_lonely_center_cell_dies() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Cell::Alive);
        assert_eq!(grid.evolve(), Grid::new(3, 3));
    }

    #[test]
    fn test_block_is_stable() {
        let block = Grid::from_rows(&[
            &[false, false, false, false],
            &[false, true, true, false],
            &[false, true, true, false],
            &[false, false, false, false],
        ]);
        assert_eq!(block.evolve(), block);
    }

    #[test]
    fn test_glider_advances_one_step() {
        let glider = Grid::from_rows(&[
            &[false, true, false, false, false],
            &[false, false, true, false, false],
            &[true, true, true, false, false],
            &[false, false, false, false, false],
            &[false, false, false, false, false],
        ]);
        let expected = Grid::from_rows(&[
            &[false, false, false, false, false],
            &[true, false, true, false, false],
            &[false, true, true, false, false],
            &[false, true, false, false, false],
            &[false, false, false, false, false],
        ]);
        assert_eq!(glider.evolve(), expected);
    }

    #[test]
    fn test_boundary_neighbors_count_as_dead() {
        // Every cell alive: a corner sees 3 of its 8 slots, an edge 5,
        // and out-of-range positions never contribute.
        let grid = Grid::from_rows(&[
            &[true, true, true],
            &[true, true, true],
            &[true, true, true],
        ]);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(2, 2), 3);
        assert_eq!(grid.count_live_neighbors(1, 0), 5);
        assert_eq!(grid.count_live_neighbors(0, 1), 5);
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_evolve_does_not_mutate_input() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Cell::Alive);
        let before = grid.clone();
        let _ = grid.evolve();
        assert_eq!(grid, before);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_ragged_rows_are_rejected() {
        let _ = Grid::from_rows(&[&[true, false], &[true]]);
    }
}
