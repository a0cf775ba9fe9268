use std::fmt;

use rand::Rng;
use rayon::prelude::*;

use super::{CellState, rules::Rule};

/// Relative positions of the Moore neighborhood
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid stores the cell states of a fixed-size, row-major 2D automaton.
///
/// Coordinates are `(row, column)`, 0-indexed. Reading or writing outside
/// `[0, rows) x [0, columns)` is a logic bug and panics.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            rows > 0 && columns > 0,
            "grid dimensions must be non-zero, got {rows}x{columns}"
        );
        Self {
            rows,
            columns,
            cells: vec![CellState::DEAD; rows * columns],
        }
    }

    /// Parse a grid from text rows: `#`, `O` or `*` is alive, anything else dead.
    /// Short rows are padded with dead cells.
    ///
    /// Panics when `lines` is empty or every line is empty.
    pub fn from_rows(lines: &[&str]) -> Self {
        let columns = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        assert!(
            columns > 0,
            "cannot parse a grid from {} empty text rows",
            lines.len()
        );
        let mut grid = Self::new(lines.len(), columns);
        for (row, line) in lines.iter().enumerate() {
            for (column, ch) in line.chars().enumerate() {
                if matches!(ch, '#' | 'O' | '*') {
                    grid.set(row, column, CellState::ALIVE);
                }
            }
        }
        grid
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Get grid dimensions as `(rows, columns)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn check_bounds(&self, row: usize, column: usize) {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({row}, {column}) out of bounds for {}x{} grid",
            self.rows,
            self.columns
        );
    }

    /// Get cell at position, panicking when out of bounds
    pub fn get(&self, row: usize, column: usize) -> CellState {
        self.check_bounds(row, column);
        self.cells[self.get_index(row, column)]
    }

    /// Get cell at position, or None when out of bounds
    pub fn try_get(&self, row: usize, column: usize) -> Option<CellState> {
        (row < self.rows && column < self.columns)
            .then(|| self.cells[self.get_index(row, column)])
    }

    /// Set cell at position, panicking when out of bounds
    pub fn set(&mut self, row: usize, column: usize, state: CellState) {
        self.check_bounds(row, column);
        let idx = self.get_index(row, column);
        self.cells[idx] = state;
    }

    /// Count live cells in the Moore neighborhood.
    /// Positions past the edges are dead; the grid does not wrap.
    pub fn live_neighbors(&self, row: usize, column: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                Some((row.checked_add_signed(dr)?, column.checked_add_signed(dc)?))
            })
            .filter(|&(r, c)| r < self.rows && c < self.columns)
            .filter(|&(r, c)| self.cells[self.get_index(r, c)].is_alive())
            .count() as u8
    }

    fn next_state<R: Rule + ?Sized>(&self, rule: &R, row: usize, column: usize) -> CellState {
        let current = self.cells[self.get_index(row, column)];
        rule.evolve(current, self.live_neighbors(row, column))
    }

    /// Write the next generation of `self` into `next` (serial)
    pub fn evolve_into<R: Rule + ?Sized>(&self, next: &mut Grid, rule: &R) {
        self.assert_same_shape(next);
        for row in 0..self.rows {
            for column in 0..self.columns {
                let idx = self.get_index(row, column);
                next.cells[idx] = self.next_state(rule, row, column);
            }
        }
    }

    /// Write the next generation of `self` into `next`, one rayon task per row.
    /// Produces exactly the same cells as `evolve_into`.
    pub fn evolve_into_parallel<R: Rule + ?Sized>(&self, next: &mut Grid, rule: &R) {
        self.assert_same_shape(next);
        next.cells
            .par_chunks_mut(self.columns)
            .enumerate()
            .for_each(|(row, out)| {
                for (column, cell) in out.iter_mut().enumerate() {
                    *cell = self.next_state(rule, row, column);
                }
            });
    }

    fn assert_same_shape(&self, other: &Grid) {
        assert_eq!(
            self.dimensions(),
            other.dimensions(),
            "scratch grid dimensions differ from the current grid"
        );
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = CellState::DEAD);
    }

    /// Fill every cell, alive with probability `density`
    pub fn randomize<G: Rng>(&mut self, rng: &mut G, density: f64) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = CellState::from_alive(rng.random_bool(density));
        });
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.columns, idx % self.columns, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns) {
            let line: String = row
                .iter()
                .map(|cell| if cell.is_alive() { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConwayRule;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3, 4);
        grid.set(2, 3, CellState::ALIVE);
        assert_eq!(grid.get(2, 3), CellState::ALIVE);
        assert_eq!(grid.get(0, 0), CellState::DEAD);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        Grid::new(3, 3).get(3, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        Grid::new(3, 3).set(0, 3, CellState::ALIVE);
    }

    #[test]
    fn test_try_get_out_of_bounds() {
        let grid = Grid::new(2, 2);
        assert_eq!(grid.try_get(1, 1), Some(CellState::DEAD));
        assert_eq!(grid.try_get(2, 0), None);
    }

    #[test]
    fn test_corner_never_wraps() {
        // Opposite edges are alive; a wrapping grid would count them.
        let grid = Grid::from_rows(&[
            "#..#",
            "....",
            "....",
            "#..#",
        ]);
        assert_eq!(grid.live_neighbors(0, 0), 0);
        assert_eq!(grid.live_neighbors(3, 3), 0);
    }

    #[test]
    fn test_corner_counts_at_most_three() {
        let grid = Grid::from_rows(&[
            "##.",
            "##.",
            "...",
        ]);
        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(1, 1), 3);
        assert_eq!(grid.live_neighbors(2, 2), 1);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::new(40, 57);
        grid.randomize(&mut StdRng::seed_from_u64(7), 0.35);

        let mut serial = Grid::new(40, 57);
        let mut parallel = Grid::new(40, 57);
        grid.evolve_into(&mut serial, &ConwayRule);
        grid.evolve_into_parallel(&mut parallel, &ConwayRule);
        assert_eq!(serial, parallel);
    }

    #[test]
    #[should_panic(expected = "dimensions differ")]
    fn test_evolve_into_mismatched_scratch_panics() {
        let grid = Grid::new(3, 3);
        let mut next = Grid::new(3, 4);
        grid.evolve_into(&mut next, &ConwayRule);
    }

    #[test]
    fn test_randomize_is_reproducible() {
        let mut a = Grid::new(20, 20);
        let mut b = Grid::new(20, 20);
        a.randomize(&mut StdRng::seed_from_u64(42), 0.3);
        b.randomize(&mut StdRng::seed_from_u64(42), 0.3);
        assert_eq!(a, b);
        assert!(a.live_count() > 0);
    }

    #[test]
    #[should_panic(expected = "cannot parse a grid")]
    fn test_from_rows_rejects_no_rows() {
        Grid::from_rows(&[]);
    }

    #[test]
    #[should_panic(expected = "cannot parse a grid")]
    fn test_from_rows_rejects_blank_rows() {
        Grid::from_rows(&["", ""]);
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let grid = Grid::from_rows(&["#", "..#"]);
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.get(0, 2), CellState::DEAD);
        assert_eq!(grid.get(1, 2), CellState::ALIVE);
    }

    #[test]
    fn test_display_round_trips_through_from_rows() {
        let grid = Grid::from_rows(&[".#.", "#.#"]);
        assert_eq!(grid.to_string(), ".#.\n#.#\n");
        assert_eq!(grid.iter_cells().filter(|(_, _, c)| c.is_alive()).count(), 3);
    }
}
