use std::fmt;

use rand::Rng;
use rayon::prelude::*;

use super::Cell;

/// Moore neighborhood as (row, col) offsets.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid manages the 2D cellular automaton grid.
/// Uses functional, immutable updates: every operation that changes cells
/// returns a new grid and leaves the receiver untouched.
///
/// Cells are addressed as `(row, col)` and stored row-major. Edges wrap
/// (toroidal topology).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Create a grid where each cell is independently alive with
    /// probability `alive_probability`.
    ///
    /// Panics if `alive_probability` is outside `[0, 1]`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Self {
        let cells = (0..rows * cols)
            .map(|_| Cell::from(rng.random_bool(alive_probability)))
            .collect();

        Self { rows, cols, cells }
    }

    /// Create a grid with exactly the listed cells alive
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::empty(rows, cols);
        for &(row, col) in alive {
            let idx = grid.index(row, col);
            grid.cells[idx] = Cell::Alive;
        }
        grid
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index. Out-of-range is a caller bug.
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// New grid identical to this one except (row, col) is flipped.
    ///
    /// Panics if the position is outside the grid.
    pub fn toggle_cell(&self, row: usize, col: usize) -> Self {
        let idx = self.index(row, col);
        let mut next = self.clone();
        next.cells[idx] = next.cells[idx].toggle();
        next
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    pub fn count_alive_neighbors(&self, row: usize, col: usize) -> u8 {
        let rows = self.rows as isize;
        let cols = self.cols as isize;

        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                let nr = (row as isize + dr).rem_euclid(rows) as usize;
                let nc = (col as isize + dc).rem_euclid(cols) as usize;
                self.cells[nr * self.cols + nc]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Next state of a single cell, read from the pre-step grid
    fn next_cell(&self, row: usize, col: usize) -> Cell {
        let current = self.cells[row * self.cols + col];
        current.evolve(self.count_alive_neighbors(row, col))
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parallel evolution using rayon, one task per row.
    /// Produces exactly the same grid as [`Grid::step`].
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|row| (0..self.cols).map(move |col| self.next_cell(row, col)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
