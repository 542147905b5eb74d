// grid.rs - Grid engine for Conway's Game of Life
//
// Cells live in a flat row-major buffer. Stepping writes the next generation
// into a second buffer of the same size and swaps the two, so readers only
// ever see a whole generation.

use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::GridError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// Fixed-size Life grid plus its generation counter.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    next_cells: Vec<Cell>,
    generation: u64,
    rng: StdRng,
}

impl Grid {
    /// All-dead grid with an OS-seeded random source.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self::with_rng(cols, rows, StdRng::from_os_rng())
    }

    /// All-dead grid whose `randomize` sequence is reproducible.
    pub fn with_seed(cols: usize, rows: usize, seed: u64) -> Self {
        Self::with_rng(cols, rows, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &Config) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config.cols(), config.rows(), seed),
            None => Self::new(config.cols(), config.rows()),
        }
    }

    fn with_rng(cols: usize, rows: usize, rng: StdRng) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Dead; cols * rows],
            next_cells: vec![Cell::Dead; cols * rows],
            generation: 0,
            rng,
        }
    }

    /// `(cols, rows)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell_at(&self, col: usize, row: usize) -> Option<Cell> {
        self.index(col, row).ok().map(|i| self.cells[i])
    }

    /// Each row of the current generation, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact(0) panics, and a zero-width grid has no rows to yield
        self.cells.chunks_exact(self.cols.max(1))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kill every cell and restart the generation count.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.generation = 0;
        info!("grid cleared");
    }

    /// Bring each cell to life with probability `p`. Live cells stay alive.
    ///
    /// `p` is clamped into `[0, 1]` and NaN counts as `0`. The generation
    /// counter is left alone.
    pub fn randomize(&mut self, p: f64) {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        for cell in self.cells.iter_mut() {
            if self.rng.random_bool(p) {
                *cell = Cell::Alive;
            }
        }
        info!("grid randomized with p={p}, population {}", self.population());
    }

    pub fn toggle(&mut self, col: usize, row: usize) -> Result<Cell, GridError> {
        let i = self.index(col, row)?;
        self.cells[i] = self.cells[i].toggled();
        Ok(self.cells[i])
    }

    pub fn set(&mut self, col: usize, row: usize, cell: Cell) -> Result<(), GridError> {
        let i = self.index(col, row)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let i = row * self.cols + col;
                self.next_cells[i] = match self.live_neighbours(col, row) {
                    2 => self.cells[i],
                    3 => Cell::Alive,
                    _ => Cell::Dead,
                };
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next_cells);
        self.generation += 1;

        debug_assert!(self.border_is_dead(), "border cell alive after step");
        debug!("generation {} population {}", self.generation, self.population());
    }

    /// Live cells among the eight neighbours of `(col, row)`.
    ///
    /// Cells on the outer ring always report zero, which kills them on the
    /// next step whatever their surroundings.
    pub fn live_neighbours(&self, col: usize, row: usize) -> u8 {
        if self.is_border(col, row) {
            return 0;
        }

        let neighbours = [
            (col - 1, row - 1), (col, row - 1), (col + 1, row - 1),
            (col - 1, row),                     (col + 1, row),
            (col - 1, row + 1), (col, row + 1), (col + 1, row + 1),
        ];

        neighbours
            .iter()
            .filter(|&&(c, r)| self.cells[r * self.cols + c].is_alive())
            .count() as u8
    }

    /// Outermost ring; coordinates past the grid count as border too.
    pub fn is_border(&self, col: usize, row: usize) -> bool {
        col == 0
            || row == 0
            || col >= self.cols.saturating_sub(1)
            || row >= self.rows.saturating_sub(1)
    }

    pub fn border_is_dead(&self) -> bool {
        self.rows_iter().enumerate().all(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .all(|(col, cell)| !self.is_border(col, row) || !cell.is_alive())
        })
    }

    fn index(&self, col: usize, row: usize) -> Result<usize, GridError> {
        if col >= self.cols || row >= self.rows {
            return Err(GridError::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(row * self.cols + col)
    }
}

/// `#` for alive, `.` for dead, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in self.rows_iter() {
            for cell in cells {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cols: usize, rows: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::with_seed(cols, rows, 7);
        for &(col, row) in alive {
            grid.set(col, row, Cell::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn starts_dead_at_generation_zero() {
        let grid = Grid::with_seed(80, 60, 1);
        assert_eq!(grid.dimensions(), (80, 60));
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.rows_iter().count(), 60);
    }

    #[test]
    fn from_config_uses_derived_dimensions() {
        let config = Config { cell_size: 20, seed: Some(3), ..Config::default() };
        assert_eq!(Grid::from_config(&config).dimensions(), (40, 30));
    }

    #[test]
    fn toggle_flips_and_reports_new_state() {
        let mut grid = Grid::with_seed(4, 4, 1);
        assert_eq!(grid.toggle(1, 2), Ok(Cell::Alive));
        assert_eq!(grid.cell_at(1, 2), Some(Cell::Alive));
        assert_eq!(grid.toggle(1, 2), Ok(Cell::Dead));
        assert_eq!(grid.cell_at(1, 2), Some(Cell::Dead));
    }

    #[test]
    fn toggle_out_of_bounds() {
        let mut grid = Grid::with_seed(4, 3, 1);
        assert_eq!(
            grid.toggle(4, 0),
            Err(GridError::OutOfBounds { col: 4, row: 0, cols: 4, rows: 3 })
        );
        assert!(grid.toggle(0, 3).is_err());
        assert!(grid.set(9, 9, Cell::Alive).is_err());
        assert_eq!(grid.cell_at(4, 0), None);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn clear_resets_cells_and_generation() {
        let mut grid = grid_with(6, 6, &[(2, 2), (2, 3), (3, 2)]);
        grid.step();
        grid.step();
        assert_eq!(grid.generation(), 2);

        grid.clear();
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn randomize_extremes() {
        let mut grid = grid_with(10, 8, &[(3, 3)]);
        grid.randomize(0.0);
        assert_eq!(grid.population(), 1);
        assert_eq!(grid.cell_at(3, 3), Some(Cell::Alive));

        grid.randomize(1.0);
        assert_eq!(grid.population(), 80);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn randomize_clamps_probability() {
        let mut grid = Grid::with_seed(5, 5, 9);
        grid.randomize(-1.0);
        assert_eq!(grid.population(), 0);
        grid.randomize(f64::NAN);
        assert_eq!(grid.population(), 0);
        grid.randomize(7.5);
        assert_eq!(grid.population(), 25);
    }

    #[test]
    fn randomize_only_adds_life() {
        let row: Vec<(usize, usize)> = (0..10).map(|col| (col, 5)).collect();
        for p in [0.0, 0.1, 0.5, 0.9] {
            let mut grid = grid_with(10, 10, &row);
            grid.randomize(p);
            for &(col, row) in &row {
                assert_eq!(grid.cell_at(col, row), Some(Cell::Alive), "p={p}");
            }
            assert!(grid.population() >= 10);
        }
    }

    #[test]
    fn border_check_accepts_any_coordinate() {
        let grid = Grid::with_seed(5, 5, 0);
        assert!(grid.is_border(usize::MAX, 2));
        assert!(grid.is_border(2, usize::MAX));
        assert!(!grid.is_border(2, 2));
        assert_eq!(grid.live_neighbours(usize::MAX, usize::MAX), 0);

        let empty = Grid::with_seed(0, 0, 0);
        assert!(empty.is_border(0, 0));
    }

    #[test]
    fn randomize_is_reproducible_with_seed() {
        let mut a = Grid::with_seed(30, 20, 99);
        let mut b = Grid::with_seed(30, 20, 99);
        a.randomize(0.3);
        b.randomize(0.3);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn randomize_keeps_generation() {
        let mut grid = Grid::with_seed(5, 5, 2);
        grid.step();
        grid.randomize(0.5);
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn block_is_stable() {
        let mut grid = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        let before = grid.to_string();
        grid.step();
        assert_eq!(grid.to_string(), before);
    }

    #[test]
    fn border_neighbour_count_is_zero() {
        let grid = grid_with(5, 5, &[(0, 1), (1, 1), (1, 0), (1, 2), (0, 2)]);
        assert_eq!(grid.live_neighbours(0, 0), 0);
        assert_eq!(grid.live_neighbours(0, 1), 0);
        assert_eq!(grid.live_neighbours(1, 1), 4);
    }

    #[test]
    fn border_dies_even_with_three_neighbours() {
        // (0, 2) would be born on an open grid
        let mut grid = grid_with(6, 6, &[(1, 1), (1, 2), (1, 3), (0, 0)]);
        grid.step();
        assert_eq!(grid.cell_at(0, 2), Some(Cell::Dead));
        assert_eq!(grid.cell_at(0, 0), Some(Cell::Dead));
        assert!(grid.border_is_dead());
    }

    #[test]
    fn display_draws_rows() {
        let grid = grid_with(3, 2, &[(1, 0), (2, 1)]);
        assert_eq!(grid.to_string(), ".#.\n..#\n");
    }

    #[test]
    fn degenerate_grids_step_quietly() {
        let mut grid = Grid::with_seed(1, 1, 0);
        grid.set(0, 0, Cell::Alive).unwrap();
        grid.step();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 1);
    }
}
