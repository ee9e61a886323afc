use std::fmt;
use std::ops::{Index, IndexMut};

use rand::Rng;
use rayon::prelude::*;

use super::CellState;
use crate::error::{AutomatonError, Result};

/// Grid owns the rows x cols matrix of cell states.
/// Cells are stored row-major; (i, j) is (row, column).
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell in state 0
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| 0)
    }

    /// Create a grid whose cells are initialized as a function of position
    pub fn from_fn(
        rows: usize,
        cols: usize,
        initial: impl Fn(usize, usize) -> CellState,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(AutomatonError::InvalidDimensions { rows, cols });
        }

        let cells = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| initial(i, j))
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn contains(&self, i: usize, j: usize) -> bool {
        i < self.rows && j < self.cols
    }

    const fn index_of(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Get cell at position, None when out of bounds
    pub fn get(&self, i: usize, j: usize) -> Option<CellState> {
        self.contains(i, j).then(|| self.cells[self.index_of(i, j)])
    }

    /// Set a single cell (user edits and pattern stamping)
    pub fn set(&mut self, i: usize, j: usize, state: CellState) -> Result<()> {
        if !self.contains(i, j) {
            return Err(self.out_of_bounds(i, j));
        }
        let idx = self.index_of(i, j);
        self.cells[idx] = state;
        Ok(())
    }

    fn out_of_bounds(&self, i: usize, j: usize) -> AutomatonError {
        AutomatonError::OutOfBounds {
            row: i,
            col: j,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Build a fresh grid by applying `f(i, j, state)` to every cell.
    /// The source grid is never touched, so `f` may read it freely.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(usize, usize, CellState) -> CellState,
    {
        let cells = self.iter_cells().map(|(i, j, state)| f(i, j, state)).collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parallel `map` using rayon, one task per row
    pub fn par_map<F>(&self, f: F) -> Self
    where
        F: Fn(usize, usize, CellState) -> CellState + Sync,
    {
        let cols = self.cols;
        let cells = self
            .cells
            .par_chunks(cols)
            .enumerate()
            .flat_map_iter(|(i, row)| {
                let f = &f;
                row.iter().enumerate().map(move |(j, &state)| f(i, j, state))
            })
            .collect();

        Self {
            rows: self.rows,
            cols,
            cells,
        }
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &state)| (idx / self.cols, idx % self.cols, state))
    }

    /// One row of the grid as a slice
    pub fn row(&self, i: usize) -> &[CellState] {
        let start = self.index_of(i, 0);
        &self.cells[start..start + self.cols]
    }

    /// Number of cells currently in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Fill every cell with a uniformly random state in `0..state_count`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, state_count: CellState) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = rng.random_range(0..state_count.max(1)));
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = CellState;

    /// Out-of-bounds access is a caller bug and panics.
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(
            self.contains(i, j),
            "cell ({i}, {j}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[self.index_of(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        assert!(
            self.contains(i, j),
            "cell ({i}, {j}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        let idx = self.index_of(i, j);
        &mut self.cells[idx]
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        for i in 0..self.rows {
            let line: String = self
                .row(i)
                .iter()
                .map(|&s| char::from_digit(u32::from(s), 36).unwrap_or('?'))
                .collect();
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
