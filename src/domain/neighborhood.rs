use super::{CellState, Grid};

/// A neighborhood function: given a cell position and the current grid,
/// return the ordered states of the cells that influence it.
pub trait Neighborhood: Send + Sync {
    fn neighbors(&self, i: usize, j: usize, grid: &Grid) -> Vec<CellState>;
}

/// Moore neighborhood on a torus: the eight surrounding cells, with the
/// edges of the grid identified so lookups past one side come back on the
/// other.
#[derive(Clone, Copy, Debug, Default)]
pub struct MooreNeighborhood;

impl MooreNeighborhood {
    /// (column offset, row offset) for each slot, column offset outermost.
    pub const OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    pub const UP_LEFT: usize = 0;
    pub const LEFT: usize = 1;
    pub const DOWN_LEFT: usize = 2;
    pub const UP: usize = 3;
    pub const DOWN: usize = 4;
    pub const UP_RIGHT: usize = 5;
    pub const RIGHT: usize = 6;
    pub const DOWN_RIGHT: usize = 7;
}

/// Step `index` by `offset` on a ring of `len` positions.
fn wrap(index: usize, offset: isize, len: usize) -> usize {
    (index as isize + offset).rem_euclid(len as isize) as usize
}

impl Neighborhood for MooreNeighborhood {
    fn neighbors(&self, i: usize, j: usize, grid: &Grid) -> Vec<CellState> {
        let (rows, cols) = grid.dimensions();

        Self::OFFSETS
            .iter()
            .map(|&(du, dv)| grid[(wrap(i, dv, rows), wrap(j, du, cols))])
            .collect()
    }
}
