use super::{Automaton, CellState, Grid};

/// Represents a pattern that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize, CellState)>, // (row, col, state) relative to the top-left corner
}

impl Pattern {
    /// Create a new pattern from non-empty cells
    pub fn new(
        name: &'static str,
        description: &'static str,
        cells: Vec<(usize, usize, CellState)>,
    ) -> Self {
        let height = cells.iter().map(|&(i, _, _)| i).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|&(_, j, _)| j).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            height,
            width,
            cells,
        }
    }

    /// Write the pattern with its top-left corner at (i, j).
    /// Cells running past an edge wrap around, matching the torus the
    /// automata live on.
    pub fn stamp(&self, grid: &mut Grid, i: usize, j: usize) {
        let (rows, cols) = grid.dimensions();
        for &(di, dj, state) in &self.cells {
            grid[((i + di) % rows, (j + dj) % cols)] = state;
        }
    }

    /// Top-left corner that centers the pattern on cell (i, j) of a
    /// rows x cols torus
    pub fn centered_at(&self, i: usize, j: usize, rows: usize, cols: usize) -> (usize, usize) {
        let wrap = |x: usize, half: usize, n: usize| (x % n + n - half % n) % n;
        (wrap(i, self.height / 2, rows), wrap(j, self.width / 2, cols))
    }
}

/// Preset patterns for each automaton
pub mod presets {
    use super::*;
    use crate::domain::cell::{brain, life, wireworld};

    const A: CellState = life::ALIVE;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![(0, 0, A), (0, 1, A), (1, 0, A), (1, 1, A)],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0, A), (0, 1, A), (0, 2, A)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![(0, 1, A), (0, 2, A), (0, 3, A), (1, 0, A), (1, 1, A), (1, 2, A)],
        )
    }

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![(0, 1, A), (1, 2, A), (2, 0, A), (2, 1, A), (2, 2, A)],
        )
    }

    /// Closed loop of wire with one electron circling it
    pub fn clock() -> Pattern {
        use wireworld::{CONDUCTOR as C, HEAD as H, TAIL as T};
        Pattern::new(
            "Clock",
            "Electron on a 10-cell loop (period 10)",
            vec![
                (0, 1, T), (0, 2, H), (0, 3, C), (0, 4, C),
                (1, 0, C), (1, 5, C),
                (2, 1, C), (2, 2, C), (2, 3, C), (2, 4, C),
            ],
        )
    }

    /// Straight wire with an electron heading right
    pub fn wire() -> Pattern {
        use wireworld::{CONDUCTOR as C, HEAD as H, TAIL as T};
        Pattern::new(
            "Wire",
            "Electron running along a wire",
            vec![(0, 0, T), (0, 1, H), (0, 2, C), (0, 3, C), (0, 4, C), (0, 5, C), (0, 6, C)],
        )
    }

    /// Two firing cells; their shared neighbors fire next
    pub fn spark() -> Pattern {
        Pattern::new("Spark", "Two firing cells", vec![(0, 0, brain::ON), (0, 1, brain::ON)])
    }

    /// Get the presets that make sense for an automaton
    pub fn for_automaton(automaton: Automaton) -> Vec<Pattern> {
        match automaton {
            Automaton::GameOfLife => vec![block(), blinker(), toad(), glider()],
            Automaton::Wireworld => vec![clock(), wire()],
            Automaton::BriansBrain => vec![spark()],
            Automaton::Elementary(_) => Vec::new(),
        }
    }
}
