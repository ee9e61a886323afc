//! The four bundled automata.
//!
//! An [`Automaton`] ties together everything that differs between them:
//! state count, manual toggle, initial state, transition rule and palette.
//! The neighborhood is the toroidal Moore neighborhood for all of them.

use super::cell::{CellState, life};
use super::elementary::{ElementaryRule, WolframCode};
use super::rules::{BriansBrainRule, LifeRule, TransitionRule, WireworldRule};

/// Available automata, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Automaton {
    #[default]
    GameOfLife,
    Wireworld,
    BriansBrain,
    Elementary(WolframCode),
}

const LIFE_PALETTE: [&str; 2] = ["#333", "#fff"];
const WIREWORLD_PALETTE: [&str; 4] = ["#333", "#4dbeff", "#ff6347", "#f7ff66"];
const BRAIN_PALETTE: [&str; 3] = ["#333", "#fff", "#194bff"];
const ELEMENTARY_EDIT_ROW_PALETTE: [&str; 2] = ["#222", "#eee"];

impl Automaton {
    /// Get all automata, Elementary with its default rule
    pub fn all() -> Vec<Automaton> {
        vec![
            Automaton::GameOfLife,
            Automaton::Wireworld,
            Automaton::BriansBrain,
            Automaton::Elementary(WolframCode::default()),
        ]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Automaton::GameOfLife => "Game of Life",
            Automaton::Wireworld => "Wireworld",
            Automaton::BriansBrain => "Brian's Brain",
            Automaton::Elementary(_) => "Elementary",
        }
    }

    /// Short identifier used on the command line and in routes
    pub fn slug(&self) -> &'static str {
        match self {
            Automaton::GameOfLife => "gol",
            Automaton::Wireworld => "ww",
            Automaton::BriansBrain => "bb",
            Automaton::Elementary(_) => "eca",
        }
    }

    /// Number of distinct cell states
    pub const fn state_count(&self) -> CellState {
        match self {
            Automaton::GameOfLife | Automaton::Elementary(_) => 2,
            Automaton::BriansBrain => 3,
            Automaton::Wireworld => 4,
        }
    }

    /// Next state of a clicked cell.
    /// Wireworld steps by 3 so a single click on an empty cell lays conductor.
    pub const fn toggle(&self, state: CellState) -> CellState {
        let step = match self {
            Automaton::Wireworld => 3,
            _ => 1,
        };
        let count = self.state_count();
        (state % count + step) % count
    }

    /// Grid rows for a requested size. Elementary grids are half as tall as wide.
    pub const fn rows_for(&self, rows: usize, cols: usize) -> usize {
        match self {
            Automaton::Elementary(_) => cols / 2,
            _ => rows,
        }
    }

    /// State of cell (i, j) on a fresh grid `cols` wide
    pub const fn initial_state(&self, i: usize, j: usize, cols: usize) -> CellState {
        match self {
            Automaton::Elementary(_) if i == 0 && j == cols / 2 => life::ALIVE,
            _ => life::DEAD,
        }
    }

    /// Transition rule for one generation.
    /// `iteration` and `cols` only matter to the elementary automaton.
    pub fn rule(&self, iteration: usize, cols: usize) -> Box<dyn TransitionRule> {
        match *self {
            Automaton::GameOfLife => Box::new(LifeRule),
            Automaton::Wireworld => Box::new(WireworldRule),
            Automaton::BriansBrain => Box::new(BriansBrainRule),
            Automaton::Elementary(code) => {
                Box::new(ElementaryRule::new(code).at_iteration(iteration, cols))
            }
        }
    }

    /// Hex display color for a cell in row `i`.
    /// The elementary automaton shades the row feeding the next generation.
    pub fn color(&self, i: usize, state: CellState, iteration: usize) -> &'static str {
        let palette: &[&'static str] = match self {
            Automaton::GameOfLife => &LIFE_PALETTE,
            Automaton::Wireworld => &WIREWORLD_PALETTE,
            Automaton::BriansBrain => &BRAIN_PALETTE,
            Automaton::Elementary(_) if i + 1 == iteration => &ELEMENTARY_EDIT_ROW_PALETTE,
            Automaton::Elementary(_) => &LIFE_PALETTE,
        };
        palette[usize::from(state).min(palette.len() - 1)]
    }

    pub const fn wolfram_code(&self) -> Option<WolframCode> {
        match self {
            Automaton::Elementary(code) => Some(*code),
            _ => None,
        }
    }
}

impl std::fmt::Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Automaton::Elementary(code) => write!(f, "{} ({code})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}
