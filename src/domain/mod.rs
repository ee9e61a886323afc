pub mod cell;
mod grid;
mod neighborhood;
mod rules;
mod elementary;
mod stepper;
mod automaton;
mod patterns;

pub use cell::{CellState, count_state};
pub use grid::Grid;
pub use neighborhood::{Neighborhood, MooreNeighborhood};
pub use rules::{TransitionRule, LifeRule, WireworldRule, BriansBrainRule};
pub use elementary::{WolframCode, ElementaryRule, ElementaryStep};
pub use stepper::{next_generation, next_generation_parallel};
pub use automaton::Automaton;
pub use patterns::{Pattern, presets};
