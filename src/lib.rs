// Domain layer - automaton engine
pub mod domain;

// Application layer - sessions and interactive state
pub mod application;

// Configuration and errors
pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Automaton, CellState, Grid, WolframCode};
pub use application::{AutomatonSession, GameState, SessionConfig};
pub use error::{AutomatonError, Result};
