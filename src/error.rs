use thiserror::Error;

pub type Result<T> = std::result::Result<T, AutomatonError>;

/// Precondition violations rejected by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("invalid grid dimensions {rows}x{cols}: rows and columns must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("invalid Wolfram code {0}: must be between 0 and 255")]
    InvalidRule(i64),

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
