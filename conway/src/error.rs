// error.rs - Error types for the grid engine and its configuration

use thiserror::Error;

/// Grid access errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({col}, {row}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,

    #[error("a {width}x{height} field holds no {cell_size}px cells")]
    EmptyField {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("random life probability {0} is not within [0, 1]")]
    Probability(f64),

    #[error("tick rate must be greater than zero")]
    TickRate,

    #[error("invalid value {value:?} for {key}")]
    Parse { key: &'static str, value: String },
}
