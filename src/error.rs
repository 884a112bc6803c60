//! Engine configuration errors

use thiserror::Error;

/// Engine result type
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected engine settings. Everything past construction is infallible.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("seed probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}
