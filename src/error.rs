//! Error types for invalid input.
//!
//! Search outcomes (no solution, exhausted budget) are ordinary results and
//! never appear here.

use thiserror::Error;

/// Errors raised before a search starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueensError {
    /// The board dimension must be at least 1.
    #[error("board size must be at least 1, got {n}")]
    InvalidSize { n: usize },

    /// A runner configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A column index does not fit on the board.
    #[error("column {column} in row {row} is out of range for a {n}x{n} board")]
    ColumnOutOfRange { row: usize, column: usize, n: usize },
}

/// Fails fast on a degenerate board dimension.
pub(crate) fn check_size(n: usize) -> Result<(), QueensError> {
    if n == 0 {
        return Err(QueensError::InvalidSize { n });
    }
    Ok(())
}
