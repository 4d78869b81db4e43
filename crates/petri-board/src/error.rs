//! Error types for board operations.

use std::error::Error;
use std::fmt;

/// Errors arising from bulk board operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Source and destination dimensions differ in a bulk copy.
    SizeMismatch {
        /// Rows of the destination board.
        expected_rows: usize,
        /// Columns of the destination board.
        expected_cols: usize,
        /// Rows of the source board.
        actual_rows: usize,
        /// Columns of the source board.
        actual_cols: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                expected_rows,
                expected_cols,
                actual_rows,
                actual_cols,
            } => {
                write!(
                    f,
                    "board size mismatch: expected {expected_rows}x{expected_cols}, \
                     got {actual_rows}x{actual_cols}"
                )
            }
        }
    }
}

impl Error for BoardError {}
