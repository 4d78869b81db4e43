//! Error types shared across the Petri workspace.

use std::error::Error;
use std::fmt;

/// Errors from [`Pattern`](crate::Pattern) construction.
///
/// All constructors validate eagerly; a `Pattern` value is always
/// well-formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern has no rows, or its rows have zero width.
    Empty,
    /// A row's length differs from the first row's length.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A row contains a character other than `'0'` or `'1'`.
    InvalidGlyph {
        /// Row index of the offending character.
        row: usize,
        /// Column index of the offending character.
        col: usize,
        /// The character itself.
        glyph: char,
    },
    /// A live-cell offset lies outside the declared footprint.
    CellOutOfBounds {
        /// Row offset of the offending cell.
        row: usize,
        /// Column offset of the offending cell.
        col: usize,
        /// Declared footprint rows.
        rows: usize,
        /// Declared footprint columns.
        cols: usize,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "pattern must have at least one non-empty row"),
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {row} has length {actual}, expected {expected} to match row 0"
                )
            }
            Self::InvalidGlyph { row, col, glyph } => {
                write!(f, "invalid glyph {glyph:?} at ({row}, {col}), expected '0' or '1'")
            }
            Self::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "cell ({row}, {col}) outside the {rows}x{cols} pattern footprint"
                )
            }
        }
    }
}

impl Error for PatternError {}
