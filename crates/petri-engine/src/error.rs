//! Error types for engine construction and seeding.

use std::error::Error;
use std::fmt;

use petri_board::BoardError;

/// Errors from [`Engine`](crate::Engine) construction and seeding
/// operations.
///
/// Stepping itself cannot fail; every fallible precondition is checked
/// before any state is touched, so an `Err` always leaves the engine
/// exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Attempted to construct an engine with a zero dimension.
    EmptyBoard,
    /// A dimension exceeds [`Engine::MAX_DIM`](crate::Engine::MAX_DIM).
    DimensionTooLarge {
        /// Which axis was too large (`"rows"` or `"cols"`).
        name: &'static str,
        /// The offending value.
        value: usize,
        /// The maximum allowed.
        max: usize,
    },
    /// The board is smaller than a seeding operation's footprint.
    BoardTooSmall {
        /// What was being seeded (pattern name or `"random block"`).
        what: String,
        /// Minimum rows the operation needs.
        min_rows: usize,
        /// Minimum columns the operation needs.
        min_cols: usize,
        /// Actual board rows.
        rows: usize,
        /// Actual board columns.
        cols: usize,
    },
    /// A caller-provided board was rejected by a bulk copy.
    Board(BoardError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum dimension {max}")
            }
            Self::BoardTooSmall {
                what,
                min_rows,
                min_cols,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "{rows}x{cols} board too small to seed {what}: \
                     needs at least {min_rows}x{min_cols}"
                )
            }
            Self::Board(e) => write!(f, "board: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for EngineError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}
