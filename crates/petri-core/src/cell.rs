//! The per-position cell state.

use crate::id::{CellKind, PlayerId};

/// State of a single board position.
///
/// Cells are plain values with no identity beyond their grid position.
/// Only `alive` participates in the classic ruleset; `owner` and `kind`
/// ride along for variants that colour or specialise populations. The
/// default cell is dead and unowned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Whether the cell is live this generation.
    pub alive: bool,
    /// Owning player. [`PlayerId::NEUTRAL`] for rule-driven births.
    pub owner: PlayerId,
    /// Cell variant tag. [`CellKind::DEFAULT`] unless a seeder says otherwise.
    pub kind: CellKind,
}

impl Cell {
    /// A dead, unowned cell. Identical to `Cell::default()`.
    pub const DEAD: Cell = Cell {
        alive: false,
        owner: PlayerId::NEUTRAL,
        kind: CellKind::DEFAULT,
    };

    /// A live cell with neutral tags, as written by rule-driven births.
    pub const LIVE: Cell = Cell {
        alive: true,
        owner: PlayerId::NEUTRAL,
        kind: CellKind::DEFAULT,
    };

    /// A live cell tagged with an owner and kind.
    pub const fn owned(owner: PlayerId, kind: CellKind) -> Cell {
        Cell {
            alive: true,
            owner,
            kind,
        }
    }
}
