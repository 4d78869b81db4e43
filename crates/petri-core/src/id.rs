//! Strongly-typed identifiers carried by cells and the engine.

use std::fmt;

/// Identifies the player that owns a live cell.
///
/// The classic ruleset never inspects ownership; the tag exists so that
/// multi-player variants can colour births and territory without changing
/// the board representation. `PlayerId::NEUTRAL` marks unowned cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// The unowned player tag, used for rule-driven births and dead cells.
    pub const NEUTRAL: PlayerId = PlayerId(0);
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Distinguishes cell variants within a single player's population.
///
/// Reserved for rule extensions (immortal seeds, spawner cells and the
/// like). The classic ruleset carries it through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKind(pub u32);

impl CellKind {
    /// The ordinary cell kind.
    pub const DEFAULT: CellKind = CellKind(0);
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellKind {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing generation counter.
///
/// Incremented each time the simulation advances one step. Seeding and
/// reset operations do not advance it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    pub const fn next(self) -> Generation {
        Generation(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
