//! Classic starting patterns for the Petri life simulator.
//!
//! Each constructor returns a ready-made [`Pattern`] from the standard
//! Life census: still lifes ([`block`]), oscillators ([`blinker`],
//! [`toad`], [`beacon`]), the [`glider`] spaceship, and the long-lived
//! methuselahs ([`acorn`], [`r_pentomino`]). [`by_name`] resolves a
//! pattern from user input for demo binaries.
//!
//! Pattern literals are fixed and verified by this crate's tests, so the
//! constructors return `Pattern` directly rather than a `Result`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use petri_core::Pattern;

/// Names accepted by [`by_name`], in the order the constructors appear.
pub const NAMES: [&str; 7] = [
    "acorn",
    "block",
    "blinker",
    "glider",
    "toad",
    "beacon",
    "r-pentomino",
];

/// The acorn methuselah: 7 cells that run for over 5000 generations.
pub fn acorn() -> Pattern {
    from_fixed_rows("acorn", &["0100000", "0001000", "1100111"])
}

/// The 2x2 block, the smallest still life.
pub fn block() -> Pattern {
    from_fixed_rows("block", &["11", "11"])
}

/// The blinker, a period-2 oscillator of three cells in a row.
pub fn blinker() -> Pattern {
    from_fixed_rows("blinker", &["111"])
}

/// The glider, a spaceship that travels one cell diagonally every
/// 4 generations (down and to the right in this orientation).
pub fn glider() -> Pattern {
    from_fixed_rows("glider", &["010", "001", "111"])
}

/// The toad, a period-2 oscillator.
pub fn toad() -> Pattern {
    from_fixed_rows("toad", &["0111", "1110"])
}

/// The beacon, a period-2 oscillator of two kissing blocks.
pub fn beacon() -> Pattern {
    from_fixed_rows("beacon", &["1100", "1100", "0011", "0011"])
}

/// The r-pentomino methuselah: 5 cells that stabilise after 1103
/// generations.
pub fn r_pentomino() -> Pattern {
    from_fixed_rows("r-pentomino", &["011", "110", "010"])
}

/// Look up a pattern by its [`NAMES`] entry. Matching is
/// case-insensitive; underscores are treated as hyphens.
pub fn by_name(name: &str) -> Option<Pattern> {
    match name.to_ascii_lowercase().replace('_', "-").as_str() {
        "acorn" => Some(acorn()),
        "block" => Some(block()),
        "blinker" => Some(blinker()),
        "glider" => Some(glider()),
        "toad" => Some(toad()),
        "beacon" => Some(beacon()),
        "r-pentomino" => Some(r_pentomino()),
        _ => None,
    }
}

fn from_fixed_rows(name: &str, rows: &[&str]) -> Pattern {
    Pattern::from_rows(name, rows).expect("pattern literal validated by tests")
}
