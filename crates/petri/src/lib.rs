//! Petri: a deterministic Game of Life simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Petri sub-crates. For most users, adding `petri` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use petri::prelude::*;
//!
//! // A 5x5 board with a blinker stamped in the middle.
//! let mut engine = Engine::new(5, 5).unwrap();
//! engine.seed_pattern(&petri::patterns::blinker()).unwrap();
//! assert_eq!(engine.population(), 3);
//!
//! // The blinker flips between a row and a column every generation.
//! let horizontal = engine.owned_snapshot();
//! engine.step();
//! assert_ne!(engine.owned_snapshot(), horizontal);
//! engine.step();
//! assert_eq!(engine.owned_snapshot(), horizontal);
//! assert_eq!(engine.generation(), Generation(2));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `petri-core` | Cells, identity tags, pattern definitions |
//! | [`board`] | `petri-board` | Dense row-major board storage |
//! | [`patterns`] | `petri-patterns` | The built-in pattern library |
//! | [`engine`] | `petri-engine` | The double-buffered stepping engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cells, identity tags, and pattern definitions (`petri-core`).
///
/// Contains [`types::Cell`], the [`types::PlayerId`] and
/// [`types::CellKind`] tags it carries, the [`types::Generation`]
/// counter, and the validated [`types::Pattern`] type.
pub use petri_core as types;

/// Dense row-major board storage (`petri-board`).
///
/// [`board::Board`] is the grid both the engine's working buffers and
/// its published snapshots are made of.
pub use petri_board as board;

/// The built-in pattern library (`petri-patterns`).
///
/// Classic still lifes, oscillators, spaceships and methuselahs, by
/// constructor ([`patterns::acorn()`]) or by name
/// ([`patterns::by_name()`]).
pub use petri_patterns as patterns;

/// The double-buffered stepping engine (`petri-engine`).
///
/// [`engine::Engine`] owns the padded working buffers, the published
/// board, and the seeded RNG behind random seeding.
pub use petri_engine as engine;

/// Common imports for typical Petri usage.
///
/// ```rust
/// use petri::prelude::*;
/// ```
///
/// This imports the most frequently used types: the engine, the board,
/// cells with their identity tags, and the error types.
pub mod prelude {
    // Core types
    pub use petri_core::{Cell, CellKind, Generation, Pattern, PatternError, PlayerId};

    // Board storage
    pub use petri_board::{Board, BoardError};

    // Engine
    pub use petri_engine::{Engine, EngineError, StepMetrics};
}
