//! Core types for the Petri life simulator.
//!
//! This crate defines the vocabulary the rest of the workspace speaks:
//!
//! - [`Cell`]: the per-position state (alive flag plus owner/kind tags)
//! - [`PlayerId`], [`CellKind`], [`Generation`]: strongly-typed identifiers
//! - [`Pattern`]: a validated set of live-cell offsets used for seeding
//!
//! Everything here is plain data; simulation behaviour lives in
//! `petri-engine`, board storage in `petri-board`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod pattern;

pub use cell::Cell;
pub use error::PatternError;
pub use id::{CellKind, Generation, PlayerId};
pub use pattern::Pattern;
