//! Board storage for the Petri life simulator.
//!
//! A [`Board`] is a dense `rows x cols` grid of [`petri_core::Cell`]
//! values in one contiguous row-major allocation. It provides indexing,
//! row views, fills and dimension-checked bulk copies, and nothing else:
//! the generation-advance algorithm lives in `petri-engine`, which owns
//! three boards (two padded working buffers and the published snapshot).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod error;

pub use board::Board;
pub use error::BoardError;
