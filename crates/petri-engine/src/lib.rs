//! Deterministic Game of Life engine with double-buffered stepping.
//!
//! This crate provides [`Engine`], which advances a bounded board of
//! [`petri_core::Cell`]s one generation at a time. The working state is
//! a pair of padded boards that swap roles every step, so each
//! generation is computed entirely from a frozen copy of the previous
//! one; a separate published board answers all reads and never shows a
//! half-stepped state.
//!
//! Randomised seeding draws from a ChaCha8 stream owned by the engine,
//! so a run is fully reproducible from `(rows, cols, seed)` and the
//! sequence of calls made against it.
//!
//! ```
//! use petri_engine::Engine;
//!
//! let mut engine = Engine::new(16, 16)?;
//! engine.seed_acorn()?;
//! engine.step();
//! assert!(engine.population() > 0);
//! # Ok::<(), petri_engine::EngineError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod metrics;

pub use engine::Engine;
pub use error::EngineError;
pub use metrics::StepMetrics;
