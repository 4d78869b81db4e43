//! Benchmark profiles and utilities for the Petri life simulator.
//!
//! Provides pre-built engines for benchmarking and examples:
//!
//! - [`reference_engine`]: 100x100 board (10K cells) carrying a stirred soup
//! - [`stress_engine`]: 316x316 board (~100K cells) for stress runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use petri_engine::Engine;

/// Stirs applied while brewing a profile soup.
const STIRS: usize = 16;

/// Build a reference benchmark engine: 100x100 board (10K cells).
///
/// The board carries a soup grown deterministically from `seed`, so the
/// step benchmarks exercise the birth/death arms rather than an empty
/// sweep.
pub fn reference_engine(seed: u64) -> Engine {
    soup_engine(100, 100, seed)
}

/// Build a stress benchmark engine: 316x316 board (~100K cells).
///
/// Same soup recipe as [`reference_engine`] but at 10x the cell count.
pub fn stress_engine(seed: u64) -> Engine {
    soup_engine(316, 316, seed)
}

fn soup_engine(rows: usize, cols: usize, seed: u64) -> Engine {
    let mut engine = Engine::with_seed(rows, cols, seed).unwrap();
    for _ in 0..STIRS {
        engine.seed_random().unwrap();
        engine.step();
    }
    engine
}
