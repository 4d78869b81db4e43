//! Petri Soup — stirred random evolution.
//!
//! Demonstrates:
//!   1. Seeded construction for reproducible runs
//!   2. Stirring the board with repeated random-block toggles
//!   3. A long run with a periodic population census
//!   4. Replaying the same seed and getting the same board
//!
//! Run with:
//!   cargo run --example soup

use petri_engine::Engine;

// ─── Soup parameters ────────────────────────────────────────────

const ROWS: usize = 24;
const COLS: usize = 48;
const SEED: u64 = 0xCAFE;
const STIRS: usize = 8;
const GENERATIONS: usize = 300;

/// Build a soup: stir the centre block, step once between stirs so
/// the toggles smear outward instead of cancelling in place.
fn brew(seed: u64) -> Result<Engine, petri_engine::EngineError> {
    let mut engine = Engine::with_seed(ROWS, COLS, seed)?;
    for _ in 0..STIRS {
        engine.seed_random()?;
        engine.step();
    }
    Ok(engine)
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Petri Soup ===\n");

    let mut engine = brew(SEED)?;
    println!(
        "Brewed {}x{} soup from seed {:#x}: population {} after {} stirs",
        engine.rows(),
        engine.cols(),
        engine.seed(),
        engine.population(),
        STIRS,
    );

    // Long run with a census every 50 generations.
    let mut peak = engine.population();
    let mut peak_gen = engine.generation().0;
    for _ in 0..GENERATIONS {
        engine.step();
        if engine.population() > peak {
            peak = engine.population();
            peak_gen = engine.generation().0;
        }
        let gen = engine.generation().0;
        if gen % 50 == 0 {
            let m = engine.last_metrics();
            println!(
                "  gen {:>3}: population={:>4}, births={:>3}, deaths={:>3}, survivors={:>3}, time={}μs",
                gen, m.population, m.births, m.deaths, m.survivors, m.total_us,
            );
        }
    }
    println!("Peak population: {} at generation {}", peak, peak_gen);

    // Same seed, same call sequence: the replay must match exactly.
    let mut replay = brew(SEED)?;
    for _ in 0..GENERATIONS {
        replay.step();
    }
    println!(
        "Replay from seed {:#x} matches: {}",
        SEED,
        replay.owned_snapshot() == engine.owned_snapshot(),
    );

    println!("Done.");
    Ok(())
}
