//! Petri Quickstart — a complete, minimal simulation from scratch.
//!
//! Demonstrates:
//!   1. Creating an engine with a bounded board
//!   2. Stamping a library pattern (glider) and watching it travel
//!   3. Stepping and reading per-step metrics
//!   4. Reseeding with the acorn methuselah
//!   5. Resetting to a fresh deterministic run
//!
//! Run with:
//!   cargo run --example quickstart

use petri_board::Board;
use petri_engine::Engine;

// ─── Board parameters ───────────────────────────────────────────

const ROWS: usize = 10;
const COLS: usize = 20;

// ─── Rendering ──────────────────────────────────────────────────

/// Render a board as one '#'/'.' line per row.
fn render(board: &Board) -> String {
    let mut out = String::with_capacity(board.rows() * (board.cols() + 3));
    for row in board.iter_rows() {
        out.push_str("  ");
        for cell in row {
            out.push(if cell.alive { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Petri Quickstart ===\n");

    // 1. Create an engine: all cells dead, generation 0.
    let mut engine = Engine::new(ROWS, COLS)?;
    println!(
        "Board: {}x{}, population {}, generation {}",
        engine.rows(),
        engine.cols(),
        engine.population(),
        engine.generation(),
    );

    // 2. Stamp a glider from the pattern library, centred.
    let glider = petri_patterns::by_name("glider").ok_or("pattern library is missing glider")?;
    engine.seed_pattern(&glider)?;
    println!("\nGlider at generation {}:", engine.generation());
    print!("{}", render(engine.snapshot()));

    // 3. A glider translates one cell down-right every 4 generations.
    for _ in 0..2 {
        for _ in 0..4 {
            engine.step();
        }
        println!("Generation {}:", engine.generation());
        print!("{}", render(engine.snapshot()));
    }

    // 4. Reseed with the acorn and let it run, reading metrics.
    engine.seed_acorn()?;
    println!("Acorn seeded: population {}", engine.population());
    for _ in 0..120 {
        engine.step();
        let gen = engine.generation().0;
        if gen % 30 == 0 {
            let m = engine.last_metrics();
            println!(
                "  gen {:>3}: population={:>3}, births={:>2}, deaths={:>2}, time={}μs",
                gen, m.population, m.births, m.deaths, m.total_us,
            );
        }
    }

    // 5. Reset and verify the rewind.
    engine.reset(7);
    println!(
        "\nReset to seed {}: population {}, generation {}",
        engine.seed(),
        engine.population(),
        engine.generation(),
    );

    println!("Done.");
    Ok(())
}
