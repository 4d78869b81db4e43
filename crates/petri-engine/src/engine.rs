//! Double-buffered generation-advance engine.
//!
//! [`Engine`] is the top-level simulation type. It maintains two padded
//! working boards that alternate between "previous generation" (read
//! side) and "next generation" (write side) roles, plus a published
//! board that answers all external queries.
//!
//! The lifecycle is:
//! 1. [`Engine::new`] / [`Engine::with_seed`]: allocate all three
//!    boards once, everything dead
//! 2. Seed via [`seed_random()`](Engine::seed_random),
//!    [`seed_acorn()`](Engine::seed_acorn) or
//!    [`seed_pattern()`](Engine::seed_pattern)
//! 3. [`step()`](Engine::step): advance one generation
//! 4. Read via [`snapshot()`](Engine::snapshot),
//!    [`owned_snapshot()`](Engine::owned_snapshot) or
//!    [`copy_snapshot_into()`](Engine::copy_snapshot_into)

use std::fmt;
use std::mem;
use std::time::Instant;

use petri_board::Board;
use petri_core::{Cell, Generation, Pattern};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::EngineError;
use crate::metrics::StepMetrics;

/// All 8 neighbour offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Count live neighbours of padded position `(y, x)` in `prev`.
///
/// Callers guarantee `(y, x)` is a play-area position, so every offset
/// lands inside the padded board (at worst on the dead border).
fn live_neighbours(prev: &Board, y: usize, x: usize) -> usize {
    OFFSETS_8
        .iter()
        .filter(|&&(dy, dx)| {
            let ny = (y as isize + dy) as usize;
            let nx = (x as isize + dx) as usize;
            prev.row(ny)[nx].alive
        })
        .count()
}

/// Double-buffered Game of Life engine.
///
/// The engine owns three boards:
///
/// ```text
/// current: (rows+2) x (cols+2)  ←─ latest generation, padded
/// scratch: (rows+2) x (cols+2)  ←─ previous generation, next swap target
/// public:  rows x cols          ←─ published copy, answers all queries
/// ```
///
/// `current` and `scratch` carry a one-cell dead border around the play
/// area, so neighbour counting at the edges needs no bounds checks; the
/// play area occupies padded indices `1..=rows` and `1..=cols`. Each
/// [`step()`](Engine::step) swaps the two working boards (a pointer
/// exchange, not a copy), recomputes every play-area cell of `current`
/// from the frozen `scratch`, then copies the interior into `public`.
/// External accessors only ever see `public`, so a partial generation is
/// never observable.
///
/// All methods take `&self` or `&mut self` with no interior mutability.
/// The borrow checker therefore prevents stepping while a
/// [`snapshot()`](Engine::snapshot) borrow is held.
pub struct Engine {
    /// Play-area height, fixed at construction.
    rows: usize,
    /// Play-area width, fixed at construction.
    cols: usize,
    /// Padded board holding the latest generation.
    current: Board,
    /// Padded board holding the previous generation; write target after swap.
    scratch: Board,
    /// Unpadded copy of `current`'s play area, rewritten on publish.
    public: Board,
    /// Generations advanced since construction or the last reset.
    generation: Generation,
    /// Deterministic RNG driving [`seed_random()`](Engine::seed_random).
    rng: ChaCha8Rng,
    /// Seed the RNG was last initialised from.
    seed: u64,
    /// Statistics from the most recent step.
    metrics: StepMetrics,
}

impl Engine {
    /// Maximum size of either axis.
    ///
    /// Keeps play-area indices interoperable with renderers that
    /// address pixels with `i32` coordinates.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Create an engine with a `rows x cols` play area, all cells dead,
    /// using the default RNG seed of 0.
    ///
    /// Returns `Err(EngineError::EmptyBoard)` if either dimension is 0,
    /// or `Err(EngineError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Engine::MAX_DIM).
    pub fn new(rows: usize, cols: usize) -> Result<Engine, EngineError> {
        Self::with_seed(rows, cols, 0)
    }

    /// Create an engine with a caller-chosen RNG seed.
    ///
    /// Two engines built with the same dimensions and seed produce
    /// identical boards under identical call sequences.
    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Result<Engine, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::EmptyBoard);
        }
        if rows > Self::MAX_DIM {
            return Err(EngineError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(EngineError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Engine {
            rows,
            cols,
            current: Board::new(rows + 2, cols + 2),
            scratch: Board::new(rows + 2, cols + 2),
            public: Board::new(rows, cols),
            generation: Generation(0),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            metrics: StepMetrics::default(),
        })
    }

    /// Play-area height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Play-area width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Generations advanced since construction or the last reset.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Seed the RNG was last initialised from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Live cells in the published board.
    pub fn population(&self) -> usize {
        self.public.population()
    }

    /// Statistics from the most recent step.
    ///
    /// All-zero until the first [`step()`](Engine::step) after
    /// construction or reset.
    pub fn last_metrics(&self) -> StepMetrics {
        self.metrics
    }

    /// Advance the simulation by exactly one generation.
    ///
    /// Applies the classic rule to every play-area cell using only
    /// neighbour counts from the pre-call state:
    ///
    /// - 2 live neighbours: the cell carries through unchanged (a live
    ///   cell survives with its owner and kind, a dead cell stays dead)
    /// - 3 live neighbours: a live cell survives with its identity; a
    ///   dead cell becomes a fresh [`Cell::LIVE`] birth
    /// - anything else: the cell becomes [`Cell::DEAD`]
    ///
    /// Every play-area cell is written every step, so no stale buffer
    /// content can survive a swap. The published board is replaced only
    /// after the full pass completes.
    pub fn step(&mut self) {
        let start = Instant::now();

        // Role exchange: scratch now holds the previous generation and
        // current becomes the write target.
        mem::swap(&mut self.current, &mut self.scratch);

        let mut births = 0u64;
        let mut deaths = 0u64;
        let mut survivors = 0u64;

        for y in 1..=self.rows {
            for x in 1..=self.cols {
                let prev = self.scratch.row(y)[x];
                let next = match (prev.alive, live_neighbours(&self.scratch, y, x)) {
                    (_, 2) => prev,
                    (true, 3) => prev,
                    (false, 3) => Cell::LIVE,
                    _ => Cell::DEAD,
                };
                if next.alive && prev.alive {
                    survivors += 1;
                } else if next.alive {
                    births += 1;
                } else if prev.alive {
                    deaths += 1;
                }
                self.current.row_mut(y)[x] = next;
            }
        }

        self.publish();
        self.generation = self.generation.next();
        self.metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            births,
            deaths,
            survivors,
            population: (births + survivors) as usize,
        };
    }

    /// Toggle a random 4x4 block of cells around the board centre.
    ///
    /// Draws 16 booleans from the engine's seeded RNG, one per block
    /// position in row-major order, and inverts the `alive` flag where
    /// the draw is `true` (owner and kind tags are left in place). The
    /// block covers play-area rows `rows/2 - 1 ..= rows/2 + 2` and the
    /// analogous columns in 1-indexed padded coordinates, so odd
    /// dimensions bias it one cell off exact centre.
    ///
    /// This is an overlay, not a reseed: cells outside the block keep
    /// their state, and repeated calls stir the board further.
    ///
    /// Returns `Err(EngineError::BoardTooSmall)` without touching any
    /// state if the play area is smaller than 4x4.
    pub fn seed_random(&mut self) -> Result<(), EngineError> {
        if self.rows < 4 || self.cols < 4 {
            return Err(EngineError::BoardTooSmall {
                what: "random block".to_string(),
                min_rows: 4,
                min_cols: 4,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let y_mid = self.rows / 2;
        let x_mid = self.cols / 2;
        for y in (y_mid - 1)..=(y_mid + 2) {
            for x in (x_mid - 1)..=(x_mid + 2) {
                let toggle: bool = self.rng.random();
                if toggle {
                    let cell = &mut self.current.row_mut(y)[x];
                    cell.alive = !cell.alive;
                }
            }
        }

        self.publish();
        Ok(())
    }

    /// Reseed the board with the acorn methuselah.
    ///
    /// Equivalent to [`seed_pattern()`](Engine::seed_pattern) with
    /// [`petri_patterns::acorn()`]: every cell is cleared, then the 3x7
    /// acorn is stamped centred on the play area. Calling it twice in a
    /// row leaves the board unchanged.
    ///
    /// Returns `Err(EngineError::BoardTooSmall)` without touching any
    /// state if the play area is smaller than 3x7.
    pub fn seed_acorn(&mut self) -> Result<(), EngineError> {
        self.seed_pattern(&petri_patterns::acorn())
    }

    /// Reseed the board with an arbitrary pattern, centred.
    ///
    /// Clears every cell (a full reseed, not an overlay), then stamps
    /// `pattern` with its footprint centred on the play area: the
    /// top-left of the stamp lands at play-area position
    /// `((rows-1)/2 - (p_rows-1)/2, (cols-1)/2 - (p_cols-1)/2)`.
    /// Stamped cells are fresh neutral births. The generation counter
    /// is not advanced.
    ///
    /// Returns `Err(EngineError::BoardTooSmall)` without touching any
    /// state if the pattern's footprint does not fit.
    pub fn seed_pattern(&mut self, pattern: &Pattern) -> Result<(), EngineError> {
        if self.rows < pattern.rows() || self.cols < pattern.cols() {
            return Err(EngineError::BoardTooSmall {
                what: pattern.name().to_string(),
                min_rows: pattern.rows(),
                min_cols: pattern.cols(),
                rows: self.rows,
                cols: self.cols,
            });
        }

        self.current.fill(Cell::DEAD);
        self.scratch.fill(Cell::DEAD);

        // Play-area top-left of the centred stamp; +1 converts to
        // padded indices. Fits by the footprint check above.
        let top = (self.rows - 1) / 2 - (pattern.rows() - 1) / 2;
        let left = (self.cols - 1) / 2 - (pattern.cols() - 1) / 2;
        for &(r, c) in pattern.cells() {
            self.current.row_mut(top + r + 1)[left + c + 1] = Cell::LIVE;
        }

        self.publish();
        Ok(())
    }

    /// Kill every cell and republish. Generation counter and RNG are
    /// left alone; see [`reset()`](Engine::reset) for a full rewind.
    pub fn clear(&mut self) {
        self.current.fill(Cell::DEAD);
        self.scratch.fill(Cell::DEAD);
        self.publish();
    }

    /// Return the engine to its just-constructed state with a new seed.
    ///
    /// Kills every cell, zeroes the generation counter and metrics, and
    /// reseeds the RNG, so a reset engine replays exactly like a fresh
    /// [`Engine::with_seed`] under the same call sequence.
    pub fn reset(&mut self, seed: u64) {
        self.clear();
        self.generation = Generation(0);
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.metrics = StepMetrics::default();
    }

    /// Borrow the published board.
    ///
    /// Zero-copy; the borrow checker prevents stepping while the
    /// reference is held.
    pub fn snapshot(&self) -> &Board {
        &self.public
    }

    /// An independent copy of the published board.
    ///
    /// Unlike [`snapshot()`](Engine::snapshot), the returned board owns
    /// its cells and never changes as the engine advances.
    pub fn owned_snapshot(&self) -> Board {
        self.public.clone()
    }

    /// Copy the published board into a caller-owned board without
    /// allocating.
    ///
    /// Returns `Err(EngineError::Board(BoardError::SizeMismatch))` and
    /// leaves `dest` untouched unless its dimensions are exactly
    /// `rows() x cols()`.
    pub fn copy_snapshot_into(&self, dest: &mut Board) -> Result<(), EngineError> {
        dest.copy_from(&self.public)?;
        Ok(())
    }

    /// Copy the play area of `current` into `public`.
    fn publish(&mut self) {
        for r in 0..self.rows {
            let src = self.current.row(r + 1);
            self.public.row_mut(r).copy_from_slice(&src[1..=self.cols]);
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("generation", &self.generation)
            .field("seed", &self.seed)
            .field("population", &self.public.population())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_core::{CellKind, PlayerId};
    use proptest::prelude::*;

    /// Live play-area coordinates of the published board.
    fn live_cells(board: &Board) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (r, row) in board.iter_rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.alive {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// Set play-area cells live through the engine's padded buffer.
    fn set_live(engine: &mut Engine, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            engine.current.row_mut(r + 1)[c + 1] = Cell::LIVE;
        }
        engine.publish();
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_zero_rows_returns_error() {
        assert!(matches!(Engine::new(0, 5), Err(EngineError::EmptyBoard)));
    }

    #[test]
    fn new_zero_cols_returns_error() {
        assert!(matches!(Engine::new(5, 0), Err(EngineError::EmptyBoard)));
    }

    #[test]
    fn new_rejects_dims_exceeding_max() {
        assert!(matches!(
            Engine::new(Engine::MAX_DIM + 1, 5),
            Err(EngineError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            Engine::new(5, Engine::MAX_DIM + 1),
            Err(EngineError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn new_engine_starts_dead_at_generation_zero() {
        let e = Engine::new(4, 6).unwrap();
        assert_eq!(e.rows(), 4);
        assert_eq!(e.cols(), 6);
        assert_eq!(e.generation(), Generation(0));
        assert_eq!(e.population(), 0);
        assert_eq!(e.snapshot().rows(), 4);
        assert_eq!(e.snapshot().cols(), 6);
        assert_eq!(e.last_metrics(), StepMetrics::default());
    }

    #[test]
    fn with_seed_stores_seed() {
        let e = Engine::with_seed(4, 4, 99).unwrap();
        assert_eq!(e.seed(), 99);
    }

    // ── Rule semantics ──────────────────────────────────────────

    #[test]
    fn dead_board_stays_dead() {
        let mut e = Engine::new(6, 6).unwrap();
        for _ in 0..5 {
            e.step();
        }
        assert_eq!(e.population(), 0);
        assert_eq!(e.generation(), Generation(5));
    }

    #[test]
    fn lone_cell_dies() {
        let mut e = Engine::new(3, 3).unwrap();
        set_live(&mut e, &[(1, 1)]);
        e.step();
        assert_eq!(e.population(), 0);
    }

    #[test]
    fn single_cell_board_dies() {
        let mut e = Engine::new(1, 1).unwrap();
        set_live(&mut e, &[(0, 0)]);
        e.step();
        assert_eq!(e.population(), 0);
    }

    #[test]
    fn block_is_a_still_life() {
        let mut e = Engine::new(4, 4).unwrap();
        set_live(&mut e, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let before = e.owned_snapshot();
        for _ in 0..10 {
            e.step();
        }
        assert_eq!(e.owned_snapshot(), before);
    }

    #[test]
    fn birth_needs_exactly_three_neighbours() {
        // An L of three live cells births the fourth corner.
        let mut e = Engine::new(4, 4).unwrap();
        set_live(&mut e, &[(1, 1), (1, 2), (2, 1)]);
        e.step();
        assert!(e.snapshot().get(2, 2).unwrap().alive);
        assert_eq!(e.population(), 4);
    }

    #[test]
    fn overcrowded_cell_dies() {
        // Centre of a plus sign has 4 neighbours.
        let mut e = Engine::new(5, 5).unwrap();
        set_live(&mut e, &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]);
        e.step();
        assert!(!e.snapshot().get(2, 2).unwrap().alive);
    }

    #[test]
    fn corner_block_survives_against_the_border() {
        // A block flush against the corner: each cell still sees
        // exactly 3 live neighbours because the border reads dead.
        let mut e = Engine::new(5, 5).unwrap();
        set_live(&mut e, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let before = e.owned_snapshot();
        e.step();
        assert_eq!(e.owned_snapshot(), before);
    }

    #[test]
    fn step_increments_generation() {
        let mut e = Engine::new(3, 3).unwrap();
        e.step();
        e.step();
        assert_eq!(e.generation(), Generation(2));
    }

    // ── Owner and kind propagation ──────────────────────────────

    #[test]
    fn survivors_keep_owner_and_kind() {
        let mut e = Engine::new(4, 4).unwrap();
        let tagged = Cell::owned(PlayerId(7), CellKind(2));
        for &(r, c) in &[(1, 1), (1, 2), (2, 1), (2, 2)] {
            e.current.row_mut(r + 1)[c + 1] = tagged;
        }
        e.publish();
        e.step();
        let cell = *e.snapshot().get(1, 1).unwrap();
        assert!(cell.alive);
        assert_eq!(cell.owner, PlayerId(7));
        assert_eq!(cell.kind, CellKind(2));
    }

    #[test]
    fn births_get_neutral_tags() {
        let mut e = Engine::new(4, 4).unwrap();
        let tagged = Cell::owned(PlayerId(7), CellKind(2));
        for &(r, c) in &[(1, 1), (1, 2), (2, 1)] {
            e.current.row_mut(r + 1)[c + 1] = tagged;
        }
        e.publish();
        e.step();
        let born = *e.snapshot().get(2, 2).unwrap();
        assert!(born.alive);
        assert_eq!(born.owner, PlayerId::NEUTRAL);
        assert_eq!(born.kind, CellKind::DEFAULT);
    }

    #[test]
    fn deaths_clear_owner_and_kind() {
        let mut e = Engine::new(3, 3).unwrap();
        e.current.row_mut(2)[2] = Cell::owned(PlayerId(9), CellKind(4));
        e.publish();
        e.step();
        assert_eq!(*e.snapshot().get(1, 1).unwrap(), Cell::DEAD);
    }

    // ── Metrics ─────────────────────────────────────────────────

    #[test]
    fn metrics_account_for_births_deaths_survivors() {
        // Blinker: 2 deaths (arms), 2 births (new arms), 1 survivor (pivot).
        let mut e = Engine::new(5, 5).unwrap();
        set_live(&mut e, &[(2, 1), (2, 2), (2, 3)]);
        e.step();
        let m = e.last_metrics();
        assert_eq!(m.births, 2);
        assert_eq!(m.deaths, 2);
        assert_eq!(m.survivors, 1);
        assert_eq!(m.population, 3);
        assert_eq!(m.population, e.population());
    }

    // ── Seeding: acorn ──────────────────────────────────────────

    #[test]
    fn seed_acorn_places_seven_centred_cells() {
        let mut e = Engine::new(11, 13).unwrap();
        e.seed_acorn().unwrap();
        assert_eq!(e.population(), 7);
        // Centre (5, 6); 3x7 stamp top-left at (4, 3).
        assert_eq!(
            live_cells(e.snapshot()),
            vec![(4, 4), (5, 6), (6, 3), (6, 4), (6, 7), (6, 8), (6, 9)]
        );
        assert_eq!(e.generation(), Generation(0));
    }

    #[test]
    fn seed_acorn_is_idempotent() {
        let mut e = Engine::new(9, 11).unwrap();
        e.seed_acorn().unwrap();
        let first = e.owned_snapshot();
        e.seed_acorn().unwrap();
        assert_eq!(e.owned_snapshot(), first);
    }

    #[test]
    fn seed_acorn_replaces_prior_state() {
        let mut e = Engine::new(9, 11).unwrap();
        set_live(&mut e, &[(0, 0), (8, 10)]);
        e.seed_acorn().unwrap();
        assert_eq!(e.population(), 7);
        assert!(!e.snapshot().get(0, 0).unwrap().alive);
    }

    #[test]
    fn seed_acorn_on_minimum_board_fits() {
        let mut e = Engine::new(3, 7).unwrap();
        e.seed_acorn().unwrap();
        assert_eq!(e.population(), 7);
    }

    #[test]
    fn seed_acorn_too_small_is_error_and_leaves_state() {
        let mut e = Engine::new(3, 6).unwrap();
        set_live(&mut e, &[(1, 1)]);
        let err = e.seed_acorn().unwrap_err();
        assert!(matches!(
            err,
            EngineError::BoardTooSmall {
                min_rows: 3,
                min_cols: 7,
                ..
            }
        ));
        assert_eq!(e.population(), 1);
    }

    // ── Seeding: random block ───────────────────────────────────

    #[test]
    fn seed_random_too_small_is_error() {
        let mut e = Engine::new(3, 8).unwrap();
        assert!(matches!(
            e.seed_random(),
            Err(EngineError::BoardTooSmall {
                min_rows: 4,
                min_cols: 4,
                ..
            })
        ));
        assert_eq!(e.population(), 0);
    }

    #[test]
    fn seed_random_touches_only_the_centre_block() {
        let mut e = Engine::with_seed(10, 10, 1234).unwrap();
        e.seed_random().unwrap();
        // rows/2 = 5 → play-area rows 3..=6 (0-indexed), same for cols.
        for (r, c) in live_cells(e.snapshot()) {
            assert!((3..=6).contains(&r), "row {r} outside toggle block");
            assert!((3..=6).contains(&c), "col {c} outside toggle block");
        }
        assert!(e.population() <= 16);
    }

    #[test]
    fn seed_random_centre_block_on_odd_dimensions() {
        let mut e = Engine::with_seed(9, 9, 1234).unwrap();
        e.seed_random().unwrap();
        // rows/2 = 4 → play-area rows 2..=5 (0-indexed), same for cols.
        for (r, c) in live_cells(e.snapshot()) {
            assert!((2..=5).contains(&r), "row {r} outside toggle block");
            assert!((2..=5).contains(&c), "col {c} outside toggle block");
        }
        assert!(e.population() <= 16);
    }

    #[test]
    fn seed_random_is_deterministic_per_seed() {
        let mut a = Engine::with_seed(8, 8, 42).unwrap();
        let mut b = Engine::with_seed(8, 8, 42).unwrap();
        a.seed_random().unwrap();
        b.seed_random().unwrap();
        assert_eq!(a.owned_snapshot(), b.owned_snapshot());
    }

    #[test]
    fn seed_random_toggles_rather_than_sets() {
        // Toggling an all-live board can only kill cells, and only
        // inside the 4x4 block.
        let all: Vec<(usize, usize)> = (0..6).flat_map(|r| (0..6).map(move |c| (r, c))).collect();
        let mut saw_toggle = false;
        for seed in 0..8 {
            let mut e = Engine::with_seed(6, 6, seed).unwrap();
            set_live(&mut e, &all);
            e.seed_random().unwrap();
            assert!(e.population() >= 36 - 16);
            assert!(e.population() <= 36);
            saw_toggle |= e.population() < 36;
        }
        assert!(saw_toggle, "no seed in 0..8 flipped a single draw");
    }

    #[test]
    fn seed_random_does_not_advance_generation() {
        let mut e = Engine::new(6, 6).unwrap();
        e.seed_random().unwrap();
        assert_eq!(e.generation(), Generation(0));
    }

    // ── Seeding: patterns, clear, reset ─────────────────────────

    #[test]
    fn seed_pattern_centres_the_stamp() {
        let mut e = Engine::new(5, 5).unwrap();
        e.seed_pattern(&petri_patterns::blinker()).unwrap();
        assert_eq!(live_cells(e.snapshot()), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn seed_pattern_exact_fit_lands_at_origin() {
        let mut e = Engine::new(2, 2).unwrap();
        e.seed_pattern(&petri_patterns::block()).unwrap();
        assert_eq!(e.population(), 4);
        assert!(e.snapshot().get(0, 0).unwrap().alive);
    }

    #[test]
    fn seed_pattern_error_names_the_pattern() {
        let mut e = Engine::new(2, 2).unwrap();
        match e.seed_pattern(&petri_patterns::glider()) {
            Err(EngineError::BoardTooSmall { what, .. }) => assert_eq!(what, "glider"),
            other => panic!("expected BoardTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn clear_kills_everything() {
        let mut e = Engine::new(6, 6).unwrap();
        e.seed_random().unwrap();
        e.step();
        e.clear();
        assert_eq!(e.population(), 0);
        // Clearing is not a rewind.
        assert_eq!(e.generation(), Generation(1));
    }

    #[test]
    fn reset_replays_like_a_fresh_engine() {
        let mut fresh = Engine::with_seed(8, 8, 5).unwrap();
        fresh.seed_random().unwrap();
        fresh.step();

        let mut e = Engine::with_seed(8, 8, 77).unwrap();
        e.seed_random().unwrap();
        for _ in 0..4 {
            e.step();
        }
        e.reset(5);
        assert_eq!(e.generation(), Generation(0));
        assert_eq!(e.population(), 0);
        assert_eq!(e.seed(), 5);
        e.seed_random().unwrap();
        e.step();
        assert_eq!(e.owned_snapshot(), fresh.owned_snapshot());
    }

    // ── Snapshots ───────────────────────────────────────────────

    #[test]
    fn owned_snapshot_is_independent_of_later_steps() {
        let mut e = Engine::new(5, 5).unwrap();
        e.seed_pattern(&petri_patterns::blinker()).unwrap();
        let frozen = e.owned_snapshot();
        e.step();
        assert_ne!(e.owned_snapshot(), frozen);
        assert_eq!(live_cells(&frozen), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn mutating_an_owned_snapshot_does_not_touch_the_engine() {
        let e = Engine::new(4, 4).unwrap();
        let mut copy = e.owned_snapshot();
        copy.fill(Cell::LIVE);
        assert_eq!(e.population(), 0);
        assert_eq!(*e.snapshot(), Board::new(4, 4));
    }

    #[test]
    fn copy_snapshot_into_fills_caller_board() {
        let mut e = Engine::new(4, 4).unwrap();
        e.seed_random().unwrap();
        let mut dest = Board::new(4, 4);
        e.copy_snapshot_into(&mut dest).unwrap();
        assert_eq!(dest, e.owned_snapshot());
    }

    #[test]
    fn copy_snapshot_into_twice_without_step_is_stable() {
        let mut e = Engine::new(4, 4).unwrap();
        e.seed_random().unwrap();
        let mut first = Board::new(4, 4);
        let mut second = Board::new(4, 4);
        e.copy_snapshot_into(&mut first).unwrap();
        e.copy_snapshot_into(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn copy_snapshot_into_size_mismatch_is_error() {
        let e = Engine::new(4, 4).unwrap();
        let mut dest = Board::new(4, 5);
        assert!(matches!(
            e.copy_snapshot_into(&mut dest),
            Err(EngineError::Board(_))
        ));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn border_stays_dead_under_any_activity(
            rows in 4usize..16,
            cols in 4usize..16,
            seed in proptest::num::u64::ANY,
            stirs in 1usize..4,
            steps in 0usize..12,
        ) {
            let mut e = Engine::with_seed(rows, cols, seed).unwrap();
            for _ in 0..stirs {
                e.seed_random().unwrap();
            }
            for _ in 0..steps {
                e.step();
            }
            let padded = &e.current;
            for x in 0..cols + 2 {
                prop_assert!(!padded.row(0)[x].alive);
                prop_assert!(!padded.row(rows + 1)[x].alive);
            }
            for y in 0..rows + 2 {
                prop_assert!(!padded.row(y)[0].alive);
                prop_assert!(!padded.row(y)[cols + 1].alive);
            }
        }

        #[test]
        fn metrics_population_matches_board(
            rows in 4usize..14,
            cols in 4usize..14,
            seed in proptest::num::u64::ANY,
        ) {
            let mut e = Engine::with_seed(rows, cols, seed).unwrap();
            e.seed_random().unwrap();
            let before = e.population() as u64;
            e.step();
            let m = e.last_metrics();
            prop_assert_eq!(m.population, e.population());
            prop_assert_eq!(m.births + m.survivors, m.population as u64);
            prop_assert_eq!(m.survivors + m.deaths, before);
        }

        #[test]
        fn published_board_never_exposes_padding(
            rows in 1usize..10,
            cols in 1usize..10,
        ) {
            let e = Engine::new(rows, cols).unwrap();
            prop_assert_eq!(e.snapshot().rows(), rows);
            prop_assert_eq!(e.snapshot().cols(), cols);
            prop_assert_eq!(e.snapshot().cell_count(), rows * cols);
        }
    }
}
