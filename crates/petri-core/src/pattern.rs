//! Validated pattern footprints for seeding operations.

use smallvec::SmallVec;

use crate::error::PatternError;

/// An immutable set of live-cell offsets within a rectangular footprint.
///
/// Patterns describe a starting configuration independent of any board:
/// `rows x cols` is the bounding box, and [`cells()`](Pattern::cells)
/// lists the live positions inside it in row-major order. Seeding stamps
/// a pattern onto a board by translating those offsets.
///
/// Construction is validated; see [`PatternError`] for the rejection
/// cases. Offsets for typical library patterns fit inline without a heap
/// allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    rows: usize,
    cols: usize,
    cells: SmallVec<[(usize, usize); 8]>,
}

impl Pattern {
    /// Parse a pattern from glyph rows, `'1'` for live and `'0'` for dead.
    ///
    /// All rows must be the same non-zero length. The footprint is the
    /// row count by the row length.
    pub fn from_rows(name: &str, rows: &[&str]) -> Result<Pattern, PatternError> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.chars().count(),
            _ => return Err(PatternError::Empty),
        };

        let mut cells: SmallVec<[(usize, usize); 8]> = SmallVec::new();
        for (r, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != expected {
                return Err(PatternError::RaggedRows {
                    row: r,
                    expected,
                    actual,
                });
            }
            for (c, glyph) in row.chars().enumerate() {
                match glyph {
                    '1' => cells.push((r, c)),
                    '0' => {}
                    other => {
                        return Err(PatternError::InvalidGlyph {
                            row: r,
                            col: c,
                            glyph: other,
                        })
                    }
                }
            }
        }

        Ok(Pattern {
            name: name.to_string(),
            rows: rows.len(),
            cols: expected,
            cells,
        })
    }

    /// Build a pattern from explicit live-cell offsets.
    ///
    /// Offsets are sorted into row-major order and deduplicated. Every
    /// offset must lie inside the declared `rows x cols` footprint.
    pub fn from_cells(
        name: &str,
        rows: usize,
        cols: usize,
        cells: &[(usize, usize)],
    ) -> Result<Pattern, PatternError> {
        if rows == 0 || cols == 0 {
            return Err(PatternError::Empty);
        }
        for &(r, c) in cells {
            if r >= rows || c >= cols {
                return Err(PatternError::CellOutOfBounds {
                    row: r,
                    col: c,
                    rows,
                    cols,
                });
            }
        }

        let mut cells: SmallVec<[(usize, usize); 8]> = cells.iter().copied().collect();
        cells.sort_unstable();
        cells.dedup();

        Ok(Pattern {
            name: name.to_string(),
            rows,
            cols,
            cells,
        })
    }

    /// Human-readable pattern name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Footprint height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Footprint width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Live-cell offsets in row-major order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }
}
