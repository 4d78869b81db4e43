//! Dense row-major grid of cells.

use petri_core::Cell;

use crate::error::BoardError;

/// A fixed-size rectangular grid of [`Cell`]s.
///
/// Storage is a single `Vec<Cell>` in row-major order; position `(r, c)`
/// lives at index `r * cols + c`. The backing vector is sized once at
/// construction and never grows or shrinks. Rows are exposed as plain
/// slices so callers can scan without per-cell bounds checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a `rows x cols` board with every cell dead.
    ///
    /// Zero dimensions are permitted and yield an empty board.
    pub fn new(rows: usize, cols: usize) -> Board {
        Board {
            rows,
            cols,
            cells: vec![Cell::DEAD; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, `rows * cols`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the board holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Mutable access to the cell at `(row, col)`, or `None` outside the grid.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if row < self.rows && col < self.cols {
            Some(&mut self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// The row at index `row` as a slice of length [`cols()`](Board::cols).
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()`.
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.rows, "row {row} out of range for {} rows", self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Mutable view of the row at index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        assert!(row < self.rows, "row {row} out of range for {} rows", self.rows);
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// The whole backing slice in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Overwrite every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Copy every cell from `src` into this board.
    ///
    /// Returns [`BoardError::SizeMismatch`] unless both boards have
    /// identical dimensions; on error this board is untouched.
    pub fn copy_from(&mut self, src: &Board) -> Result<(), BoardError> {
        if self.rows != src.rows || self.cols != src.cols {
            return Err(BoardError::SizeMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                actual_rows: src.rows,
                actual_cols: src.cols,
            });
        }
        self.cells.copy_from_slice(&src.cells);
        Ok(())
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }
}
