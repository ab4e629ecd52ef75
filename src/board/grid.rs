//! Fixed-size grid of pieces.
//!
//! Row 0 is the bottom of the board; columns fill from row 0 upward.

use super::piece::Piece;

/// Number of rows in the reference configuration.
pub const ROWS: usize = 3;
/// Number of columns in the reference configuration.
pub const COLS: usize = 4;

/// A `R x C` grid of pieces, stored as an owned array of rows.
///
/// Mutation is crate-private: only the engine places pieces, which keeps
/// every column a contiguous run of non-Blank cells starting at row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const R: usize = ROWS, const C: usize = COLS> {
    cells: [[Piece; C]; R],
}

impl<const R: usize, const C: usize> Board<R, C> {
    /// Creates a board with every cell Blank.
    pub fn new() -> Self {
        Board {
            cells: [[Piece::Blank; C]; R],
        }
    }

    pub const fn rows(&self) -> usize {
        R
    }

    pub const fn cols(&self) -> usize {
        C
    }

    /// Returns the cell at `(row, col)`, or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Piece> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Lowest Blank row in `col`, or `None` if the column is full or out of bounds.
    pub fn lowest_blank(&self, col: usize) -> Option<usize> {
        if col >= C {
            return None;
        }
        (0..R).find(|&row| self.cells[row][col] == Piece::Blank)
    }

    /// Number of pieces stacked in `col` (0 for out-of-bounds columns).
    pub fn column_height(&self, col: usize) -> usize {
        if col >= C {
            return 0;
        }
        self.lowest_blank(col).unwrap_or(R)
    }

    /// True once no cell is Blank.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&p| p != Piece::Blank)
    }

    /// Pieces of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Piece> + '_ {
        self.cells[row].iter().copied()
    }

    /// Pieces of one column, bottom to top.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().map(move |r| r[col])
    }

    /// Sets every cell back to Blank.
    pub(crate) fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Piece::Blank);
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, piece: Piece) {
        debug_assert!(piece != Piece::Invalid, "Invalid is never stored");
        self.cells[row][col] = piece;
    }
}

impl<const R: usize, const C: usize> Default for Board<R, C> {
    fn default() -> Self {
        Self::new()
    }
}
