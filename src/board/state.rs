//! Game state: the grid plus the side to move.
//!
//! `BoardEngine` is the rules engine proper. Every operation reports abnormal
//! conditions through sentinel pieces rather than errors:
//!
//! - out-of-bounds column or coordinate: `Piece::Invalid`
//! - drop into a full column: `Piece::Blank`
//! - `game_state` on an unfinished board: `Piece::Invalid`
//!
//! `Invalid` means both "out of bounds" and "not over yet"; callers tell them
//! apart by which operation they called.

use super::grid::{Board, COLS, ROWS};
use super::piece::Piece;
use crate::eval::longest_runs;

/// The reference 3 x 4 configuration.
pub type Piezas = BoardEngine<ROWS, COLS>;

/// Grid and turn indicator for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEngine<const R: usize = ROWS, const C: usize = COLS> {
    board: Board<R, C>,
    turn: Piece,
}

impl<const R: usize, const C: usize> BoardEngine<R, C> {
    /// Creates an empty board with X to move.
    pub fn new() -> Self {
        BoardEngine {
            board: Board::new(),
            turn: Piece::X,
        }
    }

    /// Builds an engine from an already validated board and side to move.
    pub(crate) fn from_parts(board: Board<R, C>, turn: Piece) -> Self {
        debug_assert!(turn.is_player());
        BoardEngine { board, turn }
    }

    /// Blanks every cell. The side to move is left as it was.
    pub fn reset(&mut self) {
        self.board.clear();
    }

    /// Drops the current player's piece into `column`.
    ///
    /// Returns the placed piece, `Blank` if the column is full, or `Invalid`
    /// if the column is out of bounds. The turn passes to the other player
    /// in every case, so a failed drop forfeits the move.
    pub fn drop_piece(&mut self, column: i32) -> Piece {
        let placed = match column_index::<C>(column) {
            None => Piece::Invalid,
            Some(col) => match self.board.lowest_blank(col) {
                Some(row) => {
                    self.board.set(row, col, self.turn);
                    self.turn
                }
                None => Piece::Blank,
            },
        };
        log::debug!("drop {} by {} -> {}", column, self.turn, placed);
        self.turn = self.turn.opponent();
        placed
    }

    /// Returns the piece at `(row, column)`, or `Invalid` when out of bounds.
    pub fn piece_at(&self, row: i32, column: i32) -> Piece {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(column)) else {
            return Piece::Invalid;
        };
        self.board.cell(row, col).unwrap_or(Piece::Invalid)
    }

    /// Returns the winner of a completed board, `Blank` for a tie, or
    /// `Invalid` while any cell is still Blank.
    pub fn game_state(&self) -> Piece {
        if !self.board.is_full() {
            return Piece::Invalid;
        }
        longest_runs(&self.board).winner()
    }

    /// The player whose piece the next drop places.
    pub fn turn(&self) -> Piece {
        self.turn
    }

    pub fn board(&self) -> &Board<R, C> {
        &self.board
    }
}

impl<const R: usize, const C: usize> Default for BoardEngine<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

fn column_index<const C: usize>(column: i32) -> Option<usize> {
    usize::try_from(column).ok().filter(|&c| c < C)
}
