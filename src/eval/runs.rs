//! Longest-run evaluation.
//!
//! A completed board is won by the player with the longest horizontal or
//! vertical run of their pieces. Diagonals do not count.

use std::cmp::Ordering;

use crate::board::grid::Board;
use crate::board::piece::Piece;

/// Longest contiguous run found for each player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongestRuns {
    pub x: usize,
    pub o: usize,
}

impl LongestRuns {
    /// The piece with the strictly longer run, or `Blank` on a tie.
    pub fn winner(&self) -> Piece {
        match self.x.cmp(&self.o) {
            Ordering::Equal => Piece::Blank,
            Ordering::Greater => Piece::X,
            Ordering::Less => Piece::O,
        }
    }

    fn record(&mut self, piece: Piece, len: usize) {
        match piece {
            Piece::X => self.x = self.x.max(len),
            Piece::O => self.o = self.o.max(len),
            _ => {}
        }
    }

    /// Walks one line once, recording every maximal run. Blank cells break runs.
    fn scan_line(&mut self, line: impl Iterator<Item = Piece>) {
        let mut current = Piece::Blank;
        let mut len = 0;
        for piece in line {
            if piece == current {
                len += 1;
            } else {
                current = piece;
                len = 1;
            }
            self.record(current, len);
        }
    }
}

/// Scans every row and every column of `board` for the longest runs.
pub fn longest_runs<const R: usize, const C: usize>(board: &Board<R, C>) -> LongestRuns {
    let mut runs = LongestRuns::default();
    for row in 0..R {
        runs.scan_line(board.row(row));
    }
    for col in 0..C {
        runs.scan_line(board.column(col));
    }
    log::trace!("longest runs: x={} o={}", runs.x, runs.o);
    runs
}
