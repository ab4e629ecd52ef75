//! Text diagrams and JSON snapshots of a board.

use serde::{Deserialize, Serialize};

use crate::board::piece::Piece;
use crate::board::state::BoardEngine;

/// Renders the board as a diagram, top row first:
///
/// ```text
/// 2 | . . . .
/// 1 | O . . .
/// 0 | X X . O
///   +--------
///     0 1 2 3
/// ```
pub fn render_board<const R: usize, const C: usize>(engine: &BoardEngine<R, C>) -> String {
    let board = engine.board();
    let label_width = R.saturating_sub(1).to_string().len();
    let mut out = String::new();

    for row in (0..R).rev() {
        out.push_str(&format!("{:>w$} |", row, w = label_width));
        for piece in board.row(row) {
            out.push(' ');
            out.push(piece.to_char().unwrap_or('?'));
        }
        out.push('\n');
    }

    out.push_str(&format!("{:>w$} +{}\n", "", "-".repeat(C * 2), w = label_width));
    out.push_str(&format!("{:>w$}   ", "", w = label_width));
    let labels: Vec<String> = (0..C).map(|c| c.to_string()).collect();
    out.push_str(&labels.join(" "));
    out.push('\n');
    out
}

/// Serializable view of an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub turn: Piece,
    pub state: Piece,
    /// Cells indexed `[row][col]`, row 0 at the bottom.
    pub cells: Vec<Vec<Piece>>,
}

impl BoardSnapshot {
    pub fn capture<const R: usize, const C: usize>(engine: &BoardEngine<R, C>) -> Self {
        let board = engine.board();
        BoardSnapshot {
            rows: R,
            cols: C,
            turn: engine.turn(),
            state: engine.game_state(),
            cells: (0..R).map(|r| board.row(r).collect()).collect(),
        }
    }
}
