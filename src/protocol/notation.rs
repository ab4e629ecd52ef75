//! Position notation.
//!
//! A position is a single token: the rows from top to bottom separated by
//! '/', one character per cell ('X', 'O' or '.'), followed by a final
//! section naming the side to move ('x' or 'o').
//!
//! The empty 3 x 4 board with X to move is `..../..../..../x`.

use crate::board::grid::Board;
use crate::board::piece::Piece;
use crate::board::state::BoardEngine;

/// Errors that can occur when parsing a position.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("expected {expected} sections separated by '/', got {got}")]
    WrongSectionCount { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    WrongRowWidth { row: usize, expected: usize, got: usize },

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error("invalid side to move: '{0}'")]
    InvalidTurn(String),

    #[error("floating piece at row {row}, column {col}")]
    FloatingPiece { row: usize, col: usize },
}

/// Parses a position into an engine.
///
/// Rejects boards where a piece sits above a Blank cell in its column, since
/// such a position cannot be reached by dropping.
pub fn parse_position<const R: usize, const C: usize>(
    notation: &str,
) -> Result<BoardEngine<R, C>, PositionError> {
    let sections: Vec<&str> = notation.trim().split('/').collect();
    if sections.len() != R + 1 {
        return Err(PositionError::WrongSectionCount {
            expected: R + 1,
            got: sections.len(),
        });
    }

    let mut board = Board::<R, C>::new();
    for (i, section) in sections[..R].iter().enumerate() {
        let row = R - 1 - i;
        let width = section.chars().count();
        if width != C {
            return Err(PositionError::WrongRowWidth {
                row,
                expected: C,
                got: width,
            });
        }
        for (col, c) in section.chars().enumerate() {
            let piece = Piece::from_char(c).ok_or(PositionError::InvalidCell(c))?;
            board.set(row, col, piece);
        }
    }

    for col in 0..C {
        let height = board.column_height(col);
        if let Some(row) = (height..R).find(|&row| board.cell(row, col) != Some(Piece::Blank)) {
            return Err(PositionError::FloatingPiece { row, col });
        }
    }

    let turn = match sections[R] {
        "x" => Piece::X,
        "o" => Piece::O,
        other => return Err(PositionError::InvalidTurn(other.to_string())),
    };

    log::debug!("loaded position {}", notation.trim());
    Ok(BoardEngine::from_parts(board, turn))
}

/// Encodes an engine's board and side to move as position notation.
pub fn encode_position<const R: usize, const C: usize>(engine: &BoardEngine<R, C>) -> String {
    let board = engine.board();
    let mut out = String::with_capacity(R * (C + 1) + 1);
    for row in (0..R).rev() {
        out.extend(board.row(row).filter_map(Piece::to_char));
        out.push('/');
    }
    out.push(if engine.turn() == Piece::O { 'o' } else { 'x' });
    out
}
