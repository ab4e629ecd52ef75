//! Piece values stored on (or reported about) the board.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A board cell value, or a sentinel answer from a query.
///
/// Only `Blank`, `X` and `O` are ever stored in the grid. `Invalid` is
/// returned for out-of-bounds requests and for games that are not over yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Blank,
    X,
    O,
    Invalid,
}

impl Piece {
    /// Returns the other player. Non-player values are returned unchanged.
    pub const fn opponent(self) -> Piece {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
            other => other,
        }
    }

    /// True for the two placeable values, `X` and `O`.
    pub const fn is_player(self) -> bool {
        matches!(self, Piece::X | Piece::O)
    }

    /// Returns the single-character cell notation, or `None` for `Invalid`.
    pub const fn to_char(self) -> Option<char> {
        match self {
            Piece::Blank => Some('.'),
            Piece::X => Some('X'),
            Piece::O => Some('O'),
            Piece::Invalid => None,
        }
    }

    /// Parses a cell from its single-character notation.
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            '.' => Some(Piece::Blank),
            'X' => Some(Piece::X),
            'O' => Some(Piece::O),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Blank => "Blank",
            Piece::X => "X",
            Piece::O => "O",
            Piece::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}
