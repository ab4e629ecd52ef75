//! Board representation and game-state types.
//!
//! Contains the piece values, the fixed-size grid, and the engine that
//! applies drops and decides finished games.

pub mod grid;
pub mod piece;
pub mod state;

pub use grid::{Board, COLS, ROWS};
pub use piece::Piece;
pub use state::{BoardEngine, Piezas};
