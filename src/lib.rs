//! Piezas rules engine library.
//!
//! Exposes the board engine, longest-run evaluation, text protocol, and
//! self-play modules for use by integration tests and the binaries.

pub mod board;
pub mod engine;
pub mod eval;
pub mod protocol;
pub mod selfplay;

pub use board::{Board, BoardEngine, Piece, Piezas, COLS, ROWS};
