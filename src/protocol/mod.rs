//! Text protocol handling.
//!
//! Position notation, board rendering and JSON snapshots, and the command
//! parser for the driver's main loop.

pub mod notation;
pub mod parser;
pub mod render;

pub use notation::{encode_position, parse_position, PositionError};
pub use parser::{parse_command, Command};
pub use render::{render_board, BoardSnapshot};
