//! Driver session state.
//!
//! Holds the board engine and driver options between commands, and writes
//! the response for each command to the supplied output.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::board::piece::Piece;
use crate::board::state::Piezas;
use crate::protocol::notation::{parse_position, PositionError};
use crate::protocol::parser::Command;
use crate::protocol::render::{render_board, BoardSnapshot};

/// Option that prints the board diagram after every drop.
pub const SHOW_AFTER_DROP: &str = "ShowAfterDrop";

/// What the main loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Holds the mutable state of the driver between commands.
pub struct Engine {
    pub game: Piezas,
    pub options: HashMap<String, String>,
}

impl Engine {
    /// Creates a session with a fresh board and no options set.
    pub fn new() -> Self {
        Engine {
            game: Piezas::new(),
            options: HashMap::new(),
        }
    }

    /// Replaces the engine with a freshly constructed one, X to move.
    pub fn new_game(&mut self) {
        self.game = Piezas::new();
    }

    /// Loads a position, leaving the current game untouched on failure.
    pub fn set_position(&mut self, notation: &str) -> Result<(), PositionError> {
        self.game = parse_position(notation)?;
        Ok(())
    }

    /// Sets a driver option. A missing value is stored as the empty string.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    fn show_after_drop(&self) -> bool {
        self.options
            .get(SHOW_AFTER_DROP)
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false)
    }

    /// Executes one command, writing its response to `out`.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        match cmd {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::NewGame => self.new_game(),
            Command::Reset => self.game.reset(),
            Command::Drop { column } => self.handle_drop(column, out)?,
            Command::PieceAt { row, column } => {
                writeln!(out, "piece {}", self.game.piece_at(row, column))?
            }
            Command::State => writeln!(out, "state {}", self.game.game_state())?,
            Command::Turn => writeln!(out, "turn {}", self.game.turn())?,
            Command::Position { notation } => {
                if let Err(e) = self.set_position(&notation) {
                    log::warn!("failed to parse position '{}': {}", notation, e);
                }
            }
            Command::Show => write!(out, "{}", render_board(&self.game))?,
            Command::Snapshot => {
                let snapshot = BoardSnapshot::capture(&self.game);
                serde_json::to_writer(&mut *out, &snapshot)?;
                writeln!(out)?;
            }
            Command::SetOption { name, value } => self.set_option(name, value),
            Command::Quit => return Ok(Flow::Quit),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    fn handle_drop<W: Write>(&mut self, column: i32, out: &mut W) -> io::Result<()> {
        let placed = self.game.drop_piece(column);
        writeln!(out, "dropped {}", placed)?;
        if placed.is_player() && self.show_after_drop() {
            write!(out, "{}", render_board(&self.game))?;
        }
        if placed.is_player() {
            let state = self.game.game_state();
            if state != Piece::Invalid {
                log::info!("game complete: {}", state);
            }
        }
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::parser::parse_command;

    /// Runs a script of commands and returns the combined output.
    fn run(engine: &mut Engine, script: &[&str]) -> String {
        let mut output = Vec::new();
        for line in script {
            if let Some(cmd) = parse_command(line) {
                engine.handle(cmd, &mut output).unwrap();
            }
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn new_engine_has_fresh_game() {
        let engine = Engine::new();
        assert_eq!(engine.game, Piezas::new());
        assert!(engine.options.is_empty());
    }

    #[test]
    fn drop_reports_placed_piece() {
        let mut engine = Engine::new();
        let out = run(&mut engine, &["drop 0", "drop 9", "drop 0"]);
        assert_eq!(out, "dropped X\ndropped Invalid\ndropped X\n");
    }

    #[test]
    fn full_column_reports_blank() {
        let mut engine = Engine::new();
        let out = run(&mut engine, &["drop 1", "drop 1", "drop 1", "drop 1"]);
        assert_eq!(out.lines().last(), Some("dropped Blank"));
    }

    #[test]
    fn queries() {
        let mut engine = Engine::new();
        let out = run(
            &mut engine,
            &["drop 2", "pieceat 0 2", "pieceat 5 5", "state", "turn"],
        );
        assert_eq!(
            out,
            "dropped X\npiece X\npiece Invalid\nstate Invalid\nturn O\n"
        );
    }

    #[test]
    fn reset_keeps_turn_newgame_does_not() {
        let mut engine = Engine::new();
        let out = run(&mut engine, &["drop 0", "reset", "turn", "pieceat 0 0"]);
        assert_eq!(out, "dropped X\nturn O\npiece Blank\n");

        let out = run(&mut engine, &["newgame", "turn"]);
        assert_eq!(out, "turn X\n");
    }

    #[test]
    fn position_then_state() {
        let mut engine = Engine::new();
        let out = run(&mut engine, &["position XXXX/XXXX/XXXX/o", "state", "turn"]);
        assert_eq!(out, "state X\nturn O\n");
    }

    #[test]
    fn bad_position_keeps_current_game() {
        let mut engine = Engine::new();
        run(&mut engine, &["drop 3"]);
        let before = engine.game.clone();
        assert!(engine.set_position("nonsense").is_err());
        assert_eq!(engine.game, before);
    }

    #[test]
    fn show_after_drop_option() {
        let mut engine = Engine::new();
        let out = run(
            &mut engine,
            &["setoption name ShowAfterDrop value true", "drop 1"],
        );
        assert!(out.starts_with("dropped X\n"));
        assert!(out.contains("0 | . X . ."));

        let out = run(&mut engine, &["drop -1"]);
        assert_eq!(out, "dropped Invalid\n");
    }

    #[test]
    fn snapshot_is_one_json_line() {
        let mut engine = Engine::new();
        let out = run(&mut engine, &["drop 0", "snapshot"]);
        let line = out.lines().nth(1).unwrap();
        let snap: BoardSnapshot = serde_json::from_str(line).unwrap();
        assert_eq!(snap.turn, Piece::O);
        assert_eq!(snap.cells[0][0], Piece::X);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut engine = Engine::new();
        let mut out = Vec::new();
        assert_eq!(engine.handle(Command::IsReady, &mut out).unwrap(), Flow::Continue);
        assert_eq!(engine.handle(Command::Quit, &mut out).unwrap(), Flow::Quit);
    }
}
