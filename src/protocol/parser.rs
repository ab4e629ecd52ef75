//! Driver command parser.
//!
//! Parses incoming text commands into structured `Command` variants that the
//! main loop can dispatch on.

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; the driver replies `readyok`.
    IsReady,

    /// Replace the engine with a freshly constructed one (X to move).
    NewGame,

    /// Blank the board, keeping the side to move.
    Reset,

    /// Drop the current player's piece into a column.
    Drop { column: i32 },

    /// Query a single cell.
    PieceAt { row: i32, column: i32 },

    /// Query the game outcome.
    State,

    /// Query the side to move.
    Turn,

    /// Load a position from notation.
    Position { notation: String },

    /// Print the board diagram.
    Show,

    /// Print a JSON snapshot of the engine.
    Snapshot,

    /// Set a driver option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Terminate the driver.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&name, args) = tokens.split_first()?;

    match name {
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "reset" => Some(Command::Reset),
        "state" => Some(Command::State),
        "turn" => Some(Command::Turn),
        "show" => Some(Command::Show),
        "snapshot" => Some(Command::Snapshot),
        "quit" => Some(Command::Quit),

        "drop" => parse_drop(args),
        "pieceat" => parse_pieceat(args),
        "position" => parse_position(args),
        "setoption" => parse_setoption(args),

        other => {
            log::warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses a signed integer argument. Any `i32` is accepted; bounds are the
/// engine's business.
fn parse_int(what: &str, token: &str) -> Option<i32> {
    match token.parse::<i32>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("invalid {} value: '{}'", what, token);
            None
        }
    }
}

/// Parses `drop <column>`.
fn parse_drop(args: &[&str]) -> Option<Command> {
    let [column] = args else {
        log::warn!("malformed drop: expected 'drop <column>'");
        return None;
    };
    let column = parse_int("column", column)?;
    Some(Command::Drop { column })
}

/// Parses `pieceat <row> <column>`.
fn parse_pieceat(args: &[&str]) -> Option<Command> {
    let [row, column] = args else {
        log::warn!("malformed pieceat: expected 'pieceat <row> <column>'");
        return None;
    };
    let row = parse_int("row", row)?;
    let column = parse_int("column", column)?;
    Some(Command::PieceAt { row, column })
}

/// Parses `position <notation>`.
fn parse_position(args: &[&str]) -> Option<Command> {
    let [notation] = args else {
        log::warn!("malformed position: expected 'position <notation>'");
        return None;
    };
    Some(Command::Position {
        notation: notation.to_string(),
    })
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(args: &[&str]) -> Option<Command> {
    if args.len() < 2 || args[0] != "name" {
        log::warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let rest = &args[1..];
    let (name_parts, value_parts) = match rest.iter().position(|&t| t == "value") {
        Some(vi) => (&rest[..vi], &rest[vi + 1..]),
        None => (rest, &rest[rest.len()..]),
    };
    if name_parts.is_empty() {
        log::warn!("malformed setoption: empty name");
        return None;
    }

    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };
    Some(Command::SetOption {
        name: name_parts.join(" "),
        value,
    })
}
