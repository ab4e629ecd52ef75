//! Integration tests for the piezas driver binary.
//!
//! Tests full command sessions by spawning the driver process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the driver and collects stdout lines.
fn run_driver(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_piezas");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start piezas");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

#[test]
fn isready_response() {
    let lines = run_driver(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn unknown_and_malformed_commands_are_ignored() {
    let lines = run_driver(&["foobar", "drop", "drop x", "pieceat 1", "quit"]);
    assert!(lines.is_empty());
}

#[test]
fn empty_lines_are_ignored() {
    let lines = run_driver(&["", "  ", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn end_of_input_ends_session() {
    let lines = run_driver(&["drop 0"]);
    assert_eq!(lines, vec!["dropped X"]);
}

#[test]
fn commands_after_quit_are_not_processed() {
    let lines = run_driver(&["isready", "quit", "isready"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn row_major_fill_session_is_a_tie() {
    let mut script: Vec<String> = [0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]
        .iter()
        .map(|c| format!("drop {}", c))
        .collect();
    script.push("state".to_string());
    script.push("quit".to_string());
    let script: Vec<&str> = script.iter().map(String::as_str).collect();

    let lines = run_driver(&script);
    assert_eq!(lines.len(), 13);
    for (i, line) in lines[..12].iter().enumerate() {
        let expected = if i % 2 == 0 { "dropped X" } else { "dropped O" };
        assert_eq!(line, expected);
    }
    assert_eq!(lines[12], "state Blank");
}

#[test]
fn wasted_turns_let_o_fill_the_board() {
    let mut script = Vec::new();
    for _ in 0..3 {
        for col in 0..4 {
            script.push("drop -1".to_string());
            script.push(format!("drop {}", col));
        }
    }
    script.push("state".to_string());
    let script: Vec<&str> = script.iter().map(String::as_str).collect();

    let lines = run_driver(&script);
    assert!(lines[..24]
        .chunks(2)
        .all(|pair| pair[0] == "dropped Invalid" && pair[1] == "dropped O"));
    assert_eq!(lines.last().unwrap(), "state O");
}

#[test]
fn full_column_then_queries() {
    let lines = run_driver(&[
        "drop 2", "drop 2", "drop 2", "drop 2", "turn", "pieceat 2 2", "pieceat 3 2", "state",
    ]);
    assert_eq!(
        lines,
        vec![
            "dropped X",
            "dropped O",
            "dropped X",
            "dropped Blank",
            "turn X",
            "piece X",
            "piece Invalid",
            "state Invalid",
        ]
    );
}

#[test]
fn reset_keeps_turn_parity() {
    let lines = run_driver(&["drop 0", "reset", "pieceat 0 0", "turn", "drop 0"]);
    assert_eq!(lines, vec!["dropped X", "piece Blank", "turn O", "dropped O"]);
}

#[test]
fn position_then_show() {
    let lines = run_driver(&["position ..../O.../XX.O/x", "show", "turn"]);
    assert_eq!(
        lines,
        vec![
            "2 | . . . .",
            "1 | O . . .",
            "0 | X X . O",
            "  +--------",
            "    0 1 2 3",
            "turn X",
        ]
    );
}

#[test]
fn invalid_position_is_ignored() {
    let lines = run_driver(&["drop 1", "position ..../.X../..../x", "pieceat 0 1", "turn"]);
    assert_eq!(lines, vec!["dropped X", "piece X", "turn O"]);
}

#[test]
fn snapshot_reports_finished_game() {
    let lines = run_driver(&["position XXXX/XOXO/XOXO/x", "snapshot"]);
    assert_eq!(lines.len(), 1);
    let json: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(json["rows"], 3);
    assert_eq!(json["cols"], 4);
    assert_eq!(json["state"], "X");
    assert_eq!(json["cells"][2][0], "X");
}
