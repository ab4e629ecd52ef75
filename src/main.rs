//! Piezas command driver.
//!
//! Reads commands from stdin and writes responses to stdout, one command per
//! line. Diagnostics go to stderr through `env_logger` (set `RUST_LOG`).

use std::io::{self, BufRead};
use std::process;

use piezas::engine::{Engine, Flow};
use piezas::protocol::parser::parse_command;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        log::error!("driver stopped: {}", e);
        process::exit(1);
    }
}

/// Runs the command loop until `quit` or end of input.
fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        if engine.handle(cmd, &mut out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
