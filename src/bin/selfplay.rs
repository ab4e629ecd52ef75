//! Self-play game generation CLI.
//!
//! Plays random Piezas games and outputs one JSON record per game.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N          Number of games to play (default: 100)
//!   --threads N        Number of parallel threads (default: 4)
//!   --seed N           Random seed, 0 for entropy (default: 0)
//!   --wasted-drops P   Probability of an out-of-bounds drop (default: 0.0)
//!   --output FILE      Output file path (default: stdout)
//!   --quiet            Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use piezas::selfplay::{self, SelfPlayConfig, SelfPlaySummary};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--games" => config.num_games = flag_value(arg, iter.next()),
            "--threads" => config.threads = flag_value(arg, iter.next()),
            "--seed" => config.seed = flag_value(arg, iter.next()),
            "--wasted-drops" => config.wasted_drop_rate = flag_value(arg, iter.next()),
            "--output" => output_path = Some(flag_value(arg, iter.next())),
            "--quiet" => quiet = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
    }

    if !quiet {
        eprintln!(
            "Self-play: {} games, {} threads, wasted drop rate {:.2}",
            config.num_games, config.threads, config.wasted_drop_rate
        );
    }

    let start = Instant::now();
    let games = match selfplay::run_self_play(&config) {
        Ok(games) => games,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if !quiet {
        eprintln!("Completed {} games in {:.3}s", games.len(), elapsed.as_secs_f64());
        let summary = SelfPlaySummary::tally(&games);
        if let Err(e) = selfplay::write_summary(&summary, &mut io::stderr()) {
            log::warn!("failed to write summary: {}", e);
        }
    }

    let result = match &output_path {
        Some(path) => File::create(path).and_then(|file| write_games(&games, file)),
        None => write_games(&games, io::stdout().lock()),
    };
    match result {
        Ok(()) => {
            if let (Some(path), false) = (&output_path, quiet) {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
        }
        Err(e) => {
            log::error!("failed to write output: {}", e);
            process::exit(1);
        }
    }
}

fn write_games<W: Write>(games: &[selfplay::GameRecord], out: W) -> io::Result<()> {
    let mut writer = BufWriter::new(out);
    selfplay::write_jsonl(games, &mut writer)
}

/// Parses the value following `flag`, exiting with usage on failure.
fn flag_value<T: FromStr>(flag: &str, value: Option<&String>) -> T {
    match value.map(|v| v.parse::<T>()) {
        Some(Ok(v)) => v,
        Some(Err(_)) | None => {
            eprintln!("invalid {} value", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N          Number of games to play (default: 100)");
    eprintln!("  --threads N        Number of parallel threads (default: 4)");
    eprintln!("  --seed N           Random seed, 0 for entropy (default: 0)");
    eprintln!("  --wasted-drops P   Probability of an out-of-bounds drop (default: 0.0)");
    eprintln!("  --output FILE      Output file path (default: stdout)");
    eprintln!("  --quiet            Suppress summary output");
    eprintln!("  --help             Show this help");
}
