//! Self-play game generation.
//!
//! Plays random games to completion and records every drop attempt and the
//! outcome. Each game owns its own engine, so games run in parallel on a
//! rayon pool without sharing any state.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::grid::COLS;
use crate::board::piece::Piece;
use crate::board::state::Piezas;
use crate::protocol::notation::encode_position;

/// Errors that can occur when configuring self-play.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("number of games must be at least 1")]
    NoGames,

    #[error("number of threads must be at least 1")]
    NoThreads,

    #[error("wasted drop rate must be in [0, 1), got {0}")]
    WastedDropRate(f64),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Probability that a move is a deliberate out-of-bounds drop, which
    /// places nothing and passes the turn.
    pub wasted_drop_rate: f64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 100,
            seed: 0,
            threads: 4,
            wasted_drop_rate: 0.0,
        }
    }
}

impl SelfPlayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_games == 0 {
            return Err(ConfigError::NoGames);
        }
        if self.threads == 0 {
            return Err(ConfigError::NoThreads);
        }
        // A rate of 1.0 would never fill the board.
        if !(0.0..1.0).contains(&self.wasted_drop_rate) {
            return Err(ConfigError::WastedDropRate(self.wasted_drop_rate));
        }
        Ok(())
    }

    fn rng_for(&self, game_id: usize) -> SmallRng {
        if self.seed != 0 {
            SmallRng::seed_from_u64(self.seed.wrapping_add(game_id as u64))
        } else {
            SmallRng::from_entropy()
        }
    }
}

/// A complete self-play game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// Every column passed to `drop_piece`, in order, including wasted drops.
    pub drops: Vec<i32>,
    /// Final `game_state`: X, O, or Blank for a tie.
    pub outcome: Piece,
    /// Position notation of the finished board.
    pub final_position: String,
}

/// Outcome tallies over a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlaySummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,
    pub wasted_drops: usize,
}

impl SelfPlaySummary {
    pub fn tally(games: &[GameRecord]) -> Self {
        let mut summary = SelfPlaySummary {
            games: games.len(),
            ..Default::default()
        };
        for game in games {
            match game.outcome {
                Piece::X => summary.x_wins += 1,
                Piece::O => summary.o_wins += 1,
                _ => summary.ties += 1,
            }
            summary.wasted_drops += game
                .drops
                .iter()
                .filter(|&&c| c < 0 || c >= COLS as i32)
                .count();
        }
        summary
    }
}

/// Plays one random game to completion.
pub fn play_game<G: Rng>(config: &SelfPlayConfig, game_id: usize, rng: &mut G) -> GameRecord {
    let mut engine = Piezas::new();
    let mut drops = Vec::new();

    while engine.game_state() == Piece::Invalid {
        let column = if config.wasted_drop_rate > 0.0 && rng.gen_bool(config.wasted_drop_rate) {
            if rng.gen_bool(0.5) {
                -1
            } else {
                COLS as i32
            }
        } else {
            // The board is not full, so at least one column is open.
            let open: Vec<usize> = (0..COLS)
                .filter(|&c| engine.board().lowest_blank(c).is_some())
                .collect();
            open[rng.gen_range(0..open.len())] as i32
        };
        engine.drop_piece(column);
        drops.push(column);
    }

    let outcome = engine.game_state();
    log::info!("game {}: {} after {} drops", game_id, outcome, drops.len());
    GameRecord {
        game_id,
        drops,
        outcome,
        final_position: encode_position(&engine),
    }
}

/// Runs self-play generation, producing one record per game in ID order.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, ConfigError> {
    config.validate()?;

    if config.threads == 1 {
        return Ok((0..config.num_games)
            .map(|i| play_game(config, i, &mut config.rng_for(i)))
            .collect());
    }

    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    Ok(pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| play_game(config, i, &mut config.rng_for(i)))
            .collect()
    }))
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a human-readable summary of a batch of games.
pub fn write_summary<W: Write>(summary: &SelfPlaySummary, out: &mut W) -> std::io::Result<()> {
    let pct = |n: usize| {
        if summary.games == 0 {
            0.0
        } else {
            n as f64 * 100.0 / summary.games as f64
        }
    };
    writeln!(out, "=== Self-Play Summary ===")?;
    writeln!(out, "Games: {}", summary.games)?;
    writeln!(out, "X wins: {} ({:.1}%)", summary.x_wins, pct(summary.x_wins))?;
    writeln!(out, "O wins: {} ({:.1}%)", summary.o_wins, pct(summary.o_wins))?;
    writeln!(out, "Ties: {} ({:.1}%)", summary.ties, pct(summary.ties))?;
    writeln!(out, "Wasted drops: {}", summary.wasted_drops)
}
