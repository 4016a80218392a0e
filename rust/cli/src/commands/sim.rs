//! Simulation command: many all-automated games in a row.
//!
//! Game `i` is seeded with `seed + i`, so a run is reproducible from its base
//! seed. With `--output` every finished game is appended to a JSONL file, one
//! [`GameRecord`](maumau_engine::logger::GameRecord) per line.
//!
//! # Examples
//!
//! ```no_run
//! use maumau_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_sim_command(100, Some(42), None, Some("data/games.jsonl".to_string()), &mut out, &mut err).unwrap();
//! ```

use maumau_engine::engine::Engine;
use maumau_engine::game::{GameConfig, OutcomeKind};
use maumau_engine::logger::GameLogger;
use maumau_engine::player::Player;
use std::io::Write;

use crate::commands::play::OPPONENT_NAMES;
use crate::config;
use crate::error::CliError;
use crate::ui;

/// Turn limit applied when the configuration sets none, so a run always ends.
pub const DEFAULT_SIM_MAX_TURNS: u32 = 10_000;

/// Tally of a simulation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimSummary {
    pub games: u32,
    pub wins: Vec<u32>,
    pub aborted: u32,
    pub total_turns: u64,
}

impl SimSummary {
    pub fn mean_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }
}

/// Handle the sim command.
///
/// # Arguments
///
/// * `games` - Number of games to run (must be >= 1)
/// * `seed` - Base seed; falls back to the configured seed, then a random one
/// * `players` - Seats per game, overriding the configuration
/// * `output` - Optional JSONL file receiving one record per game
/// * `out` - Output stream for the summary
/// * `err` - Output stream for warnings
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    players: Option<u8>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let mut cfg = config::load()?;
    if let Some(p) = players {
        cfg.players = p as usize;
    }
    config::validate(&cfg)?;

    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let max_turns = cfg.max_turns.unwrap_or(DEFAULT_SIM_MAX_TURNS);

    let mut logger = match &output {
        Some(path) => Some(GameLogger::create(path).map_err(|e| {
            CliError::Io(std::io::Error::new(
                e.kind(),
                format!("cannot create {}: {}", path, e),
            ))
        })?),
        None => None,
    };

    let names: Vec<String> = OPPONENT_NAMES
        .iter()
        .cycle()
        .take(cfg.players)
        .enumerate()
        .map(|(i, n)| {
            if i < OPPONENT_NAMES.len() {
                n.to_string()
            } else {
                format!("{}{}", n, i)
            }
        })
        .collect();

    let mut summary = SimSummary {
        wins: vec![0; cfg.players],
        ..SimSummary::default()
    };

    for i in 0..games {
        let game = GameConfig {
            seed: Some(base_seed.wrapping_add(i as u64)),
            variant: cfg.deck,
            copies: cfg.copies,
            hand_size: cfg.hand_size,
            first_player: None,
            max_turns: Some(max_turns),
        };
        let seats = names.iter().map(|n| Player::automated(n.as_str())).collect();
        let mut engine = Engine::new(game, seats)?;
        let outcome = engine.run()?;

        summary.games += 1;
        summary.total_turns += outcome.turns_played as u64;
        match (outcome.kind, outcome.winner_index) {
            (OutcomeKind::Won, Some(seat)) => summary.wins[seat] += 1,
            _ => summary.aborted += 1,
        }

        if let Some(logger) = logger.as_mut() {
            let record = engine.record(logger.next_id());
            logger.write(&record)?;
        }
    }

    if summary.aborted > 0 {
        ui::display_warning(
            err,
            &format!(
                "{} game(s) stopped at the {}-turn limit",
                summary.aborted, max_turns
            ),
        )?;
    }

    writeln!(out, "Simulated: {} games (seed {})", summary.games, base_seed)?;
    for (name, wins) in names.iter().zip(&summary.wins) {
        writeln!(out, "  {:<8} {:>6} wins", name, wins)?;
    }
    writeln!(out, "Mean turns: {:.1}", summary.mean_turns())?;
    if let Some(path) = output {
        writeln!(out, "Records written to {}", path)?;
    }
    Ok(())
}
