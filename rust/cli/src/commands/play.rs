//! # Play Command
//!
//! One game of Mau-Mau in the terminal. The automated opponents take the first
//! seats, the human player sits last; `--demo` lets the computer play that
//! seat as well.
//!
//! Settings come from the configuration (see `maumau cfg`) and are overridden
//! by the command-line flags.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use maumau_engine::cards::DeckVariant;
use maumau_engine::engine::Engine;
use maumau_engine::game::{GameConfig, GameOutcome, OutcomeKind};
use maumau_engine::player::Player;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::terminal::{Console, TerminalProvider, TextRenderer};

/// Seat names handed out to automated opponents, in seating order.
pub const OPPONENT_NAMES: &[&str] = &["Fritz", "Franz", "Gerda", "Kurt", "Lotte", "Emil", "Ilse"];

pub const DEFAULT_PLAYER_NAME: &str = "Horst";

/// Flags of `maumau play`; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub players: Option<u8>,
    pub name: Option<String>,
    pub demo: bool,
    pub deck: Option<DeckVariant>,
    pub copies: Option<u8>,
}

impl PlayOptions {
    fn apply(&self, cfg: &mut Config) {
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(players) = self.players {
            cfg.players = players as usize;
        }
        if let Some(deck) = self.deck {
            cfg.deck = deck;
        }
        if let Some(copies) = self.copies {
            cfg.copies = copies;
        }
    }
}

/// Handle the play command: one interactive game.
///
/// # Arguments
///
/// * `opts` - Command-line overrides
/// * `out` - Game display and prompts
/// * `err` - Warnings
/// * `stdin` - Moves typed by the human player
///
/// # Returns
///
/// `Ok(())` once the game is over, including when the player quits.
/// `Err(CliError)` for invalid settings, I/O failures, or a broken game state.
pub fn handle_play_command<'a>(
    opts: PlayOptions,
    out: &'a mut dyn Write,
    err: &mut dyn Write,
    stdin: &'a mut dyn BufRead,
) -> Result<(), CliError> {
    let mut cfg = config::load()?;
    opts.apply(&mut cfg);
    config::validate(&cfg)?;

    let name = opts
        .name
        .clone()
        .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());
    if name.trim().is_empty() {
        return Err(CliError::InvalidInput("name must not be empty".to_string()));
    }
    if OPPONENT_NAMES[..cfg.players - 1].contains(&name.as_str()) {
        crate::ui::display_warning(err, &format!("{} is also the name of an opponent", name))?;
    }

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let console: Console<'a> = Rc::new(RefCell::new(out));
    writeln!(
        console.borrow_mut(),
        "Mau-Mau: {} players, {} deck x{}, seed {}",
        cfg.players,
        cfg.deck.as_str(),
        cfg.copies,
        seed
    )?;

    let players = seat_players(&cfg, &name, opts.demo, &console, stdin);
    let names: Vec<String> = players.iter().map(|p| p.name().to_string()).collect();
    let game = GameConfig {
        seed: Some(seed),
        variant: cfg.deck,
        copies: cfg.copies,
        hand_size: cfg.hand_size,
        first_player: None,
        max_turns: cfg.max_turns,
    };

    let mut engine = Engine::new(game, players)?;
    engine.set_observer(Box::new(TextRenderer::new(console.clone(), names)));
    let outcome = engine.run()?;
    drop(engine);

    write_summary(&mut **console.borrow_mut(), &outcome, &name)?;
    Ok(())
}

fn seat_players<'a>(
    cfg: &Config,
    name: &str,
    demo: bool,
    console: &Console<'a>,
    stdin: &'a mut dyn BufRead,
) -> Vec<Player<'a>> {
    let mut players: Vec<Player<'a>> = OPPONENT_NAMES
        .iter()
        .take(cfg.players - 1)
        .map(|n| Player::automated(*n))
        .collect();
    if demo {
        players.push(Player::automated(name));
    } else {
        let provider = TerminalProvider::new(console.clone(), stdin);
        players.push(Player::interactive(name, Box::new(provider)));
    }
    players
}

fn write_summary(out: &mut dyn Write, outcome: &GameOutcome, name: &str) -> std::io::Result<()> {
    writeln!(out, "{}", "=".repeat(40))?;
    match (&outcome.kind, &outcome.winner) {
        (OutcomeKind::Won, Some(winner)) if winner == name => writeln!(out, "You won!")?,
        (OutcomeKind::Won, Some(winner)) => writeln!(out, "Winner: {}", winner)?,
        _ => writeln!(out, "Game ended without a winner.")?,
    }
    writeln!(out, "Turns played: {}", outcome.turns_played)
}
