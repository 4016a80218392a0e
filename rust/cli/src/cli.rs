//! Command-line surface of the `maumau` binary.
//!
//! Parsed with clap's derive API; the dispatch lives in [`crate::run`].

use clap::{Parser, Subcommand};
use maumau_engine::cards::DeckVariant;

#[derive(Parser, Debug)]
#[command(
    name = "maumau",
    version,
    about = "Mau-Mau card game for the terminal"
)]
pub struct MaumauCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game against automated opponents
    Play {
        /// RNG seed for the shuffle and the first mover
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seats, including yours
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=8))]
        players: Option<u8>,
        /// Your name at the table
        #[arg(long)]
        name: Option<String>,
        /// Let the computer play your seat too
        #[arg(long)]
        demo: bool,
        /// Deck variant: short (32 cards) or full (52 cards)
        #[arg(long)]
        deck: Option<DeckVariant>,
        /// Number of decks shuffled together
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
        copies: Option<u8>,
    },
    /// Run automated games and report win counts
    Sim {
        #[arg(long)]
        games: u32,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=8))]
        players: Option<u8>,
        /// Append one JSON record per game to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the effective configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play_with_all_flags() {
        let cli = MaumauCli::try_parse_from([
            "maumau", "play", "--seed", "7", "--players", "4", "--name", "Erna", "--demo",
            "--deck", "full", "--copies", "2",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                seed,
                players,
                name,
                demo,
                deck,
                copies,
            } => {
                assert_eq!(seed, Some(7));
                assert_eq!(players, Some(4));
                assert_eq!(name.as_deref(), Some("Erna"));
                assert!(demo);
                assert_eq!(deck, Some(DeckVariant::Full));
                assert_eq!(copies, Some(2));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_player_counts() {
        assert!(MaumauCli::try_parse_from(["maumau", "play", "--players", "1"]).is_err());
        assert!(MaumauCli::try_parse_from(["maumau", "play", "--players", "9"]).is_err());
        assert!(MaumauCli::try_parse_from(["maumau", "sim", "--games", "1", "--players", "0"]).is_err());
    }

    #[test]
    fn sim_requires_game_count() {
        assert!(MaumauCli::try_parse_from(["maumau", "sim"]).is_err());
        assert!(MaumauCli::try_parse_from(["maumau", "sim", "--games", "3"]).is_ok());
    }

    #[test]
    fn unknown_deck_is_rejected() {
        assert!(MaumauCli::try_parse_from(["maumau", "play", "--deck", "huge"]).is_err());
    }
}
