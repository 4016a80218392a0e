//! # maumau-engine: Mau-Mau Rules Engine Core
//!
//! A deterministic, turn-based engine for Mau-Mau, the Crazy Eights variant in
//! which sevens make the next player draw and eights make them skip.
//! Tracks the stock, the discard pile, the pending effects and every seat,
//! and resolves each turn the same way for automated and interactive players.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck composition
//! - [`deck`] - Seeded stock with reshuffle-on-exhaustion, and the discard pile
//! - [`hand`] - Slot-addressable player hands
//! - [`effects`] - Pending sevens chain and active eight
//! - [`rules`] - Legality, match search and selection validation
//! - [`player`] - Seats, behaviors and the move provider contract
//! - [`ai`] - Rule policy for automated seats
//! - [`engine`] - Turn loop and terminal outcomes
//! - [`game`] - Game configuration, outcomes and observer snapshots
//! - [`logger`] - Turn records and JSONL game records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use maumau_engine::engine::Engine;
//! use maumau_engine::game::{GameConfig, OutcomeKind};
//! use maumau_engine::player::Player;
//!
//! let config = GameConfig {
//!     seed: Some(42),
//!     max_turns: Some(1_000),
//!     ..GameConfig::default()
//! };
//! let players = vec![Player::automated("Fritz"), Player::automated("Franz")];
//! let mut engine = Engine::new(config, players).unwrap();
//! let outcome = engine.run().unwrap();
//! if outcome.kind == OutcomeKind::Won {
//!     println!("{} won after {} turns", outcome.winner.unwrap(), outcome.turns_played);
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All randomness flows from one seeded ChaCha20 RNG, so the same seed and the
//! same interactive input replay the same game:
//!
//! ```rust
//! use maumau_engine::cards::DeckVariant;
//! use maumau_engine::deck::Stock;
//!
//! let a = Stock::new_with_seed(DeckVariant::Short, 1, 42);
//! let b = Stock::new_with_seed(DeckVariant::Short, 1, 42);
//! assert_eq!(a.cards(), b.cards());
//! ```

pub mod ai;
pub mod cards;
pub mod deck;
pub mod effects;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
