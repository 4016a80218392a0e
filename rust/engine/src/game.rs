use serde::{Deserialize, Serialize};

use crate::cards::{Card, DeckVariant};

/// Cards dealt to every player before the opening card is turned.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Parameters fixed for the lifetime of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the initial shuffle, every reshuffle and the first-mover draw
    pub seed: Option<u64>,
    pub variant: DeckVariant,
    /// Number of full decks shuffled together
    pub copies: u8,
    pub hand_size: usize,
    /// Seat that moves first; drawn from the seeded RNG when `None`
    pub first_player: Option<usize>,
    /// Stop an endless game after this many turns (outcome: aborted)
    pub max_turns: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            variant: DeckVariant::Short,
            copies: 1,
            hand_size: DEFAULT_HAND_SIZE,
            first_player: None,
            max_turns: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Won,
    Aborted,
}

/// How a finished game ended.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub kind: OutcomeKind,
    /// Name of the player who emptied their hand
    pub winner: Option<String>,
    pub winner_index: Option<usize>,
    /// Turns run, including the final one and skipped turns
    pub turns_played: u32,
}

impl GameOutcome {
    pub fn is_won(&self) -> bool {
        self.kind == OutcomeKind::Won
    }
}

/// What an observer gets to see after each state-changing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub discard_top: Option<Card>,
    pub stock_count: usize,
    pub hand_counts: Vec<usize>,
    pub current_player: usize,
    pub last_message: String,
}

/// Renderer hook; purely informational.
pub trait Observer {
    fn observe(&mut self, snapshot: &Snapshot);
}
