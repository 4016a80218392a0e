use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Pending special-card effects carried from one turn to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectState {
    /// Consecutive uncountered sevens; the next player owes two cards per seven.
    pub pending_sevens: u32,
    /// An eight was just played and the next player loses their turn.
    pub eight_active: bool,
}

impl EffectState {
    /// State implied by the card turned up to open the game.
    pub fn opening(card: Card) -> Self {
        Self {
            pending_sevens: u32::from(card.rank == Rank::Seven),
            eight_active: card.rank == Rank::Eight,
        }
    }

    /// Clears an active eight. Returns whether the current turn is skipped.
    pub fn consume_skip(&mut self) -> bool {
        std::mem::take(&mut self.eight_active)
    }

    /// A seven chain can be countered or must be paid only while a seven is on top.
    pub fn chain_pending(&self, top: Card) -> bool {
        self.pending_sevens > 0 && top.rank == Rank::Seven
    }

    /// Settles the chain and returns how many cards the player has to draw.
    pub fn take_penalty(&mut self) -> usize {
        2 * std::mem::take(&mut self.pending_sevens) as usize
    }

    /// Updates the effects after `card` has been played.
    pub fn on_play(&mut self, card: Card) {
        if card.rank == Rank::Seven {
            self.pending_sevens += 1;
        } else {
            self.pending_sevens = 0;
        }
        self.eight_active = card.rank == Rank::Eight;
    }
}
