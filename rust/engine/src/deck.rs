use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{compose_deck, Card, DeckVariant};
use crate::errors::GameError;

/// The face-down draw pile. Cards are drawn from the end of the vector.
#[derive(Debug)]
pub struct Stock {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Stock {
    /// Composes `copies` decks of `variant` and shuffles them with a seeded RNG.
    pub fn new_with_seed(variant: DeckVariant, copies: u8, seed: u64) -> Self {
        let mut stock = Self {
            cards: compose_deck(variant, copies),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        stock.shuffle();
        stock
    }

    /// Uses `cards` as-is; the last element is the first card drawn.
    /// The RNG is still seeded so later reshuffles stay reproducible.
    pub fn stacked(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha20Rng {
        &mut self.rng
    }

    /// Removes the top card, first refilling from `discard` when the stock is empty.
    ///
    /// # Errors
    ///
    /// [`GameError::ConsistencyViolation`] when the stock is empty and the discard
    /// pile holds nothing besides its top card.
    pub fn draw(&mut self, discard: &mut DiscardPile) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            self.refill_from(discard)?;
        }
        self.cards.pop().ok_or_else(|| {
            GameError::ConsistencyViolation("stock empty right after refill".to_string())
        })
    }

    /// Moves every discard card except the top into the stock and shuffles it.
    pub fn refill_from(&mut self, discard: &mut DiscardPile) -> Result<(), GameError> {
        let recycled = discard.take_all_but_top();
        if recycled.is_empty() {
            return Err(GameError::ConsistencyViolation(format!(
                "stock and discard pile exhausted ({} card(s) on the discard pile)",
                discard.len()
            )));
        }
        debug!(count = recycled.len(), "stock exhausted, reshuffling discard pile");
        self.cards.extend(recycled);
        self.shuffle();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The face-up pile. Its last element is the active target for legality checks.
#[derive(Debug, Clone, Default)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    fn take_all_but_top(&mut self) -> Vec<Card> {
        match self.cards.pop() {
            Some(top) => {
                let rest = std::mem::take(&mut self.cards);
                self.cards.push(top);
                rest
            }
            None => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
