use std::fmt;

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;

/// What a move provider hands back when asked for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Play the card at this hand position
    Slot(usize),
    /// Leave the game; the engine ends it without a winner
    Abort,
}

/// Read-only view of the table given to whoever picks the card to play.
///
/// Only built once the engine has settled skips, forced draws and passes,
/// so `legal` is never empty.
#[derive(Debug, Clone)]
pub struct TurnContext<'a> {
    pub player_index: usize,
    pub player_name: &'a str,
    pub hand: &'a Hand,
    /// Current discard top
    pub top: Card,
    /// Sevens the player owes for unless they counter with a seven; 0 if no chain is live
    pub pending_sevens: u32,
    /// Playable slots in ascending order
    pub legal: Vec<usize>,
    pub stock_count: usize,
}

/// Source of decisions for an interactive seat (a terminal, a test script, ...).
pub trait MoveProvider {
    /// Blocks until the player picks a hand slot or aborts.
    fn request_move(&mut self, ctx: &TurnContext<'_>) -> Selection;

    /// Called when the previous selection was refused; the engine asks again afterwards.
    fn reject(&mut self, _error: &GameError) {}
}

/// How a seat makes its final choice among legal cards.
pub enum Behavior<'a> {
    /// Built-in rule policy, see [`crate::ai`]
    Automated,
    Interactive(Box<dyn MoveProvider + 'a>),
}

impl fmt::Debug for Behavior<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Automated => f.write_str("Automated"),
            Behavior::Interactive(_) => f.write_str("Interactive"),
        }
    }
}

/// A seat at the table: a name, the cards held and who decides for it.
#[derive(Debug)]
pub struct Player<'a> {
    pub(crate) name: String,
    pub(crate) hand: Hand,
    pub(crate) behavior: Behavior<'a>,
}

impl<'a> Player<'a> {
    pub fn automated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            behavior: Behavior::Automated,
        }
    }

    pub fn interactive(name: impl Into<String>, provider: Box<dyn MoveProvider + 'a>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            behavior: Behavior::Interactive(provider),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn is_automated(&self) -> bool {
        matches!(self.behavior, Behavior::Automated)
    }
}
