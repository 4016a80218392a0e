use thiserror::Error;

use crate::cards::Card;

/// Why a selected hand position was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionFault {
    /// The position does not address a card in the hand
    OutOfRange { hand_size: usize },
    /// The card shares neither suit nor rank with the discard top
    NotPlayable { card: Card, top: Card },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("{}", describe_selection(.slot, .fault))]
    IllegalSelection { slot: usize, fault: SelectionFault },
    #[error("Card conservation violated: {0}")]
    ConsistencyViolation(String),
    #[error("Invalid game setup: {0}")]
    InvalidSetup(String),
}

fn describe_selection(slot: &usize, fault: &SelectionFault) -> String {
    match fault {
        SelectionFault::OutOfRange { hand_size } => {
            let label = crate::hand::slot_label(*slot)
                .map_or_else(|| (slot + 1).to_string(), String::from);
            format!("There is no card in slot {} (hand has {})", label, hand_size)
        }
        SelectionFault::NotPlayable { card, .. } => format!("You can't play {} now!", card),
    }
}
