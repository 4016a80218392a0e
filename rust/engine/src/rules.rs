use crate::cards::Card;
use crate::errors::{GameError, SelectionFault};
use crate::hand::Hand;

/// A card may follow `top` when it shares its suit or its rank.
pub fn is_legal(card: Card, top: Card) -> bool {
    card.suit == top.suit || card.rank == top.rank
}

/// Hand slots that may be played against the current discard top,
/// split the way the automated policy ranks them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    /// Slots whose card shares the top card's suit, in hand order
    pub suit: Vec<usize>,
    /// Slots whose card shares only the top card's rank, in hand order
    pub rank: Vec<usize>,
}

impl Matches {
    pub fn is_empty(&self) -> bool {
        self.suit.is_empty() && self.rank.is_empty()
    }

    /// Every legal slot in ascending hand order.
    pub fn slots(&self) -> Vec<usize> {
        let mut all: Vec<usize> = self.suit.iter().chain(&self.rank).copied().collect();
        all.sort_unstable();
        all
    }
}

/// Splits the legal cards of `hand` into suit and rank matches against `top`.
///
/// # Examples
///
/// ```
/// use maumau_engine::cards::{Card, Rank, Suit};
/// use maumau_engine::hand::Hand;
/// use maumau_engine::rules::find_matches;
///
/// let hand = Hand::from_cards(vec![
///     Card::new(Rank::Nine, Suit::Hearts),
///     Card::new(Rank::King, Suit::Clubs),
///     Card::new(Rank::Ten, Suit::Spades),
/// ]);
/// let m = find_matches(&hand, Card::new(Rank::King, Suit::Hearts));
/// assert_eq!(m.suit, vec![0]);
/// assert_eq!(m.rank, vec![1]);
/// assert_eq!(m.slots(), vec![0, 1]);
/// ```
pub fn find_matches(hand: &Hand, top: Card) -> Matches {
    let mut m = Matches::default();
    for (slot, card) in hand.iter().enumerate() {
        if card.suit == top.suit {
            m.suit.push(slot);
        } else if card.rank == top.rank {
            m.rank.push(slot);
        }
    }
    m
}

/// Checks an externally chosen slot against the hand and the discard top.
///
/// # Errors
///
/// [`GameError::IllegalSelection`] when `slot` is outside the hand or its
/// card cannot follow `top`.
///
/// ```
/// use maumau_engine::cards::{Card, Rank, Suit};
/// use maumau_engine::errors::GameError;
/// use maumau_engine::hand::Hand;
/// use maumau_engine::rules::validate_selection;
///
/// let hand = Hand::from_cards(vec![Card::new(Rank::Ace, Suit::Clubs)]);
/// let top = Card::new(Rank::Ten, Suit::Diamonds);
/// assert!(matches!(
///     validate_selection(&hand, top, 0),
///     Err(GameError::IllegalSelection { .. })
/// ));
/// assert!(validate_selection(&hand, top, 4).is_err());
/// ```
pub fn validate_selection(hand: &Hand, top: Card, slot: usize) -> Result<Card, GameError> {
    let card = hand.get(slot).ok_or(GameError::IllegalSelection {
        slot,
        fault: SelectionFault::OutOfRange {
            hand_size: hand.len(),
        },
    })?;
    if is_legal(card, top) {
        Ok(card)
    } else {
        Err(GameError::IllegalSelection {
            slot,
            fault: SelectionFault::NotPlayable { card, top },
        })
    }
}
