//! A player's hand and the single-key slot labels used to address it.

use crate::cards::{Card, Rank};

/// Keys that address hand positions, in slot order.
pub const SLOT_LABELS: &str = "123456789abcdefghijklmnopqrstuvwxyz";

/// Label for the slot at `index`, if the hand can be that large.
pub fn slot_label(index: usize) -> Option<char> {
    SLOT_LABELS.chars().nth(index)
}

/// Inverse of [`slot_label`]; case-insensitive.
pub fn slot_for_key(key: char) -> Option<usize> {
    let key = key.to_ascii_lowercase();
    SLOT_LABELS.chars().position(|c| c == key)
}

/// Cards held by one player. Order carries no rule meaning but stays stable,
/// so a slot keeps addressing the same card until the hand changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn get(&self, slot: usize) -> Option<Card> {
        self.cards.get(slot).copied()
    }

    /// Removes and returns the card at `slot`, keeping the order of the rest.
    pub fn remove(&mut self, slot: usize) -> Option<Card> {
        if slot < self.cards.len() {
            Some(self.cards.remove(slot))
        } else {
            None
        }
    }

    /// First slot holding a card of `rank`.
    pub fn find_rank(&self, rank: Rank) -> Option<usize> {
        self.cards.iter().position(|c| c.rank == rank)
    }

    pub fn has_rank(&self, rank: Rank) -> bool {
        self.find_rank(rank).is_some()
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

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn slot_labels_round_trip_through_keys() {
        assert_eq!(slot_label(0), Some('1'));
        assert_eq!(slot_label(9), Some('a'));
        assert_eq!(slot_for_key('A'), Some(9));
        assert_eq!(slot_for_key('0'), None);
        assert_eq!(slot_label(SLOT_LABELS.len()), None);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut hand = Hand::from_cards(vec![
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Spades),
        ]);
        assert_eq!(hand.remove(1), Some(Card::new(Rank::Eight, Suit::Clubs)));
        assert_eq!(hand.get(1), Some(Card::new(Rank::Nine, Suit::Spades)));
        assert_eq!(hand.remove(5), None);
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn find_rank_returns_first_match() {
        let hand = Hand::from_cards(vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Spades),
        ]);
        assert_eq!(hand.find_rank(Rank::Seven), Some(1));
        assert!(!hand.has_rank(Rank::Eight));
    }
}
