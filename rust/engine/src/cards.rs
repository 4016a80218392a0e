use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents one of the four suits of a French-suited deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }
}

/// Represents the rank of a playing card from Two through Ace.
/// The numeric value is only used for display; Mau-Mau never compares ranks by size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7, opens or extends a sevens chain
    Seven,
    /// Rank 8, makes the next player skip
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Short label printed in the card corners ("7", "10", "J", ...).
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
            other => other.label(),
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are plain values: two cards are equal iff rank and suit are equal,
/// so copies from a multi-deck stock are interchangeable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

/// Which ranks make up one copy of the deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckVariant {
    /// 7 through Ace, 32 cards (the classic Mau-Mau deck)
    #[default]
    Short,
    /// 2 through Ace, 52 cards
    Full,
}

impl DeckVariant {
    pub fn ranks(self) -> &'static [Rank] {
        let all = all_ranks();
        match self {
            DeckVariant::Short => &all[5..],
            DeckVariant::Full => &all[..],
        }
    }

    /// Number of cards in a single copy of this variant.
    pub fn size(self) -> usize {
        self.ranks().len() * all_suits().len()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeckVariant::Short => "short",
            DeckVariant::Full => "full",
        }
    }
}

impl std::str::FromStr for DeckVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" | "32" => Ok(DeckVariant::Short),
            "full" | "52" => Ok(DeckVariant::Full),
            other => Err(format!("unknown deck variant '{}'", other)),
        }
    }
}

pub fn all_suits() -> &'static [Suit; 4] {
    &[Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> &'static [Rank; 13] {
    &[
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// Builds `copies` unshuffled copies of the `Rank x Suit` product for `variant`.
pub fn compose_deck(variant: DeckVariant, copies: u8) -> Vec<Card> {
    let mut v = Vec::with_capacity(variant.size() * copies as usize);
    for _ in 0..copies {
        for &r in variant.ranks() {
            for &s in all_suits() {
                v.push(Card::new(r, s));
            }
        }
    }
    v
}
