//! Card, hand and table formatters for terminal display.
//!
//! Pure functions turning engine values into the short notation used at the
//! prompt (`7♥`, `10♠`, `J♣`). Unicode suit symbols are used where the terminal
//! supports them, with a letter fallback (`7h`, `10s`, `Jc`).
//!
//! ## Example
//!
//! ```rust
//! use maumau_engine::cards::{Card, Rank, Suit};
//! use maumau_cli::formatters::format_card;
//!
//! let seven = Card::new(Rank::Seven, Suit::Hearts);
//! assert!(format_card(&seven) == "7♥" || format_card(&seven) == "7h");
//! ```

use maumau_engine::cards::{Card, Suit};
use maumau_engine::game::Snapshot;
use maumau_engine::hand::{Hand, slot_label};

use crate::validation::QUIT_KEY;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Format a hand with the key that selects each card.
///
/// Playable slots are marked with `*` when `legal` is given.
///
/// # Example
///
/// ```rust
/// use maumau_engine::cards::{Card, Rank, Suit};
/// use maumau_engine::hand::Hand;
/// # use maumau_cli::formatters::format_hand;
///
/// let hand = Hand::from_cards(vec![
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Hearts),
/// ]);
/// let line = format_hand(&hand, &[1]);
/// assert!(line.starts_with("[1] A"));
/// assert!(line.contains("[2]*9"));
/// ```
pub fn format_hand(hand: &Hand, legal: &[usize]) -> String {
    hand.iter()
        .enumerate()
        .map(|(slot, card)| {
            let key = slot_hint(slot);
            let mark = if legal.contains(&slot) { "*" } else { " " };
            format!("[{}]{}{}", key, mark, format_card(card))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// What to type for `slot`: its key, or its 1-based number once the key
/// runs out or collides with the quit key.
pub fn slot_hint(slot: usize) -> String {
    match slot_label(slot) {
        Some(key) if key != QUIT_KEY => key.to_string(),
        _ => (slot + 1).to_string(),
    }
}

/// One-line summary of the table: discard top, stock and every hand size.
pub fn format_table(snapshot: &Snapshot, names: &[String]) -> String {
    let top = snapshot
        .discard_top
        .map(|c| format_card(&c))
        .unwrap_or_else(|| "--".to_string());
    let seats: Vec<String> = names
        .iter()
        .zip(&snapshot.hand_counts)
        .enumerate()
        .map(|(i, (name, count))| {
            let cursor = if i == snapshot.current_player { ">" } else { "" };
            format!("{}{}:{}", cursor, name, count)
        })
        .collect();
    format!(
        "Top: {}  Stock: {}  Hands: {}",
        top,
        snapshot.stock_count,
        seats.join(" ")
    )
}
