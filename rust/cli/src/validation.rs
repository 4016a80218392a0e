//! Parsing of what the player types at the move prompt.
//!
//! Hand positions are addressed by their slot key (`1`-`9`, then `a`-`z`) or
//! by their 1-based number, which also reaches slots past the key alphabet.
//! `x` leaves the game. Whether the addressed slot holds a playable card is
//! decided by the engine, not here.

use maumau_engine::hand::slot_for_key;

/// Key that asks to leave the game. It shadows the slot key of the same letter.
pub const QUIT_KEY: char = 'x';

/// Outcome of parsing one input line at the move prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Zero-based hand position picked by slot key or number
    Slot(usize),
    /// User entered `x` and wants to leave the game
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a slot index or the quit command.
///
/// # Example
///
/// ```rust
/// # use maumau_cli::validation::{parse_move_input, ParseResult};
/// assert_eq!(parse_move_input("1"), ParseResult::Slot(0));
/// assert_eq!(parse_move_input("b"), ParseResult::Slot(10));
/// assert_eq!(parse_move_input("40"), ParseResult::Slot(39));
/// assert_eq!(parse_move_input("X"), ParseResult::Quit);
///
/// match parse_move_input("play") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("one key")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_move_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Please choose a card".to_string());
    }

    if input.chars().all(|c| c.is_ascii_digit()) {
        return match input.parse::<usize>() {
            Ok(n) if n >= 1 => ParseResult::Slot(n - 1),
            _ => ParseResult::Invalid(format!("'{}' is not a slot number", input)),
        };
    }

    let mut chars = input.chars();
    let (Some(key), None) = (chars.next(), chars.next()) else {
        return ParseResult::Invalid(format!(
            "Unrecognized input '{}'. Type one key or a slot number, or x to quit",
            input
        ));
    };

    if key == QUIT_KEY {
        return ParseResult::Quit;
    }
    match slot_for_key(key) {
        Some(slot) => ParseResult::Slot(slot),
        None => ParseResult::Invalid(format!("'{}' is not a slot key", key)),
    }
}

/// Parse the answer to a yes/no question; `None` if it is neither.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_letters_map_to_slots() {
        assert_eq!(parse_move_input("9"), ParseResult::Slot(8));
        assert_eq!(parse_move_input("a"), ParseResult::Slot(9));
        assert_eq!(parse_move_input(" C "), ParseResult::Slot(11));
        assert_eq!(parse_move_input("z"), ParseResult::Slot(34));
    }

    #[test]
    fn x_is_quit_in_either_case() {
        assert_eq!(parse_move_input("x"), ParseResult::Quit);
        assert_eq!(parse_move_input("X"), ParseResult::Quit);
    }

    #[test]
    fn numbers_reach_slots_the_keys_cannot() {
        assert_eq!(parse_move_input("33"), ParseResult::Slot(32));
        assert_eq!(parse_move_input(" 40 "), ParseResult::Slot(39));
        assert_eq!(parse_move_input("12"), parse_move_input("c"));
        assert_eq!(parse_move_input("007"), ParseResult::Slot(6));
    }

    #[test]
    fn zero_and_symbols_are_not_slots() {
        assert!(matches!(parse_move_input("0"), ParseResult::Invalid(_)));
        assert!(matches!(parse_move_input("00"), ParseResult::Invalid(_)));
        assert!(matches!(parse_move_input("?"), ParseResult::Invalid(_)));
        assert!(matches!(
            parse_move_input("99999999999999999999999"),
            ParseResult::Invalid(_)
        ));
    }

    #[test]
    fn empty_and_multi_key_input_is_invalid() {
        assert!(matches!(parse_move_input(""), ParseResult::Invalid(_)));
        assert!(matches!(parse_move_input("ab"), ParseResult::Invalid(_)));
        assert!(matches!(parse_move_input("1a"), ParseResult::Invalid(_)));
    }

    #[test]
    fn confirmation_answers() {
        assert_eq!(parse_confirmation("y"), Some(true));
        assert_eq!(parse_confirmation("YES"), Some(true));
        assert_eq!(parse_confirmation("n"), Some(false));
        assert_eq!(parse_confirmation("maybe"), None);
    }
}
