use std::collections::HashSet;

use maumau_engine::cards::{compose_deck, Card, DeckVariant, Rank as R, Suit as S};
use maumau_engine::deck::{DiscardPile, Stock};
use maumau_engine::errors::GameError;

#[test]
fn short_stock_has_32_unique_cards() {
    let mut stock = Stock::new_with_seed(DeckVariant::Short, 1, 42);
    let mut discard = DiscardPile::new();
    discard.push(Card::new(R::Ace, S::Spades));
    let mut set = HashSet::new();
    for i in 0..32 {
        let c = stock.draw(&mut discard).expect("should have 32 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(stock.is_empty());
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let s1 = Stock::new_with_seed(DeckVariant::Full, 1, 12345);
    let s2 = Stock::new_with_seed(DeckVariant::Full, 1, 12345);
    assert_eq!(s1.cards(), s2.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let s1 = Stock::new_with_seed(DeckVariant::Short, 1, 1);
    let s2 = Stock::new_with_seed(DeckVariant::Short, 1, 2);
    assert_ne!(
        s1.cards(),
        s2.cards(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffled_stock_is_a_permutation_of_the_composed_deck() {
    let stock = Stock::new_with_seed(DeckVariant::Short, 2, 9);
    let mut shuffled = stock.cards().to_vec();
    let mut composed = compose_deck(DeckVariant::Short, 2);
    shuffled.sort();
    composed.sort();
    assert_eq!(shuffled, composed);
}

#[test]
fn reshuffle_moves_all_but_top_into_stock() {
    let mut stock = Stock::stacked(Vec::new(), 5);
    let mut discard = DiscardPile::new();
    let played = [
        Card::new(R::Seven, S::Hearts),
        Card::new(R::Nine, S::Hearts),
        Card::new(R::Nine, S::Clubs),
        Card::new(R::Queen, S::Clubs),
        Card::new(R::Queen, S::Diamonds),
    ];
    for c in played {
        discard.push(c);
    }
    let before = discard.len();

    stock.refill_from(&mut discard).expect("refill");
    assert_eq!(stock.len(), before - 1);
    assert_eq!(discard.len(), 1);
    assert_eq!(discard.top(), Some(Card::new(R::Queen, S::Diamonds)));

    let mut recycled = stock.cards().to_vec();
    recycled.sort();
    let mut expected = played[..4].to_vec();
    expected.sort();
    assert_eq!(recycled, expected);
}

#[test]
fn draw_on_empty_stock_reshuffles_then_draws() {
    let mut stock = Stock::stacked(Vec::new(), 5);
    let mut discard = DiscardPile::new();
    discard.push(Card::new(R::Ten, S::Spades));
    discard.push(Card::new(R::Jack, S::Spades));
    discard.push(Card::new(R::King, S::Spades));

    let drawn = stock.draw(&mut discard).expect("draw after reshuffle");
    assert_ne!(drawn, Card::new(R::King, S::Spades));
    assert_eq!(stock.len(), 1);
    assert_eq!(discard.top(), Some(Card::new(R::King, S::Spades)));
}

#[test]
fn reshuffle_order_is_reproducible_per_seed() {
    let fill = |seed| {
        let mut stock = Stock::stacked(Vec::new(), seed);
        let mut discard = DiscardPile::new();
        for c in compose_deck(DeckVariant::Short, 1) {
            discard.push(c);
        }
        stock.refill_from(&mut discard).unwrap();
        stock.cards().to_vec()
    };
    assert_eq!(fill(77), fill(77));
}

#[test]
fn nothing_left_to_recycle_is_fatal() {
    let mut stock = Stock::stacked(Vec::new(), 5);
    let mut discard = DiscardPile::new();
    assert!(matches!(
        stock.draw(&mut discard),
        Err(GameError::ConsistencyViolation(_))
    ));
}
