#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use maumau_engine::cards::{Card, Rank, Suit};
use maumau_engine::errors::GameError;
use maumau_engine::game::{Observer, Snapshot};
use maumau_engine::player::{MoveProvider, Selection, TurnContext};

pub fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Arranges a stock so that dealing round-robin gives each seat `hands[i]`,
/// the opening card is `opening`, and later draws come out in `rest` order.
pub fn stacked(hands: &[Vec<Card>], opening: Card, rest: &[Card]) -> Vec<Card> {
    let size = hands[0].len();
    assert!(hands.iter().all(|h| h.len() == size), "hands must be equal size");
    let mut order = Vec::new();
    for round in 0..size {
        for hand in hands {
            order.push(hand[round]);
        }
    }
    order.push(opening);
    order.extend_from_slice(rest);
    order.reverse();
    order
}

/// Move provider replaying a fixed list of selections; aborts when it runs dry.
#[derive(Clone, Default)]
pub struct Script {
    moves: Rc<RefCell<VecDeque<Selection>>>,
    pub rejected: Rc<RefCell<Vec<GameError>>>,
    pub prompts: Rc<RefCell<usize>>,
}

impl Script {
    pub fn new(moves: &[Selection]) -> Self {
        Self {
            moves: Rc::new(RefCell::new(moves.iter().copied().collect())),
            ..Self::default()
        }
    }

    pub fn boxed(&self) -> Box<dyn MoveProvider> {
        Box::new(self.clone())
    }
}

impl MoveProvider for Script {
    fn request_move(&mut self, _ctx: &TurnContext<'_>) -> Selection {
        *self.prompts.borrow_mut() += 1;
        self.moves.borrow_mut().pop_front().unwrap_or(Selection::Abort)
    }

    fn reject(&mut self, error: &GameError) {
        self.rejected.borrow_mut().push(error.clone());
    }
}

/// Observer keeping every snapshot it is shown.
#[derive(Clone, Default)]
pub struct Recorder {
    pub seen: Rc<RefCell<Vec<Snapshot>>>,
}

impl Observer for Recorder {
    fn observe(&mut self, snapshot: &Snapshot) {
        self.seen.borrow_mut().push(snapshot.clone());
    }
}
