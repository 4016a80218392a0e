use rand::Rng;
use tracing::{debug, error, info, warn};

use crate::ai;
use crate::cards::{Card, Rank};
use crate::deck::{DiscardPile, Stock};
use crate::effects::EffectState;
use crate::errors::GameError;
use crate::game::{GameConfig, GameOutcome, Observer, OutcomeKind, Snapshot, DEFAULT_SEED};
use crate::logger::{GameRecord, TurnEvent, TurnRecord};
use crate::player::{Behavior, Player, Selection, TurnContext};
use crate::rules::{find_matches, validate_selection, Matches};

/// Result of [`Engine::play_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnStatus {
    /// The turn resolved and the cursor moved on to the next seat
    Continue(TurnRecord),
    /// The game is over; returned for the final turn and for every call after it
    Finished(GameOutcome),
}

enum TurnEnd {
    Continue,
    Won,
    Aborted,
}

enum Choice {
    Slot(usize),
    Abort,
}

/// Turn engine for one game of Mau-Mau.
/// Owns the stock, the discard pile, the pending effects and every seat.
///
/// # Examples
///
/// ```
/// use maumau_engine::engine::Engine;
/// use maumau_engine::game::GameConfig;
/// use maumau_engine::player::Player;
///
/// let config = GameConfig {
///     seed: Some(7),
///     first_player: Some(0),
///     max_turns: Some(500),
///     ..GameConfig::default()
/// };
/// let players = vec![
///     Player::automated("Fritz"),
///     Player::automated("Franz"),
///     Player::automated("Horst"),
/// ];
/// let mut engine = Engine::new(config, players).expect("valid setup");
/// assert_eq!(engine.stock_len(), 32 - 3 * 7 - 1);
///
/// let outcome = engine.run().expect("no consistency violation");
/// assert!(outcome.turns_played >= 1);
/// assert_eq!(engine.card_count(), 32);
/// ```
pub struct Engine<'a> {
    stock: Stock,
    discard: DiscardPile,
    effects: EffectState,
    players: Vec<Player<'a>>,
    /// Seat whose turn is next (or in progress)
    current: usize,
    turns: u32,
    seed: u64,
    total_cards: usize,
    max_turns: Option<u32>,
    opening: Option<Card>,
    outcome: Option<GameOutcome>,
    history: Vec<TurnRecord>,
    last_message: String,
    observer: Option<Box<dyn Observer + 'a>>,
}

impl<'a> Engine<'a> {
    /// Shuffles the composed deck with the configured seed, deals and turns the opening card.
    pub fn new(config: GameConfig, players: Vec<Player<'a>>) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let stock = Stock::new_with_seed(config.variant, config.copies, seed);
        Self::setup(config, seed, players, stock)
    }

    /// Like [`Engine::new`] but with a prearranged stock; the last card of
    /// `cards` is dealt first. Variant and copies in `config` are ignored.
    pub fn with_deck(
        config: GameConfig,
        players: Vec<Player<'a>>,
        cards: Vec<Card>,
    ) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let stock = Stock::stacked(cards, seed);
        Self::setup(config, seed, players, stock)
    }

    fn setup(
        config: GameConfig,
        seed: u64,
        mut players: Vec<Player<'a>>,
        mut stock: Stock,
    ) -> Result<Self, GameError> {
        let n = players.len();
        if n < 2 {
            return Err(GameError::InvalidSetup(format!(
                "need at least 2 players, got {}",
                n
            )));
        }
        if config.hand_size == 0 {
            return Err(GameError::InvalidSetup("hand size must be >= 1".into()));
        }
        if let Some(p) = players.iter().find(|p| !p.hand.is_empty()) {
            return Err(GameError::InvalidSetup(format!(
                "{} already holds cards",
                p.name
            )));
        }
        let total_cards = stock.len();
        let needed = n * config.hand_size + 1;
        if total_cards < needed {
            return Err(GameError::InvalidSetup(format!(
                "{} players with {} cards each need {} cards, deck has {}",
                n, config.hand_size, needed, total_cards
            )));
        }
        if let Some(first) = config.first_player {
            if first >= n {
                return Err(GameError::InvalidSetup(format!(
                    "first player {} out of range for {} players",
                    first, n
                )));
            }
        }

        let mut discard = DiscardPile::new();
        for _ in 0..config.hand_size {
            for p in &mut players {
                let card = stock.draw(&mut discard)?;
                p.hand.add(card);
            }
        }
        let opening = stock.draw(&mut discard)?;
        discard.push(opening);

        let current = match config.first_player {
            Some(first) => first,
            None => stock.rng_mut().random_range(0..n),
        };

        info!(
            seed,
            players = n,
            opening = %opening,
            first = %players[current].name,
            "game set up"
        );

        Ok(Self {
            stock,
            discard,
            effects: EffectState::opening(opening),
            players,
            current,
            turns: 0,
            seed,
            total_cards,
            max_turns: config.max_turns,
            opening: Some(opening),
            outcome: None,
            history: Vec::new(),
            last_message: format!("{} is turned up.", opening),
            observer: None,
        })
    }

    pub fn set_observer(&mut self, observer: Box<dyn Observer + 'a>) {
        self.observer = Some(observer);
        self.notify();
    }

    /// Runs turns until somebody wins or the game is aborted.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            if let TurnStatus::Finished(outcome) = self.play_turn()? {
                return Ok(outcome);
            }
        }
    }

    /// Resolves exactly one turn for the current seat and advances the cursor.
    ///
    /// Once the game is over every call returns the same [`TurnStatus::Finished`]
    /// without touching any state.
    ///
    /// # Errors
    ///
    /// [`GameError::ConsistencyViolation`] if the card total drifts or the piles
    /// disagree with the hands. The game state must not be trusted afterwards.
    pub fn play_turn(&mut self) -> Result<TurnStatus, GameError> {
        if let Some(outcome) = &self.outcome {
            return Ok(TurnStatus::Finished(outcome.clone()));
        }

        let seat = self.current;
        self.turns += 1;
        let mut events = Vec::new();
        let resolved = self.resolve_turn(seat, &mut events);
        let record = TurnRecord {
            turn: self.turns,
            player: seat,
            events,
        };
        self.history.push(record.clone());
        let end = resolved.inspect_err(|e| error!(turn = self.turns, error = %e, "turn failed"))?;
        self.check_conservation()?;

        match end {
            TurnEnd::Won => {
                let name = self.players[seat].name.clone();
                info!(winner = %name, turns = self.turns, "game won");
                return Ok(TurnStatus::Finished(self.finish(OutcomeKind::Won, Some(seat))));
            }
            TurnEnd::Aborted => {
                info!(player = %self.players[seat].name, turns = self.turns, "game aborted");
                return Ok(TurnStatus::Finished(self.finish(OutcomeKind::Aborted, None)));
            }
            TurnEnd::Continue => {}
        }

        if self.max_turns.is_some_and(|limit| self.turns >= limit) {
            warn!(turns = self.turns, "turn limit reached, stopping game");
            self.last_message = "Turn limit reached.".to_string();
            return Ok(TurnStatus::Finished(self.finish(OutcomeKind::Aborted, None)));
        }

        self.current = (seat + 1) % self.players.len();
        self.notify();
        Ok(TurnStatus::Continue(record))
    }

    fn finish(&mut self, kind: OutcomeKind, winner: Option<usize>) -> GameOutcome {
        let outcome = GameOutcome {
            kind,
            winner: winner.map(|i| self.players[i].name.clone()),
            winner_index: winner,
            turns_played: self.turns,
        };
        self.outcome = Some(outcome.clone());
        self.notify();
        outcome
    }

    fn resolve_turn(
        &mut self,
        seat: usize,
        events: &mut Vec<TurnEvent>,
    ) -> Result<TurnEnd, GameError> {
        let name = self.players[seat].name.clone();

        if self.effects.consume_skip() {
            debug!(player = %name, turn = self.turns, "skipped by eight");
            events.push(TurnEvent::Skipped);
            self.announce(format!("{} has to skip one round.", name));
            return Ok(TurnEnd::Continue);
        }

        let top = self.top()?;
        if self.effects.chain_pending(top) && !self.players[seat].hand.has_rank(Rank::Seven) {
            self.pay_penalty(seat, &name, events)?;
        }

        let mut matches = find_matches(&self.players[seat].hand, top);
        if matches.is_empty() && self.draw_into(seat, 1)? == 1 {
            debug!(player = %name, turn = self.turns, "forced draw");
            events.push(TurnEvent::Drew);
            self.announce(format!("{} has to draw a card.", name));
            matches = find_matches(&self.players[seat].hand, top);
        }
        if matches.is_empty() {
            debug!(player = %name, turn = self.turns, "pass");
            events.push(TurnEvent::Passed);
            self.announce(format!("{} has to pass.", name));
            return Ok(TurnEnd::Continue);
        }

        let slot = match self.choose(seat, top, &matches)? {
            Choice::Slot(slot) => slot,
            Choice::Abort => {
                events.push(TurnEvent::Aborted);
                self.announce(format!("{} ends the game.", name));
                return Ok(TurnEnd::Aborted);
            }
        };

        // Declining a live chain still costs the penalty. Penalty cards are
        // appended, so `slot` keeps pointing at the chosen card.
        let declines_chain = self.effects.chain_pending(top)
            && self.players[seat].hand.get(slot).is_some_and(|c| c.rank != Rank::Seven);
        if declines_chain {
            self.pay_penalty(seat, &name, events)?;
        }

        let card = self.players[seat].hand.remove(slot).ok_or_else(|| {
            GameError::ConsistencyViolation(format!("validated slot {} vanished", slot))
        })?;
        self.discard.push(card);
        self.effects.on_play(card);
        debug!(player = %name, turn = self.turns, card = %card, "play");
        events.push(TurnEvent::Played { card });
        self.announce(format!("{} plays {}.", name, card));

        if self.players[seat].hand.is_empty() {
            events.push(TurnEvent::Won);
            self.announce(format!("{} has won!", name));
            return Ok(TurnEnd::Won);
        }
        Ok(TurnEnd::Continue)
    }

    fn choose(&mut self, seat: usize, top: Card, matches: &Matches) -> Result<Choice, GameError> {
        let pending_sevens = if self.effects.chain_pending(top) {
            self.effects.pending_sevens
        } else {
            0
        };
        let stock_count = self.stock.len();
        let Player {
            name,
            hand,
            behavior,
        } = &mut self.players[seat];
        let ctx = TurnContext {
            player_index: seat,
            player_name: name.as_str(),
            hand: &*hand,
            top,
            pending_sevens,
            legal: matches.slots(),
            stock_count,
        };

        match behavior {
            Behavior::Automated => ai::baseline_choice(&ctx).map(Choice::Slot).ok_or_else(|| {
                GameError::ConsistencyViolation(format!(
                    "no legal card for {} despite {} match(es)",
                    ctx.player_name,
                    ctx.legal.len()
                ))
            }),
            Behavior::Interactive(provider) => loop {
                match provider.request_move(&ctx) {
                    Selection::Abort => return Ok(Choice::Abort),
                    Selection::Slot(slot) => match validate_selection(ctx.hand, top, slot) {
                        Ok(_) => return Ok(Choice::Slot(slot)),
                        Err(e) => {
                            debug!(player = %ctx.player_name, slot, error = %e, "selection rejected");
                            provider.reject(&e);
                        }
                    },
                }
            },
        }
    }

    fn pay_penalty(
        &mut self,
        seat: usize,
        name: &str,
        events: &mut Vec<TurnEvent>,
    ) -> Result<(), GameError> {
        let owed = self.effects.take_penalty();
        let count = self.draw_into(seat, owed)?;
        debug!(player = %name, turn = self.turns, count, "penalty draw");
        events.push(TurnEvent::PenaltyDraw { count });
        self.announce(format!("{} has to draw {} cards!", name, count));
        Ok(())
    }

    /// Moves up to `count` cards from the stock into the seat's hand and
    /// returns how many were drawn.
    ///
    /// When every card but the discard top sits in some hand there is nothing
    /// left to draw, and the draw comes up short instead of failing.
    fn draw_into(&mut self, seat: usize, count: usize) -> Result<usize, GameError> {
        let available = self.stock.len() + self.discard.len().saturating_sub(1);
        if available < count {
            debug!(
                player = %self.players[seat].name,
                owed = count,
                available,
                "draw pool exhausted"
            );
        }
        let drawn = count.min(available);
        for _ in 0..drawn {
            let card = self.stock.draw(&mut self.discard)?;
            self.players[seat].hand.add(card);
        }
        Ok(drawn)
    }

    fn top(&self) -> Result<Card, GameError> {
        self.discard
            .top()
            .ok_or_else(|| GameError::ConsistencyViolation("discard pile is empty".into()))
    }

    fn check_conservation(&self) -> Result<(), GameError> {
        let count = self.card_count();
        if count != self.total_cards {
            error!(count, expected = self.total_cards, "card count drifted");
            return Err(GameError::ConsistencyViolation(format!(
                "{} cards in play, expected {}",
                count, self.total_cards
            )));
        }
        Ok(())
    }

    fn announce(&mut self, message: String) {
        self.last_message = message;
        self.notify();
    }

    fn notify(&mut self) {
        if self.observer.is_none() {
            return;
        }
        let snapshot = self.snapshot();
        if let Some(observer) = self.observer.as_mut() {
            observer.observe(&snapshot);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            discard_top: self.discard.top(),
            stock_count: self.stock.len(),
            hand_counts: self.players.iter().map(|p| p.hand.len()).collect(),
            current_player: self.current,
            last_message: self.last_message.clone(),
        }
    }

    /// Serializable record of the game so far.
    pub fn record(&self, game_id: String) -> GameRecord {
        GameRecord {
            game_id,
            seed: self.seed,
            players: self.players.iter().map(|p| p.name.clone()).collect(),
            opening: self.opening,
            turns: self.history.clone(),
            outcome: self.outcome.clone(),
            ts: None,
        }
    }

    pub fn players(&self) -> &[Player<'a>] {
        &self.players
    }

    pub fn current_player(&self) -> usize {
        self.current
    }

    pub fn effects(&self) -> EffectState {
        self.effects
    }

    pub fn discard_top(&self) -> Option<Card> {
        self.discard.top()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn turns_played(&self) -> u32 {
        self.turns
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    /// Size of the composed deck; constant for the whole game.
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Cards currently in stock, discard pile and all hands.
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.discard.len()
            + self.players.iter().map(|p| p.hand.len()).sum::<usize>()
    }
}

impl std::fmt::Debug for Engine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("stock", &self.stock.len())
            .field("discard_top", &self.discard.top())
            .field("effects", &self.effects)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("turns", &self.turns)
            .field("outcome", &self.outcome)
            .finish()
    }
}
