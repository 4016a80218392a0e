//! Rule policy for automated seats.
//!
//! The engine has already handled skips, penalty draws and forced draws by the
//! time the policy runs; it only breaks the tie among legal cards. Preference:
//!
//! 1. a seven while a sevens chain is live (counter instead of paying)
//! 2. a suit match that is a seven, then an eight, then any other suit match
//! 3. a rank match
//!
//! Within each tier the first card in hand order wins, which keeps seeded
//! games reproducible.

use crate::cards::Rank;
use crate::player::TurnContext;
use crate::rules::find_matches;

/// Picks the slot to play, or `None` if nothing in the hand can follow the top card.
pub fn baseline_choice(ctx: &TurnContext<'_>) -> Option<usize> {
    let hand = ctx.hand;
    if ctx.pending_sevens > 0 {
        if let Some(slot) = hand.find_rank(Rank::Seven) {
            return Some(slot);
        }
    }

    let matches = find_matches(hand, ctx.top);
    let suit_with = |rank: Rank| {
        matches
            .suit
            .iter()
            .copied()
            .find(|&slot| hand.get(slot).is_some_and(|c| c.rank == rank))
    };

    suit_with(Rank::Seven)
        .or_else(|| suit_with(Rank::Eight))
        .or_else(|| matches.suit.first().copied())
        .or_else(|| matches.rank.first().copied())
}
