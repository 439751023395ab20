use std::cmp::Ordering;

use crate::game::Outcome;

/// The target total. Reaching it exactly wins on the spot.
pub const BLACKJACK: u16 = 21;

/// The dealer draws while under this total and stands at or above it.
pub const DEALER_STANDS_ON: u16 = 17;

/// Cards dealt to each party before the player acts.
pub const INITIAL_CARDS: usize = 2;

/// Whether the dealer's fixed strategy calls for another card.
///
/// ```
/// use blackjack_engine::rules::dealer_must_hit;
///
/// assert!(dealer_must_hit(16));
/// assert!(!dealer_must_hit(17));
/// ```
pub fn dealer_must_hit(total: u16) -> bool {
    total < DEALER_STANDS_ON
}

/// Outcome when both parties stood without busting: higher total wins.
pub fn compare_totals(player: u16, dealer: u16) -> Outcome {
    match player.cmp(&dealer) {
        Ordering::Greater => Outcome::PlayerWins,
        Ordering::Less => Outcome::DealerWins,
        Ordering::Equal => Outcome::Tie,
    }
}
