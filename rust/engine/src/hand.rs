//! Hand bookkeeping and ace resolution.
//!
//! A [`Hand`] keeps each card together with the value it currently counts for.
//! Aces enter at 11 and [`Hand::adjust_aces`] lowers them to 1, one at a time,
//! while the hand is over [`BLACKJACK`].

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::cards::Rank;
use crate::rules::BLACKJACK;

/// Value an ace counts for once it has been lowered.
pub const HARD_ACE: u8 = 1;
/// Value an ace counts for when drawn.
pub const SOFT_ACE: u8 = 11;

/// The two sides of the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Party {
    Player,
    Dealer,
}

impl Party {
    pub fn as_str(&self) -> &'static str {
        match self {
            Party::Player => "Player",
            Party::Dealer => "Dealer",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card held in a hand and the value it currently counts for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandCard {
    pub rank: Rank,
    pub value: u8,
}

/// Cards held by one party, in the order they were drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    owner: Party,
    cards: Vec<HandCard>,
}

impl Hand {
    pub fn new(owner: Party) -> Self {
        Self {
            owner,
            cards: Vec::new(),
        }
    }

    /// Builds a hand holding `ranks` at their base values, without adjusting aces.
    pub fn with_ranks<I: IntoIterator<Item = Rank>>(owner: Party, ranks: I) -> Self {
        let mut hand = Self::new(owner);
        for r in ranks {
            hand.add_card(r);
        }
        hand
    }

    pub fn add_card(&mut self, rank: Rank) {
        self.cards.push(HandCard {
            rank,
            value: rank.base_value(),
        });
    }

    pub fn cards(&self) -> &[HandCard] {
        &self.cards
    }

    pub fn ranks(&self) -> Vec<Rank> {
        self.cards.iter().map(|c| c.rank).collect()
    }

    /// The first card dealt, the one left face up before the dealer's turn.
    pub fn up_card(&self) -> Option<Rank> {
        self.cards.first().map(|c| c.rank)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of the values the cards currently count for.
    pub fn total_value(&self) -> u16 {
        self.cards.iter().map(|c| u16::from(c.value)).sum()
    }

    pub fn aces(&self) -> usize {
        self.cards.iter().filter(|c| c.rank.is_ace()).count()
    }

    /// True while at least one ace still counts as 11.
    pub fn is_soft(&self) -> bool {
        self.cards
            .iter()
            .any(|c| c.rank.is_ace() && c.value == SOFT_ACE)
    }

    /// Lowers aces from 11 to 1, in hand order, until the total is at most 21
    /// or no ace is left at 11. Returns the number of aces lowered.
    ///
    /// ```
    /// use blackjack_engine::cards::Rank;
    /// use blackjack_engine::hand::{Hand, Party};
    ///
    /// let mut hand = Hand::with_ranks(Party::Dealer, [Rank::Ace, Rank::Ace, Rank::Nine]);
    /// assert!(hand.is_bust());
    /// assert_eq!(hand.adjust_aces(), 1);
    /// assert_eq!(hand.total_value(), 21);
    /// ```
    pub fn adjust_aces(&mut self) -> usize {
        let aces = self.aces();
        let mut total = self.total_value();
        let mut adjusted = 0;
        for card in self.cards.iter_mut() {
            if total <= BLACKJACK || adjusted == aces {
                break;
            }
            if card.rank.is_ace() && card.value == SOFT_ACE {
                card.value = HARD_ACE;
                total -= u16::from(SOFT_ACE - HARD_ACE);
                adjusted += 1;
            }
        }
        debug_assert!(adjusted <= aces, "lowered more aces than the hand holds");
        if adjusted > 0 {
            debug!(party = %self.owner, adjusted, total, "lowered aces");
        }
        adjusted
    }

    pub fn is_bust(&self) -> bool {
        self.total_value() > BLACKJACK
    }

    /// Any total of exactly 21 counts, however many cards it took.
    pub fn is_blackjack(&self) -> bool {
        self.total_value() == BLACKJACK
    }
}

/// Best total for a set of ranks: the highest total not over 21 reachable by
/// counting aces as 1 or 11, or the all-aces-at-1 total when every choice busts.
///
/// ```
/// use blackjack_engine::cards::Rank;
/// use blackjack_engine::hand::best_total;
///
/// assert_eq!(best_total(&[Rank::Ace, Rank::Ace, Rank::Six, Rank::Two]), 20);
/// assert_eq!(best_total(&[Rank::King, Rank::Queen, Rank::Ace, Rank::Five]), 26);
/// ```
pub fn best_total(ranks: &[Rank]) -> u16 {
    let mut total: u16 = ranks.iter().map(|r| u16::from(r.base_value())).sum();
    let mut soft = ranks.iter().filter(|r| r.is_ace()).count();
    while total > BLACKJACK && soft > 0 {
        total -= u16::from(SOFT_ACE - HARD_ACE);
        soft -= 1;
    }
    total
}
