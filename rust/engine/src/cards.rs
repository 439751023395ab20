use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of copies of each rank in a fresh deck.
pub const COPIES_PER_RANK: usize = 4;

/// Represents the rank of a playing card from Two through Ace.
/// Suits carry no meaning in Blackjack, so a card is fully described by its rank.
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
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack, worth 10
    Jack,
    /// Queen, worth 10
    Queen,
    /// King, worth 10
    King,
    /// Ace, worth 11 until lowered to 1
    Ace,
}

impl Rank {
    /// Point value a freshly drawn card is assigned.
    ///
    /// ```
    /// use blackjack_engine::cards::Rank;
    ///
    /// assert_eq!(Rank::Seven.base_value(), 7);
    /// assert_eq!(Rank::Queen.base_value(), 10);
    /// assert_eq!(Rank::Ace.base_value(), 11);
    /// ```
    pub fn base_value(self) -> u8 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            numeric => numeric as u8,
        }
    }

    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }

    /// Symbol used when printing hands: `2`..`10`, `J`, `Q`, `K`, `A`.
    pub fn symbol(self) -> &'static str {
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
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub fn all_ranks() -> [Rank; 13] {
    [
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

/// The 52 ranks of a single standard deck, four of each.
pub fn full_deck() -> Vec<Rank> {
    let mut v = Vec::with_capacity(52);
    for _ in 0..COPIES_PER_RANK {
        v.extend_from_slice(&all_ranks());
    }
    v
}
