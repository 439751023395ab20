use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, Rank};
use crate::errors::GameError;

#[derive(Debug)]
enum DrawOrder {
    Random(ChaCha20Rng),
    /// Cards come off the back of the vector, which holds them reversed.
    Stacked,
}

/// The ranks still available for drawing in the current game.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Rank>,
    order: DrawOrder,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            order: DrawOrder::Random(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    /// A deck that deals `ranks` in the given order, first item first.
    ///
    /// ```
    /// use blackjack_engine::cards::Rank;
    /// use blackjack_engine::deck::Deck;
    ///
    /// let mut deck = Deck::stacked([Rank::Ace, Rank::King]);
    /// assert_eq!(deck.draw(), Ok(Rank::Ace));
    /// assert_eq!(deck.draw(), Ok(Rank::King));
    /// assert!(deck.draw().is_err());
    /// ```
    pub fn stacked<I: IntoIterator<Item = Rank>>(ranks: I) -> Self {
        let mut cards: Vec<Rank> = ranks.into_iter().collect();
        cards.reverse();
        Self {
            cards,
            order: DrawOrder::Stacked,
        }
    }

    /// Removes one card from the deck and returns its rank.
    pub fn draw(&mut self) -> Result<Rank, GameError> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        let rank = match &mut self.order {
            DrawOrder::Random(rng) => {
                let idx = rng.random_range(0..self.cards.len());
                self.cards.swap_remove(idx)
            }
            DrawOrder::Stacked => self.cards.pop().ok_or(GameError::EmptyDeck)?,
        };
        debug!(card = %rank, remaining = self.cards.len(), "drew card");
        Ok(rank)
    }

    /// Takes every copy of `rank` out of the deck, returning how many were removed.
    pub fn remove_rank(&mut self, rank: Rank) -> usize {
        let before = self.cards.len();
        self.cards.retain(|&c| c != rank);
        before - self.cards.len()
    }

    pub fn count(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|&&c| c == rank).count()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
