use serde::{Deserialize, Serialize};
use std::mem::discriminant;
use tracing::{debug, info};

use crate::cards::Rank;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{Hand, Party};
use crate::logger::GameEvent;
use crate::rules::{compare_totals, dealer_must_hit, INITIAL_CARDS};

/// How a finished game came out, from the player's side of the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    Tie,
}

impl Outcome {
    pub fn winner(&self) -> Option<Party> {
        match self {
            Outcome::PlayerWins => Some(Party::Player),
            Outcome::DealerWins => Some(Party::Dealer),
            Outcome::Tie => None,
        }
    }
}

/// What ended the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Reason {
    /// The named party reached exactly 21.
    Blackjack(Party),
    /// The named party went over 21.
    Bust(Party),
    /// Both parties stood and their totals were compared.
    Comparison,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub outcome: Outcome,
    pub reason: Reason,
}

/// Where a game stands. Every game moves strictly forward through these.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolved(Resolution),
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Dealing => "Dealing",
            Phase::PlayerTurn => "PlayerTurn",
            Phase::DealerTurn => "DealerTurn",
            Phase::Resolved(_) => "Resolved",
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Phase::Resolved(_))
    }
}

/// One game of Blackjack: a deck, the player's hand and the dealer's hand.
///
/// Each operation checks that it is called in the right phase, performs its
/// draws, re-runs ace adjustment on the hand it touched and records a
/// [`GameEvent`] for every transition.
///
/// # Examples
///
/// ```
/// use blackjack_engine::cards::Rank::*;
/// use blackjack_engine::deck::Deck;
/// use blackjack_engine::game::{Game, Outcome, Phase};
///
/// // Player gets 10 and 7, dealer gets 9 and 10.
/// let mut game = Game::with_deck(Deck::stacked([Ten, Nine, Seven, Ten]));
/// assert_eq!(game.deal().unwrap(), Phase::PlayerTurn);
/// game.stand().unwrap();
/// let phase = game.play_dealer().unwrap();
/// assert!(phase.is_resolved());
/// assert_eq!(game.resolution().unwrap().outcome, Outcome::DealerWins);
/// ```
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
    /// Seed of the deck's RNG, absent for stacked decks
    seed: Option<u64>,
    events: Vec<GameEvent>,
    /// Index of the first event not yet handed out by `take_events`
    unread: usize,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let mut game = Self::with_deck(Deck::new_with_seed(seed));
        game.seed = Some(seed);
        game
    }

    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(Party::Player),
            dealer: Hand::new(Party::Dealer),
            phase: Phase::Dealing,
            seed: None,
            events: Vec::new(),
            unread: 0,
        }
    }

    /// Starts a game from hands dealt by hand rather than from the deck.
    /// Aces are adjusted and the game opens on the player's turn; the
    /// blackjack check of a normal deal is skipped.
    ///
    /// The dealer hand must hold at least one card to show face up.
    pub fn with_hands(deck: Deck, player: &[Rank], dealer: &[Rank]) -> Self {
        debug_assert!(!dealer.is_empty(), "dealer hand needs an up card");
        let mut game = Self::with_deck(deck);
        for &r in player {
            game.player.add_card(r);
        }
        for &r in dealer {
            game.dealer.add_card(r);
        }
        game.player.adjust_aces();
        game.dealer.adjust_aces();
        game.record_deal();
        game.phase = Phase::PlayerTurn;
        game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn resolution(&self) -> Option<Resolution> {
        match self.phase {
            Phase::Resolved(r) => Some(r),
            _ => None,
        }
    }

    /// Every event recorded so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Events recorded since the previous call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        let fresh = self.events[self.unread..].to_vec();
        self.unread = self.events.len();
        fresh
    }

    /// Deals two cards each, alternating player and dealer. A player total
    /// of 21 wins immediately and the dealer never plays.
    pub fn deal(&mut self) -> Result<Phase, GameError> {
        self.require(Phase::Dealing)?;
        for _ in 0..INITIAL_CARDS {
            let card = self.deck.draw()?;
            self.player.add_card(card);
            let card = self.deck.draw()?;
            self.dealer.add_card(card);
        }
        self.player.adjust_aces();
        self.dealer.adjust_aces();
        self.record_deal();

        if self.player.is_blackjack() {
            self.resolve(Outcome::PlayerWins, Reason::Blackjack(Party::Player));
        } else {
            self.enter(Phase::PlayerTurn);
        }
        Ok(self.phase)
    }

    pub fn hit(&mut self) -> Result<Phase, GameError> {
        self.require(Phase::PlayerTurn)?;
        let card = self.deck.draw()?;
        self.player.add_card(card);
        self.player.adjust_aces();
        self.events.push(GameEvent::PlayerHit {
            card,
            hand: self.player.ranks(),
            total: self.player.total_value(),
        });

        if self.player.is_blackjack() {
            self.resolve(Outcome::PlayerWins, Reason::Blackjack(Party::Player));
        } else if self.player.is_bust() {
            self.resolve(Outcome::DealerWins, Reason::Bust(Party::Player));
        }
        Ok(self.phase)
    }

    /// Ends the player's turn and reveals the dealer's hand. A dealer
    /// total of 21 wins on the reveal.
    pub fn stand(&mut self) -> Result<Phase, GameError> {
        self.require(Phase::PlayerTurn)?;
        self.events.push(GameEvent::PlayerStood {
            hand: self.player.ranks(),
            total: self.player.total_value(),
        });
        self.enter(Phase::DealerTurn);
        self.events.push(GameEvent::DealerRevealed {
            hand: self.dealer.ranks(),
            total: self.dealer.total_value(),
        });

        if self.dealer.is_blackjack() {
            self.resolve(Outcome::DealerWins, Reason::Blackjack(Party::Dealer));
        }
        Ok(self.phase)
    }

    /// Plays one move of the dealer's fixed strategy: draw under 17,
    /// otherwise stand and settle by comparing totals.
    pub fn dealer_step(&mut self) -> Result<Phase, GameError> {
        self.require(Phase::DealerTurn)?;
        if !dealer_must_hit(self.dealer.total_value()) {
            self.events.push(GameEvent::DealerStood {
                hand: self.dealer.ranks(),
                total: self.dealer.total_value(),
            });
            let outcome = compare_totals(self.player.total_value(), self.dealer.total_value());
            self.resolve(outcome, Reason::Comparison);
            return Ok(self.phase);
        }

        let card = self.deck.draw()?;
        self.dealer.add_card(card);
        self.dealer.adjust_aces();
        self.events.push(GameEvent::DealerHit {
            card,
            hand: self.dealer.ranks(),
            total: self.dealer.total_value(),
        });

        if self.dealer.is_blackjack() {
            self.resolve(Outcome::DealerWins, Reason::Blackjack(Party::Dealer));
        } else if self.dealer.is_bust() {
            self.resolve(Outcome::PlayerWins, Reason::Bust(Party::Dealer));
        }
        Ok(self.phase)
    }

    /// Runs the dealer's turn to the end.
    pub fn play_dealer(&mut self) -> Result<Phase, GameError> {
        loop {
            let phase = self.dealer_step()?;
            if phase.is_resolved() {
                return Ok(phase);
            }
        }
    }

    fn require(&self, expected: Phase) -> Result<(), GameError> {
        if discriminant(&self.phase) == discriminant(&expected) {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected: expected.name(),
                actual: self.phase.name(),
            })
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug!(from = self.phase.name(), to = phase.name(), "phase change");
        self.phase = phase;
    }

    fn record_deal(&mut self) {
        if let Some(dealer_up) = self.dealer.up_card() {
            self.events.push(GameEvent::Dealt {
                player: self.player.ranks(),
                player_total: self.player.total_value(),
                dealer_up,
            });
        }
    }

    fn resolve(&mut self, outcome: Outcome, reason: Reason) {
        let resolution = Resolution { outcome, reason };
        self.enter(Phase::Resolved(resolution));
        info!(
            ?outcome,
            ?reason,
            player_total = self.player.total_value(),
            dealer_total = self.dealer.total_value(),
            "game resolved"
        );
        self.events.push(GameEvent::Resolved {
            resolution,
            player: self.player.ranks(),
            player_total: self.player.total_value(),
            dealer: self.dealer.ranks(),
            dealer_total: self.dealer.total_value(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn operations_out_of_phase_are_rejected() {
        let mut game = Game::with_deck(Deck::stacked([Two, Three, Four, Five]));
        assert_eq!(
            game.hit(),
            Err(GameError::WrongPhase {
                expected: "PlayerTurn",
                actual: "Dealing"
            })
        );
        assert!(game.dealer_step().is_err());
        game.deal().unwrap();
        assert!(game.deal().is_err());
    }

    #[test]
    fn take_events_only_returns_new_events() {
        let mut game = Game::with_deck(Deck::stacked([Two, Three, Four, Five, Six]));
        game.deal().unwrap();
        assert_eq!(game.take_events().len(), 1);
        game.hit().unwrap();
        let fresh = game.take_events();
        assert_eq!(fresh.len(), 1);
        assert!(matches!(fresh[0], GameEvent::PlayerHit { card: Six, .. }));
        assert!(game.take_events().is_empty());
        assert_eq!(game.events().len(), 2);
    }

    #[test]
    fn empty_deck_during_deal_is_an_error() {
        let mut game = Game::with_deck(Deck::stacked([Ten, Nine, Eight]));
        assert_eq!(game.deal(), Err(GameError::EmptyDeck));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "dealer hand needs an up card")]
    fn hands_without_a_dealer_card_are_rejected() {
        let _ = Game::with_hands(Deck::stacked(Vec::new()), &[Ten, Six], &[]);
    }

    #[test]
    fn outcome_winner() {
        assert_eq!(Outcome::PlayerWins.winner(), Some(Party::Player));
        assert_eq!(Outcome::Tie.winner(), None);
    }
}
