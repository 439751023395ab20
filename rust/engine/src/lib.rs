//! # blackjack-engine: Blackjack Game Engine Core
//!
//! Single-player Blackjack against a dealer with a fixed strategy. Provides
//! the deck, hand valuation with ace resolution, and the turn-based game
//! state machine. Text input and output live in the CLI crate.
//!
//! ## Core Modules
//!
//! - [`cards`] - Ranks and their base point values
//! - [`deck`] - 52-card deck with uniform random draws (ChaCha20 RNG)
//! - [`hand`] - Hands, ace adjustment and the best-total resolver
//! - [`rules`] - Dealer strategy and outcome comparison
//! - [`game`] - Game phases and the Dealing → PlayerTurn → DealerTurn → Resolved machine
//! - [`engine`] - Session runner and the [`engine::Seat`] trait for player decisions
//! - [`logger`] - Game events and JSONL game records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::Rank;
//! use blackjack_engine::hand::{Hand, Party};
//!
//! let mut hand = Hand::with_ranks(Party::Player, [Rank::Ace, Rank::Ace, Rank::Seven]);
//! hand.adjust_aces();
//! assert_eq!(hand.total_value(), 19);
//! ```
//!
//! ## Playing a Game
//!
//! Any [`engine::Seat`] can take the player's chair:
//!
//! ```rust
//! use blackjack_engine::engine::{Engine, StandOn};
//!
//! let mut engine = Engine::new(Some(42));
//! match engine.play(&mut StandOn(17)) {
//!     Ok(exit) => println!("{:?}", exit.resolution.outcome),
//!     Err(e) => println!("game failed: {}", e),
//! }
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod rules;
