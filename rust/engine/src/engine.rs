use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::errors::GameError;
use crate::game::{Game, Phase, Resolution};
use crate::logger::GameEvent;

/// A player decision on their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Decision {
    Hit,
    Stand,
}

/// The player's seat at the table: whoever makes the Hit/Stand decisions
/// and watches the game unfold.
pub trait Seat {
    type Error: From<GameError>;

    /// Called on every player turn until the player stands or the game ends.
    fn decide(&mut self, game: &Game) -> Result<Decision, Self::Error>;

    /// Called for each event, in order, as soon as it is recorded.
    fn observe(&mut self, _event: &GameEvent) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Returned when a game has been played to the end.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GameExit {
    pub resolution: Resolution,
    pub player_total: u16,
    pub dealer_total: u16,
}

/// Seat that hits below a fixed total and stands at or above it.
#[derive(Debug, Copy, Clone)]
pub struct StandOn(pub u8);

impl Seat for StandOn {
    type Error = GameError;

    fn decide(&mut self, game: &Game) -> Result<Decision, GameError> {
        if game.player().total_value() < u16::from(self.0) {
            Ok(Decision::Hit)
        } else {
            Ok(Decision::Stand)
        }
    }
}

/// Runs games against the dealer. Each game gets a fresh deck whose seed is
/// drawn from the engine's own RNG, so a session replays from one seed.
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::{Engine, StandOn};
///
/// let mut engine = Engine::new(Some(12345));
/// let exit = engine.play(&mut StandOn(17)).unwrap();
/// assert!(exit.player_total >= 4);
/// assert_eq!(engine.games_played(), 1);
/// ```
#[derive(Debug)]
pub struct Engine {
    seed: u64,
    rng: ChaCha20Rng,
    played: u32,
}

impl Engine {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            played: 0,
        }
    }

    /// Session seed, drawn at random when none was given.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn games_played(&self) -> u32 {
        self.played
    }

    /// A fresh, undealt game with the next deck seed of the session.
    pub fn new_game(&mut self) -> Game {
        let game_seed = self.rng.random::<u64>();
        debug!(game_seed, "new game");
        Game::new(game_seed)
    }

    /// Deals and plays a fresh game with `seat` making the player's decisions.
    pub fn play<S: Seat>(&mut self, seat: &mut S) -> Result<GameExit, S::Error> {
        let mut game = self.new_game();
        let exit = run(&mut game, seat)?;
        self.played += 1;
        Ok(exit)
    }
}

/// Plays `game` to the end. A game still in `Dealing` is dealt first; one
/// already past the deal continues from where it is.
pub fn run<S: Seat>(game: &mut Game, seat: &mut S) -> Result<GameExit, S::Error> {
    if game.phase() == Phase::Dealing {
        game.deal()?;
    }
    flush(game, seat)?;

    while game.phase() == Phase::PlayerTurn {
        match seat.decide(game)? {
            Decision::Hit => game.hit()?,
            Decision::Stand => game.stand()?,
        };
        flush(game, seat)?;
    }

    while game.phase() == Phase::DealerTurn {
        game.dealer_step()?;
        flush(game, seat)?;
    }

    match game.phase() {
        Phase::Resolved(resolution) => Ok(GameExit {
            resolution,
            player_total: game.player().total_value(),
            dealer_total: game.dealer().total_value(),
        }),
        other => Err(GameError::WrongPhase {
            expected: "Resolved",
            actual: other.name(),
        }
        .into()),
    }
}

fn flush<S: Seat>(game: &mut Game, seat: &mut S) -> Result<(), S::Error> {
    for event in game.take_events() {
        seat.observe(&event)?;
    }
    Ok(())
}
