use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot draw from an empty deck")]
    EmptyDeck,
    #[error("Operation requires the {expected} phase, but the game is in {actual}")]
    WrongPhase {
        expected: &'static str,
        actual: &'static str,
    },
}
