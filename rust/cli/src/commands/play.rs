//! # Play Command
//!
//! Interactive Blackjack against the dealer.
//!
//! The player answers `(H)it or (S)tand` at each prompt. Only the first
//! character of an answer matters and anything unrecognised re-prompts. Every
//! game transition is printed as it happens, and `Game Exit` marks the end of
//! each finished game. If input runs out mid-game the session stops with
//! [`CliError::Interrupted`].

use crate::config::{self, ValueSource};
use crate::error::CliError;
use crate::formatters::{format_turn_banner, render_event};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_decision};
use blackjack_engine::engine::{Decision, Engine, GameExit, Seat, run};
use blackjack_engine::game::Game;
use blackjack_engine::hand::Party;
use blackjack_engine::logger::GameEvent;
use std::io::{BufRead, Write};
use tracing::info;

const PROMPT: &str = "Would you like to (H)it or (S)tand? ";

/// Printed after every finished game.
pub const GAME_EXIT: &str = "Game Exit";

/// The human at the table: decisions come from `input`, the game is shown on `out`.
struct ConsoleSeat<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    turn_announced: bool,
}

impl<'a> ConsoleSeat<'a> {
    fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self {
            input,
            out,
            turn_announced: false,
        }
    }
}

impl Seat for ConsoleSeat<'_> {
    type Error = CliError;

    fn decide(&mut self, _game: &Game) -> Result<Decision, CliError> {
        if !self.turn_announced {
            writeln!(self.out, "\n{}", format_turn_banner(Party::Player))?;
            self.turn_announced = true;
        }
        loop {
            write!(self.out, "\n{}", PROMPT)?;
            self.out.flush()?;
            let Some(line) = read_stdin_line(self.input) else {
                writeln!(self.out)?;
                return Err(CliError::Interrupted(
                    "input ended before the game finished".to_string(),
                ));
            };
            match parse_decision(&line) {
                ParseResult::Decision(decision) => return Ok(decision),
                ParseResult::Invalid(msg) => writeln!(self.out, "\n{}", msg)?,
            }
        }
    }

    fn observe(&mut self, event: &GameEvent) -> Result<(), CliError> {
        for block in render_event(event) {
            writeln!(self.out, "\n{}", block)?;
        }
        Ok(())
    }
}

/// Plays one game from whatever phase it is in, with decisions read from `input`.
pub fn play_game(
    game: &mut Game,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<GameExit, CliError> {
    let mut seat = ConsoleSeat::new(input, out);
    let exit = run(game, &mut seat)?;
    writeln!(out, "\n{}", GAME_EXIT)?;
    Ok(exit)
}

/// Handle the play command: interactive games against the dealer.
///
/// # Arguments
///
/// * `seed` - Session seed (default: config, then random)
/// * `games` - Number of games to play (default: config, then 1)
/// * `out` - Output stream for the game transcript
/// * `err` - Error stream for warnings
/// * `stdin` - Input stream for Hit/Stand answers
pub fn handle_play_command(
    seed: Option<u64>,
    games: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    let games = games.unwrap_or(resolved.config.games);
    if seed.is_none() && resolved.sources.seed != ValueSource::Default {
        ui::display_warning(
            err,
            "Seed is fixed by configuration; every session deals the same cards.",
        )?;
    }

    let mut engine = Engine::new(seed.or(resolved.config.seed));
    writeln!(out, "play: games={} seed={}", games, engine.seed())?;
    info!(games, seed = engine.seed(), "play session started");

    for i in 1..=games {
        if games > 1 {
            writeln!(out, "\n==== Game {} ====", i)?;
        }
        writeln!(out, "\nGame Started!")?;
        let mut game = engine.new_game();
        play_game(&mut game, stdin, out)?;
    }

    writeln!(out, "\nGames played: {}", games)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::Rank::*;
    use blackjack_engine::deck::Deck;
    use blackjack_engine::game::{Outcome, Reason};
    use std::io::Cursor;

    fn play(deck: Deck, answers: &str) -> (Result<GameExit, CliError>, String) {
        let mut game = Game::with_deck(deck);
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = play_game(&mut game, &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn stand_right_away_reaches_comparison() {
        // Player 10+9, dealer 10+7
        let (result, output) = play(Deck::stacked([Ten, Ten, Nine, Seven]), "S\n");
        let exit = result.unwrap();
        assert_eq!(exit.resolution.outcome, Outcome::PlayerWins);
        assert!(output.contains("Dealer has: 10 ? = ?"));
        assert!(output.contains("### Player's turn ###"));
        assert!(output.contains("Player stands with 10 9 = 19"));
        assert!(output.contains("### Dealer's turn ###"));
        assert!(output.contains("Dealer has: 10 7 = 17"));
        assert!(output.contains("Player Wins!\n10 9 = 19 to Dealer's 10 7 = 17"));
        assert!(output.trim_end().ends_with(GAME_EXIT));
    }

    #[test]
    fn invalid_answers_reprompt_until_valid() {
        let (result, output) = play(Deck::stacked([Ten, Ten, Nine, Seven]), "x\n\nquit\ns\n");
        assert!(result.is_ok());
        assert_eq!(output.matches(crate::validation::USAGE).count(), 3);
        assert_eq!(output.matches(PROMPT).count(), 4);
    }

    #[test]
    fn hitting_until_bust_ends_the_game() {
        // Player 10+6 hits a King
        let (result, output) = play(Deck::stacked([Ten, Nine, Six, Eight, King]), "h\n");
        let exit = result.unwrap();
        assert_eq!(exit.resolution.reason, Reason::Bust(Party::Player));
        assert!(output.contains("Player hits"));
        assert!(output.contains("Player has: 10 6 K = 26"));
        assert!(output.contains("Player busts with 26"));
        assert!(!output.contains("### Dealer's turn ###"));
    }

    #[test]
    fn hit_then_stand_lets_dealer_draw() {
        // Player 5+6 hits 4; dealer 10+2 draws a 3 then a 5
        let deck = Deck::stacked([Five, Ten, Six, Two, Four, Three, Five]);
        let (result, output) = play(deck, "H\nS\n");
        let exit = result.unwrap();
        assert_eq!(exit.dealer_total, 20);
        assert_eq!(output.matches("Dealer hits").count(), 2);
        assert!(output.contains("Dealer stands with 10 2 3 5 = 20"));
        assert!(output.contains("Dealer Wins!"));
    }

    #[test]
    fn natural_twenty_one_skips_the_prompt() {
        let (result, output) = play(Deck::stacked([Ace, Nine, King, Nine]), "");
        let exit = result.unwrap();
        assert_eq!(exit.resolution.reason, Reason::Blackjack(Party::Player));
        assert!(output.contains("Player Wins!\nBlackjack!"));
        assert!(!output.contains(PROMPT));
    }

    #[test]
    fn end_of_input_interrupts_the_game() {
        let (result, _) = play(Deck::stacked([Ten, Ten, Nine, Seven]), "x\n");
        assert!(matches!(result, Err(CliError::Interrupted(_))));
    }

    #[test]
    fn dealer_empty_deck_surfaces_as_engine_error() {
        // Dealer 10+2 must draw but the deck is exhausted
        let (result, _) = play(Deck::stacked([Ten, Ten, Nine, Two]), "s\n");
        assert!(matches!(
            result,
            Err(CliError::Engine(blackjack_engine::errors::GameError::EmptyDeck))
        ));
    }
}
