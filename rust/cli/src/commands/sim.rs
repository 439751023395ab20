//! Simulation command handler.
//!
//! Plays a batch of games with a [`StandOn`] seat, which hits below a fixed
//! total and stands at or above it, and tallies the outcomes. With `--jsonl`,
//! each finished game is written to stdout as a [`GameRecord`] line and the
//! summary goes to stderr so the record stream stays machine-readable.
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//!
//! let code = blackjack_cli::run(
//!     vec!["blackjack", "sim", "--games", "1000", "--stand-on", "16", "--seed", "42"],
//!     &mut io::stdout(),
//!     &mut io::stderr(),
//! );
//! assert_eq!(code, 0);
//! ```

use crate::config;
use crate::error::CliError;
use blackjack_engine::engine::{Engine, StandOn, run};
use blackjack_engine::game::Outcome;
use blackjack_engine::logger::{GameRecord, RecordWriter};
use std::io::Write;
use tracing::info;

/// Outcome counts for a batch of games, from the player's side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.wins += 1,
            Outcome::DealerWins => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    fn percent(&self, n: u32) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            100.0 * f64::from(n) / f64::from(self.total())
        }
    }
}

/// Handle the sim command: play `games` games automatically and report the tally.
///
/// # Arguments
///
/// * `games` - Number of games (default: config, then 1)
/// * `stand_on` - Total the simulated player stands on (default: config, then 17)
/// * `seed` - Session seed (default: config, then random)
/// * `jsonl` - Write one game record per line to `out`
/// * `out` - Output stream for the summary, or the records with `jsonl`
/// * `err` - Output stream for the summary when `jsonl` is set
pub fn handle_sim_command(
    games: Option<u32>,
    stand_on: Option<u8>,
    seed: Option<u64>,
    jsonl: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let games = games.unwrap_or(cfg.games);
    let stand_on = stand_on.unwrap_or(cfg.stand_on);
    let mut engine = Engine::new(seed.or(cfg.seed));
    info!(games, stand_on, seed = engine.seed(), "simulation started");

    let tally = if jsonl {
        let mut writer = RecordWriter::new(&mut *out);
        simulate(&mut engine, games, stand_on, Some(&mut writer))?
    } else {
        simulate::<&mut dyn Write>(&mut engine, games, stand_on, None)?
    };

    let summary: &mut dyn Write = if jsonl { err } else { out };
    writeln!(
        summary,
        "sim: games={} stand_on={} seed={}",
        games,
        stand_on,
        engine.seed()
    )?;
    writeln!(
        summary,
        "Player wins: {} ({:.1}%)",
        tally.wins,
        tally.percent(tally.wins)
    )?;
    writeln!(
        summary,
        "Dealer wins: {} ({:.1}%)",
        tally.losses,
        tally.percent(tally.losses)
    )?;
    writeln!(
        summary,
        "Ties: {} ({:.1}%)",
        tally.ties,
        tally.percent(tally.ties)
    )?;
    Ok(())
}

fn simulate<W: Write>(
    engine: &mut Engine,
    games: u32,
    stand_on: u8,
    mut records: Option<&mut RecordWriter<W>>,
) -> Result<Tally, CliError> {
    let mut tally = Tally::default();
    let mut seat = StandOn(stand_on);
    for _ in 0..games {
        let mut game = engine.new_game();
        let exit = run(&mut game, &mut seat)?;
        tally.record(exit.resolution.outcome);
        if let Some(writer) = records.as_mut() {
            let id = writer.next_id();
            writer.write(&GameRecord::from_game(id, &game))?;
        }
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_outcome() {
        let mut tally = Tally::default();
        tally.record(Outcome::PlayerWins);
        tally.record(Outcome::DealerWins);
        tally.record(Outcome::DealerWins);
        tally.record(Outcome::Tie);
        assert_eq!(
            tally,
            Tally {
                wins: 1,
                losses: 2,
                ties: 1
            }
        );
        assert_eq!(tally.total(), 4);
        assert!((tally.percent(tally.losses) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_tally_has_zero_percent() {
        assert_eq!(Tally::default().percent(0), 0.0);
    }

    #[test]
    fn summary_adds_up_to_games() {
        let mut engine = Engine::new(Some(3));
        let tally = simulate::<Vec<u8>>(&mut engine, 200, 17, None).unwrap();
        assert_eq!(tally.total(), 200);
    }
}
