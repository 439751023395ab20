//! # Blackjack CLI Library
//!
//! Command-line front end for the Blackjack engine: interactive games against
//! the dealer, single deals for inspection and batch simulations.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand. [`run_with_input`] does
//! the same with an explicit input stream, so a whole interactive session can
//! be scripted.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut input = Cursor::new("s\n");
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = blackjack_cli::run_with_input(
//!     ["blackjack", "play", "--seed", "42"],
//!     &mut input,
//!     &mut out,
//!     &mut err,
//! );
//! let transcript = String::from_utf8(out).unwrap();
//! assert!(transcript.contains("Game Started!"));
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play games against the dealer, answering (H)it or (S)tand
//! - `deal`: Deal the opening hands of one game for inspection
//! - `sim`: Play games with a stand-on-total player and tally the results
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command};

pub use commands::{GAME_EXIT, play_game};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "sim", "cfg"];

/// Main entry point for the CLI application, reading player input from stdin.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input ends mid-game
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Supports both TTY and piped stdin
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], with player answers read from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play { seed, games } => handle_play_command(seed, games, out, err, input),
        Commands::Deal { seed, json } => handle_deal_command(seed, json, out),
        Commands::Sim {
            games,
            stand_on,
            seed,
            jsonl,
        } => handle_sim_command(games, stand_on, seed, jsonl, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e @ CliError::Interrupted(_)) => {
            crate::write_or_exit!(err, "{}", e);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            crate::write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    crate::write_or_exit!(err, "{}", e);
    crate::write_or_exit!(err, "Blackjack CLI");
    crate::write_or_exit!(err, "Usage: blackjack <command> [options]\n");
    crate::write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        crate::write_or_exit!(err, "  {}", c);
    }
    crate::write_or_exit!(err, "\nFor full help, run: blackjack --help");
    exit_code::ERROR
}
