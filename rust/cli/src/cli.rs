//! Command-line argument types.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blackjack", version, about = "Blackjack against the dealer")]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play games against the dealer, answering (H)it or (S)tand at each prompt
    Play {
        /// Session seed for reproducible decks
        #[arg(long)]
        seed: Option<u64>,
        /// Number of games to play
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: Option<u32>,
    },
    /// Deal the opening hands of one game and show them
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Print the game record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play games automatically with a stand-on-total player and tally results
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: Option<u32>,
        /// Total at which the simulated player stands
        #[arg(long = "stand-on", value_parser = clap::value_parser!(u8).range(2..=21))]
        stand_on: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        /// Write one JSON game record per line to stdout
        #[arg(long)]
        jsonl: bool,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
