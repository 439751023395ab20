//! Deal command handler for inspecting a single opening deal.
//!
//! Deals the opening hands of one game and prints both of them in full,
//! including the dealer's hidden card. If the deal already decides the game
//! (the player holds 21) the result banner follows. With `--json` the game
//! record is printed instead.

use crate::error::CliError;
use crate::formatters::{format_hand_line, format_resolution};
use blackjack_engine::engine::Engine;
use blackjack_engine::hand::Party;
use blackjack_engine::logger::{GameRecord, RecordWriter};
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional session seed for a reproducible deal
/// * `json` - Print the game record as a JSON line instead of text
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut engine = Engine::new(seed);
    let mut game = engine.new_game();
    game.deal()?;

    if json {
        let mut writer = RecordWriter::new(&mut *out);
        let id = writer.next_id();
        writer.write(&GameRecord::from_game(id, &game))?;
        return Ok(());
    }

    let player = game.player();
    let dealer = game.dealer();
    writeln!(out, "Seed: {}", engine.seed())?;
    writeln!(
        out,
        "{}",
        format_hand_line(Party::Player, &player.ranks(), player.total_value())
    )?;
    writeln!(
        out,
        "{}",
        format_hand_line(Party::Dealer, &dealer.ranks(), dealer.total_value())
    )?;
    if let Some(resolution) = game.resolution() {
        for block in format_resolution(
            &resolution,
            &player.ranks(),
            player.total_value(),
            &dealer.ranks(),
            dealer.total_value(),
        ) {
            writeln!(out, "{}", block)?;
        }
    }
    Ok(())
}
