//! Command handler modules for the Blackjack CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and, for `play`, the input stream are
//!   passed in so tests can drive commands with in-memory buffers
//! - All errors propagated via the `CliError` enum

mod cfg;
mod deal;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{GAME_EXIT, handle_play_command, play_game};
pub use sim::handle_sim_command;
