//! Tracing setup for the `blackjack` binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::config;

/// Installs the global subscriber. `RUST_LOG` wins over the configured
/// `log_level`. Output goes to stderr so it never mixes with the game on stdout.
pub fn init_logging() -> Result<(), String> {
    let default_level = config::load()
        .map(|cfg| cfg.log_level)
        .unwrap_or_else(|_| config::Config::default().log_level);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_level))
        .map_err(|e| format!("invalid log filter '{}': {}", default_level, e))?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e.to_string())
}
