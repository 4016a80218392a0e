//! Configuration command handler.
//!
//! Displays the effective settings together with their source (default,
//! environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "players": {
//!     "value": 3,
//!     "source": "default"
//!   },
//!   "deck": {
//!     "value": "short",
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading or validation fails.
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "hand_size": {
            "value": config.hand_size,
            "source": sources.hand_size,
        },
        "deck": {
            "value": config.deck,
            "source": sources.deck,
        },
        "copies": {
            "value": config.copies,
            "source": sources.copies,
        },
        "max_turns": {
            "value": config.max_turns,
            "source": sources.max_turns,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
