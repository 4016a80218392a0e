//! # Mau-Mau CLI Library
//!
//! Command-line front end for the `maumau-engine` rules engine: an interactive
//! game against automated opponents, batch simulations, and a view of the
//! effective configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["maumau", "play", "--demo", "--seed", "7"];
//! let code = maumau_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game against automated opponents
//! - `sim`: Run many automated games and report win counts
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod terminal;
pub mod ui;
pub mod validation;

use cli::{Commands, MaumauCli};
use commands::{PlayOptions, handle_cfg_command, handle_play_command, handle_sim_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success (a game the player quits included), `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["maumau", "sim", "--games", "2", "--seed", "42"];
/// let code = maumau_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
///
/// # Available Commands
///
/// - `play [--seed S] [--players N] [--name NAME] [--demo] [--deck short|full] [--copies C]`
/// - `sim --games N [--seed S] [--players N] [--output FILE]`
/// - `cfg`
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = MaumauCli::try_parse_from(&argv);
    let cli = match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Mau-Mau CLI");
                    write_or_exit!(err, "Usage: maumau <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: maumau --help");
                    exit_code::ERROR
                }
            };
        }
        Ok(cli) => cli,
    };

    logging::init_logging();

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play {
            seed,
            players,
            name,
            demo,
            deck,
            copies,
        } => {
            let opts = PlayOptions {
                seed,
                players,
                name,
                demo,
                deck,
                copies,
            };
            match io_utils::scripted_input() {
                Some(mut script) => handle_play_command(opts, out, err, &mut script),
                None => {
                    // Use stdin for real input (supports both TTY and piped stdin)
                    let stdin = std::io::stdin();
                    let mut stdin_lock = stdin.lock();
                    handle_play_command(opts, out, err, &mut stdin_lock)
                }
            }
        }
        Commands::Sim {
            games,
            seed,
            players,
            output,
        } => handle_sim_command(games, seed, players, output, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
