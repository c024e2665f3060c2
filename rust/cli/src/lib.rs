//! # Arena CLI Library
//!
//! Command-line interface for the arena poker engine: runs games between
//! built-in bots, evaluates lineups over many games, and reports the
//! resolved configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["arena", "run", "--bots", "caller,raiser,baseline", "--hands", "10"];
//! let code = arena_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `run`: Play one game between the named bots, optionally recording a
//!   JSONL hand history
//! - `eval`: Play many games with the same lineup and compare win rates
//! - `cfg`: Display current configuration settings and their sources

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;

use cli::{ArenaCli, Commands};
use commands::{handle_cfg_command, handle_eval_command, handle_run_command};
pub use error::CliError;

/// Parse the given arguments and run the matching subcommand.
///
/// Returns the process exit code: `0` for success, `2` for any error.
/// Help and version requests print to `out` and return `0`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ArenaCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "For full help, run: arena --help").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            };
        }
        Ok(cli) => cli,
    };

    let result = match cli.cmd {
        Commands::Run {
            bots,
            hands,
            seed,
            output,
        } => handle_run_command(&bots, hands, seed, output.as_deref(), out, err),
        Commands::Eval {
            bots,
            games,
            hands,
            seed,
        } => handle_eval_command(&bots, games, hands, seed, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
