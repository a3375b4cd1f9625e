//! # Hold'em CLI Library
//!
//! Command-line front end for the `holdem_engine` rules engine.
//!
//! The entry point is [`run`], which parses arguments, installs logging and
//! dispatches to a subcommand:
//!
//! - `eval`: best five-card hand out of seven cards
//! - `deal`: deal hole cards and a board for inspection
//! - `play`: drive one hand to showdown with every player calling
//! - `cfg`: show the resolved configuration
//!
//! ```
//! use std::io;
//! let args = vec!["holdem", "eval", "Ah", "Kh", "Qh", "Jh", "Th", "2c", "3d"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{COMMANDS, Commands, HoldemCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
};

pub use error::CliError;

/// Runs the CLI and returns the process exit code.
///
/// Help and version go to `out` with [`exit_code::SUCCESS`]. Argument errors
/// and command failures are written to `err` and return [`exit_code::ERROR`].
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
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
                    let _ = write_usage(err, &e.to_string());
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Deal { players, seed } => handle_deal_command(players, seed, out, err),
        Commands::Play {
            players,
            seed,
            events,
        } => handle_play_command(players, seed, events, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_error: &str) -> std::io::Result<()> {
    writeln!(err, "{}", clap_error)?;
    writeln!(err)?;
    writeln!(err, "Usage: holdem <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: holdem --help")
}
