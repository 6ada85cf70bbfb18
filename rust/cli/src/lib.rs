//! # stackfish CLI
//!
//! Command-line front end for the decision core. Subcommands:
//!
//! - `decide`: read one game-state snapshot (JSON file or stdin) and print
//!   the decision as JSON
//! - `equity`: standalone Monte Carlo equity for hole cards vs random hands
//! - `profiles`: list the personality table
//! - `cfg`: show the resolved configuration and value sources
//!
//! The primary entry point is [`run`], which parses arguments and dispatches;
//! handlers write to injected streams so tests can capture output.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["stackfish", "equity", "--hole", "AhAs", "--seed", "42"];
//! let code = stackfish_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
pub mod config;
mod error;
mod logging;

use commands::{
    handle_cfg_command, handle_decide_command, handle_equity_command, handle_profiles_command,
};
use commands::decide::DecideArgs;
pub use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "stackfish", version, about = "Texas Hold'em decision engine")]
struct StackfishCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decide an action for a game-state snapshot
    Decide {
        /// Snapshot JSON file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// RNG seed for a reproducible decision
        #[arg(long)]
        seed: Option<u64>,
        /// Monte Carlo trials for the equity estimate
        #[arg(long)]
        iterations: Option<u32>,
        /// Append the decision to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
        /// Pretty-print the decision JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Estimate equity for hole cards against random opponents
    Equity {
        /// Hole cards as compact codes, e.g. "AhAs"
        #[arg(long)]
        hole: String,
        /// Board cards as compact codes, e.g. "7c8c9d"
        #[arg(long, default_value = "")]
        board: String,
        #[arg(long, default_value_t = 1)]
        opponents: usize,
        #[arg(long, default_value_t = 5_000)]
        iterations: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the personality profiles
    Profiles,
    /// Show the resolved configuration
    Cfg,
}

/// Parse arguments and run the selected subcommand.
///
/// Returns the process exit code: 0 on success (including `--help` and
/// `--version`), 2 on any error.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match StackfishCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{e}");
                    0
                }
                _ => {
                    let _ = write!(err, "{e}");
                    2
                }
            };
        }
    };

    logging::init_logging();

    let result = match &cli.command {
        Commands::Decide {
            input,
            seed,
            iterations,
            log,
            pretty,
        } => handle_decide_command(
            DecideArgs {
                input: input.as_deref(),
                seed: *seed,
                iterations: *iterations,
                log: log.as_deref(),
                pretty: *pretty,
            },
            out,
        ),
        Commands::Equity {
            hole,
            board,
            opponents,
            iterations,
            seed,
        } => handle_equity_command(hole, board, *opponents, *iterations, *seed, out),
        Commands::Profiles => handle_profiles_command(out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            2
        }
    }
}
