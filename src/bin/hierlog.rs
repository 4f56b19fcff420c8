//! `hierlog` binary: check what a logger config resolves to, and log through it
//! from shell scripts.
//!
//! Usage:
//!   hierlog tree [--config PATH]                           Print the logger table
//!   hierlog log <logger> <level> <message...> [--config PATH]   Log one message

use clap::Parser;
use hierlog::cli::{Cli, Command, cmd_log, cmd_tree};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Tree { config } => cmd_tree(config.as_deref()),
        Command::Log {
            logger,
            level,
            message,
            config,
        } => cmd_log(&logger, &level, &message, config.as_deref()),
    }
}
