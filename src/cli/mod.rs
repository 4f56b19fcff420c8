//! CLI module for hierlog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hierlog - Inspect a logger configuration and log through it.
#[derive(Parser)]
#[command(
    name = "hierlog",
    version,
    about = "Inspect a logger configuration and log through it"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print every configured logger with its effective level, parent and appenders.
    Tree {
        /// Config file (defaults to <config_dir>/hierlog/hierlog.toml)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Log one message through a named logger.
    Log {
        /// Logger name, e.g. "svc/db" ("" or "ROOT" for the root)
        logger: String,
        /// Message level (all, trace, debug, info, warn, error, fatal, mark)
        level: String,
        /// Message text; `%s`, `%d`, `%j` and `%b` are left as written
        message: Vec<String>,
        /// Config file (defaults to <config_dir>/hierlog/hierlog.toml)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

pub use commands::{cmd_log, cmd_tree};
pub use util::{build_registry, load_config};
