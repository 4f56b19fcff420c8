//! Emits a single message so shell scripts can log through the same routing as the program.

use crate::cli::util::{build_registry, load_config, logger_name};
use crate::internal;
use crate::level::Level;
use std::path::Path;
use std::process::ExitCode;

/// Handles `hierlog log <logger> <level> <message...> [--config PATH]`.
#[must_use]
pub fn cmd_log(logger: &str, level: &str, message: &[String], config: Option<&Path>) -> ExitCode {
    let level = match level.parse::<Level>() {
        Ok(Level::None) | Err(_) => {
            internal::error("CLI", &format!("Invalid level: {level}"));
            return ExitCode::FAILURE;
        }
        Ok(level) => level,
    };

    let config = match load_config(config) {
        Ok(c) => c,
        Err(e) => {
            internal::error("CLI", &format!("Error loading config: {e}"));
            return ExitCode::FAILURE;
        }
    };
    let Some(registry) = build_registry(&config) else {
        return ExitCode::FAILURE;
    };

    // Text is passed through as a single argument-free template.
    registry
        .get_logger(logger_name(logger))
        .log(level, message.join(" "), &[]);

    if let Err(e) = registry.flush() {
        internal::error("CLI", &format!("Flush failed: {e}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
