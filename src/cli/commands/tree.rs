//! Shows how a config resolves: which loggers exist, what level each ends up at,
//! and where each one routes.

use crate::cli::util::{build_registry, load_config};
use crate::internal;
use crate::registry::{LoggerInfo, ROOT_NAME};
use std::fmt::Write;
use std::path::Path;
use std::process::ExitCode;

/// Handles `hierlog tree [--config PATH]`.
#[must_use]
pub fn cmd_tree(config: Option<&Path>) -> ExitCode {
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

    print!("{}", render_tree(&registry.loggers()));
    ExitCode::SUCCESS
}

/// One aligned row per logger. Inherited levels are shown in parentheses.
#[must_use]
pub fn render_tree(loggers: &[LoggerInfo]) -> String {
    let width = loggers
        .iter()
        .map(|info| display(&info.name).len())
        .max()
        .unwrap_or(0)
        .max(ROOT_NAME.len());

    let mut out = String::new();
    for info in loggers {
        let level = match (info.level, info.explicit) {
            (Some(level), true) => level.as_str().to_uppercase(),
            (Some(level), false) => format!("({})", level.as_str().to_uppercase()),
            (None, _) => "-".to_string(),
        };
        let parent = info.parent.as_deref().map_or("-", display);
        let appenders = if info.appenders.is_empty() {
            "-".to_string()
        } else {
            info.appenders.join(",")
        };
        let _ = writeln!(
            out,
            "{:<width$}  {level:<7}  parent={parent}  appenders={appenders}",
            display(&info.name)
        );
    }
    out
}

fn display(name: &str) -> &str {
    if name.is_empty() { ROOT_NAME } else { name }
}
