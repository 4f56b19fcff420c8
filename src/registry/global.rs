//! Process-wide default registry and free-function shortcuts to it.
//!
//! Libraries that just want a named logger can call [`get_logger`] without
//! threading a `Registry` through their APIs.

use super::{LoggerInfo, Registry};
use crate::appender::Appender;
use crate::fmt::PatternSpec;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::Output;
use std::path::Path;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

pub(super) fn registry() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// [`Registry::get_logger`] on the global registry.
#[must_use]
pub fn get_logger(name: &str) -> Logger {
    registry().get_logger(name)
}

/// [`Registry::set_logger`] on the global registry.
///
/// # Errors
/// See [`Registry::set_logger`].
pub fn set_logger(
    name: &str,
    level: Level,
    appenders: Option<&[&str]>,
) -> Result<Logger, crate::Error> {
    registry().set_logger(name, level, appenders)
}

/// [`Registry::set_loggers`] on the global registry.
///
/// # Errors
/// See [`Registry::set_logger`].
pub fn set_loggers(
    names: &[&str],
    level: Level,
    appenders: Option<&[&str]>,
) -> Result<(), crate::Error> {
    registry().set_loggers(names, level, appenders)
}

/// [`Registry::set_root_logger`] on the global registry.
///
/// # Errors
/// See [`Registry::set_logger`].
pub fn set_root_logger(level: Level, appenders: Option<&[&str]>) -> Result<Logger, crate::Error> {
    registry().set_root_logger(level, appenders)
}

pub fn set_console_appender(name: &str, pattern: impl Into<PatternSpec>) -> Arc<Appender> {
    registry().set_console_appender(name, pattern)
}

pub fn set_file_appender(
    name: &str,
    path: impl AsRef<Path>,
    pattern: impl Into<PatternSpec>,
    clear_on_start: bool,
) -> Arc<Appender> {
    registry().set_file_appender(name, path, pattern, clear_on_start)
}

pub fn set_custom_appender(
    name: &str,
    output: impl Output + 'static,
    pattern: impl Into<PatternSpec>,
) -> Arc<Appender> {
    registry().set_custom_appender(name, output, pattern)
}

#[must_use]
pub fn get_appender(name: &str) -> Option<Arc<Appender>> {
    registry().get_appender(name)
}

/// Resets the global registry to its defaults.
pub fn clear() {
    registry().clear();
}

#[must_use]
pub fn loggers() -> Vec<LoggerInfo> {
    registry().loggers()
}
