//! hierlog's own diagnostic channel.
//!
//! Output failures and config warnings can't be raised into the caller's log
//! call, so they are reported here instead. The channel is an ordinary
//! [`Registry`] whose root writes to stderr at `WARN`, created once through a
//! `OnceLock`. A thread-local guard drops diagnostics raised while a diagnostic
//! is being written, so a failing diagnostic appender cannot recurse.

use crate::config::Config;
use crate::fmt::{Pattern, PatternSpec};
use crate::level::Level;
use crate::output::ConsoleOutput;
use crate::registry::Registry;
use std::cell::Cell;
use std::sync::OnceLock;

static INTERNAL: OnceLock<Registry> = OnceLock::new();

thread_local! {
    static REPORTING: Cell<bool> = const { Cell::new(false) };
}

/// Appender name used by the diagnostic registry.
pub const STDERR_APPENDER: &str = "STDERR";

/// The diagnostic registry. Tests attach recording appenders to it.
pub fn registry() -> &'static Registry {
    INTERNAL.get_or_init(|| {
        let registry = Registry::bare();
        registry.set_appender(crate::appender::Appender::new(
            STDERR_APPENDER,
            ConsoleOutput::stderr(),
            Pattern::new(PatternSpec::Short).name_width(8),
        ));
        // The appender was registered on the line above.
        let _ = registry.set_root_logger(Level::Warn, Some(&[STDERR_APPENDER]));
        registry
    })
}

/// Changes which diagnostics are shown.
pub fn set_level(level: Level) {
    registry().root().set_level(Some(level));
}

/// Applies the `[internal]` section of a loaded config.
pub fn init_with_config(config: &Config) {
    set_level(config.internal_level());
    debug("INTERNAL", &format!("Diagnostic level: {}", config.internal.level));
}

fn log(level: Level, scope: &str, msg: &str) {
    if REPORTING.with(Cell::get) {
        return;
    }
    REPORTING.with(|r| r.set(true));
    registry().get_logger(scope).log(level, msg, &[]);
    REPORTING.with(|r| r.set(false));
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Output failures land here.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
