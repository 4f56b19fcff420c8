//! The logger registry: named loggers, named appenders, and the resolution
//! engine that routes each log call to the right appenders.
//!
//! A `Registry` is a cheap handle (`Clone` shares state). All state sits behind
//! one coarse lock: mutations, cache invalidation and cache population happen
//! under it, while appenders are invoked after it is released so an appender
//! may itself log without deadlocking.

mod builder;
mod global;
mod index;
mod node;
mod resolve;
mod state;

pub use builder::RegistryBuilder;
pub use global::{
    clear, get_appender, get_logger, loggers, set_console_appender, set_custom_appender,
    set_file_appender, set_logger, set_loggers, set_root_logger,
};
pub use index::{SEPARATOR, ancestor_names};
pub use state::{DEFAULT_APPENDER, LoggerInfo, ROOT_NAME};

use crate::appender::Appender;
use crate::fmt::{Arg, Message, Pattern, PatternSpec};
use crate::level::Level;
use crate::logger::Logger;
use crate::output::{ConsoleOutput, FileOutput, Output};
use state::State;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone)]
pub struct Registry {
    state: Arc<Mutex<State>>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.lock().nodes.len())
            .finish_non_exhaustive()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Root at `INFO` bound to a console appender named `STDOUT`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(State::with_defaults())
    }

    /// Root at `INFO` with no appenders at all. Starting point for [`RegistryBuilder`].
    #[must_use]
    pub fn bare() -> Self {
        Self::from_state(State::bare())
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The process-wide default registry, created on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        global::registry()
    }

    fn from_state(state: State) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// A panic inside an output never leaves the state half-mutated, so a
    /// poisoned lock is still safe to use; logging must keep working.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the logger for `name`, registering it on first use. The empty name is the root.
    #[must_use]
    pub fn get_logger(&self, name: &str) -> Logger {
        self.lock().node_id(name);
        Logger::new(self.clone(), name)
    }

    #[must_use]
    pub fn root(&self) -> Logger {
        self.get_logger("")
    }

    /// Sets an explicit threshold on `name` and, when `appenders` is given,
    /// replaces its attached appenders.
    ///
    /// # Errors
    /// [`Error::UnknownAppender`](crate::Error::UnknownAppender) when a name is not
    /// registered. The logger is left unchanged in that case.
    pub fn set_logger(
        &self,
        name: &str,
        level: Level,
        appenders: Option<&[&str]>,
    ) -> Result<Logger, crate::Error> {
        {
            let mut state = self.lock();
            let id = state.node_id(name);
            let resolved = match appenders {
                Some(names) => Some(state.lookup_appenders(state.display_name(id), names)?),
                None => None,
            };
            state.set_level(id, Some(level));
            if let Some(resolved) = resolved {
                state.replace_appenders(id, resolved);
            }
        }
        Ok(Logger::new(self.clone(), name))
    }

    /// [`set_logger`](Self::set_logger) for each name, stopping at the first error.
    ///
    /// # Errors
    /// See [`set_logger`](Self::set_logger).
    pub fn set_loggers(
        &self,
        names: &[&str],
        level: Level,
        appenders: Option<&[&str]>,
    ) -> Result<(), crate::Error> {
        for name in names {
            self.set_logger(name, level, appenders)?;
        }
        Ok(())
    }

    /// # Errors
    /// See [`set_logger`](Self::set_logger).
    pub fn set_root_logger(
        &self,
        level: Level,
        appenders: Option<&[&str]>,
    ) -> Result<Logger, crate::Error> {
        self.set_logger("", level, appenders)
    }

    /// Registers `appender` under its name, replacing any previous one. Loggers
    /// that attached the previous appender keep writing to it.
    pub fn set_appender(&self, appender: Appender) -> Arc<Appender> {
        let appender = Arc::new(appender);
        self.lock().insert_appender(Arc::clone(&appender));
        appender
    }

    pub fn set_console_appender(
        &self,
        name: &str,
        pattern: impl Into<PatternSpec>,
    ) -> Arc<Appender> {
        self.set_appender(Appender::new(
            name,
            ConsoleOutput::new(),
            Pattern::new(pattern.into()),
        ))
    }

    pub fn set_file_appender(
        &self,
        name: &str,
        path: impl AsRef<Path>,
        pattern: impl Into<PatternSpec>,
        clear_on_start: bool,
    ) -> Arc<Appender> {
        self.set_appender(Appender::new(
            name,
            FileOutput::new(path, clear_on_start),
            Pattern::new(pattern.into()),
        ))
    }

    pub fn set_custom_appender(
        &self,
        name: &str,
        output: impl Output + 'static,
        pattern: impl Into<PatternSpec>,
    ) -> Arc<Appender> {
        self.set_appender(Appender::new(name, output, Pattern::new(pattern.into())))
    }

    #[must_use]
    pub fn get_appender(&self, name: &str) -> Option<Arc<Appender>> {
        self.lock().appender(name)
    }

    /// Discards every logger and appender and restores the defaults of [`Registry::new`].
    /// Existing [`Logger`] handles stay usable and re-register their name on next use.
    pub fn clear(&self) {
        *self.lock() = State::with_defaults();
    }

    /// Removes every explicit threshold and sets the root to `ALL`.
    pub fn reset_levels(&self) {
        self.lock().reset_levels();
    }

    /// Every registered logger, sorted case-insensitively by name.
    #[must_use]
    pub fn loggers(&self) -> Vec<LoggerInfo> {
        self.lock().snapshot()
    }

    /// Flushes every registered appender.
    ///
    /// # Errors
    /// Returns the first I/O error encountered.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let appenders: Vec<Arc<Appender>> = self.lock().appenders().cloned().collect();
        for appender in appenders {
            appender.flush()?;
        }
        Ok(())
    }

    // Per-logger operations used by `Logger`.

    pub(crate) fn log(&self, name: &str, level: Level, message: &Message, args: &[Arg]) {
        let (display, targets) = {
            let mut state = self.lock();
            let id = state.node_id(name);
            (state.display_name(id).to_string(), state.resolve(id, level))
        };
        for appender in targets.iter() {
            appender.append(&display, level, message, args);
        }
    }

    pub(crate) fn resolve(&self, name: &str, level: Level) -> Vec<Arc<Appender>> {
        let mut state = self.lock();
        let id = state.node_id(name);
        state.resolve(id, level).to_vec()
    }

    pub(crate) fn set_level(&self, name: &str, level: Option<Level>) {
        let mut state = self.lock();
        let id = state.node_id(name);
        state.set_level(id, level);
    }

    pub(crate) fn effective_level(&self, name: &str) -> Option<Level> {
        let mut state = self.lock();
        let id = state.node_id(name);
        state.effective_level(id)
    }

    pub(crate) fn explicit_level(&self, name: &str) -> Option<Level> {
        let mut state = self.lock();
        let id = state.node_id(name);
        state.explicit_level(id)
    }

    pub(crate) fn parent_name(&self, name: &str) -> Option<String> {
        let mut state = self.lock();
        let id = state.node_id(name);
        state
            .parent(id)
            .map(|parent| state.nodes[parent].name.clone())
    }

    pub(crate) fn add_appender(&self, name: &str, appender: &str) -> Result<(), crate::Error> {
        let mut state = self.lock();
        let id = state.node_id(name);
        let resolved = state
            .appender(appender)
            .ok_or_else(|| crate::Error::UnknownAppender {
                appender: appender.to_string(),
                logger: state.display_name(id).to_string(),
            })?;
        state.add_appender(id, resolved);
        Ok(())
    }
}
