//! Named logger handles.
//!
//! A [`Logger`] is a name plus a registry handle. It holds no state of its own,
//! so handles are cheap to clone and always observe the registry's current
//! configuration.

use crate::appender::Appender;
use crate::fmt::{Arg, Message};
use crate::level::Level;
use crate::registry::{ROOT_NAME, Registry};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Logger {
    registry: Registry,
    name: String,
}

impl Logger {
    pub(crate) fn new(registry: Registry, name: &str) -> Self {
        Self {
            registry,
            name: name.to_string(),
        }
    }

    /// Registered name; empty for the root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name shown in log lines (`ROOT` for the root).
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.is_root() { ROOT_NAME } else { &self.name }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Routes one message to every appender the resolution selects.
    /// Never fails; output errors go to the internal diagnostic channel.
    pub fn log(&self, level: Level, message: impl Into<Message>, args: &[Arg]) {
        self.registry.log(&self.name, level, &message.into(), args);
    }

    /// Passes any threshold except `NONE`.
    pub fn all(&self, message: impl Into<Message>, args: &[Arg]) {
        self.log(Level::All, message, args);
    }

    pub fn trace(&self, message: impl Into<Message>, args: &[Arg]) {
        self.log(Level::Trace, message, args);
    }

    pub fn debug(&self, message: impl Into<Message>, args: &[Arg]) {
        self.log(Level::Debug, message, args);
    }

    pub fn info(&self, message: impl Into<Message>, args: &[Arg]) {
        self.log(Level::Info, message, args);
    }

    pub fn warn(&self, message: impl Into<Message>, args: &[Arg]) {
        self.log(Level::Warn, message, args);
    }

    pub fn error(&self, message: impl Into<Message>, args: &[Arg]) {
        self.log(Level::Error, message, args);
    }

    pub fn fatal(&self, message: impl Into<Message>, args: &[Arg]) {
        self.log(Level::Fatal, message, args);
    }

    pub fn mark(&self, message: impl Into<Message>, args: &[Arg]) {
        self.log(Level::Mark, message, args);
    }

    /// Sets (`Some`) or clears (`None`) this logger's explicit threshold.
    pub fn set_level(&self, level: Option<Level>) -> &Self {
        self.registry.set_level(&self.name, level);
        self
    }

    /// Attaches a registered appender by name.
    ///
    /// # Errors
    /// [`Error::UnknownAppender`](crate::Error::UnknownAppender) when no appender
    /// is registered under `appender`.
    pub fn add_appender(&self, appender: &str) -> Result<&Self, crate::Error> {
        self.registry.add_appender(&self.name, appender)?;
        Ok(self)
    }

    /// Effective threshold: explicit, or inherited from the nearest ancestor that sets one.
    #[must_use]
    pub fn level(&self) -> Option<Level> {
        self.registry.effective_level(&self.name)
    }

    /// The threshold set on this logger itself, if any.
    #[must_use]
    pub fn explicit_level(&self) -> Option<Level> {
        self.registry.explicit_level(&self.name)
    }

    /// Whether a message at `level` would reach at least one appender.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        !self.appenders_for(level).is_empty()
    }

    /// Nearest registered ancestor; `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.registry
            .parent_name(&self.name)
            .map(|name| Self::new(self.registry.clone(), &name))
    }

    /// The de-duplicated appenders a message at `level` would be written to, in write order.
    #[must_use]
    pub fn appenders_for(&self, level: Level) -> Vec<Arc<Appender>> {
        self.registry.resolve(&self.name, level)
    }
}
