//! Named appenders: a [`Pattern`] bound to an [`Output`].
//!
//! Loggers reference appenders by identity (`Arc`), so the same appender reached
//! through several ancestors is written to once per call.

use crate::fmt::{Arg, Message, Pattern};
use crate::internal;
use crate::level::Level;
use crate::output::{LogRecord, Output};
use std::fmt;
use std::sync::Arc;

pub struct Appender {
    name: String,
    pattern: Pattern,
    output: Box<dyn Output>,
}

impl fmt::Debug for Appender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Appender")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

impl Appender {
    #[must_use]
    pub fn new(name: impl Into<String>, output: impl Output + 'static, pattern: Pattern) -> Self {
        Self {
            name: name.into(),
            pattern,
            output: Box::new(output),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Formats one log call with this appender's pattern and writes it.
    pub fn append(&self, logger_name: &str, level: Level, message: &Message, args: &[Arg]) {
        let formatted = self.pattern.format(logger_name, level, message, args);
        self.write_log(logger_name, level, formatted.message, formatted.other_args);
    }

    /// Hands an already formatted entry to the output. Output failures are
    /// reported on the internal channel and otherwise ignored.
    pub fn write_log(&self, logger_name: &str, level: Level, message: String, other_args: Vec<Arg>) {
        let record = LogRecord {
            logger_name: logger_name.to_string(),
            level,
            message,
            other_args,
        };
        if let Err(e) = self.output.write(&record) {
            internal::error("APPENDER", &format!("Appender {} error: {e}", self.name));
        }
    }

    /// # Errors
    /// I/O errors from the underlying output.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.output.flush()
    }
}

/// Identity comparison; two appenders with the same name are still distinct.
#[must_use]
pub fn same(a: &Arc<Appender>, b: &Arc<Appender>) -> bool {
    Arc::ptr_eq(a, b)
}
