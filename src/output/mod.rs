//! Sinks that receive formatted log entries.
//!
//! Console and file outputs are built in; anything else implements [`Output`]
//! and is registered as a custom appender.

mod console;
mod file;

pub use console::ConsoleOutput;
pub use file::FileOutput;

use crate::fmt::Arg;
use crate::level::Level;

/// One formatted entry as delivered to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Name of the emitting logger (`ROOT` for the root logger).
    pub logger_name: String,
    pub level: Level,
    /// Fully formatted line, pattern prefix included.
    pub message: String,
    /// Arguments the template did not consume.
    pub other_args: Vec<Arg>,
}

impl LogRecord {
    /// Message followed by the leftover arguments, space separated.
    #[must_use]
    pub fn line(&self) -> String {
        let mut line = self.message.clone();
        for arg in &self.other_args {
            line.push(' ');
            line.push_str(&render_arg(arg));
        }
        line
    }
}

pub(crate) fn render_arg(arg: &Arg) -> String {
    if arg.is_primitive() {
        arg.to_text()
    } else {
        arg.inspect()
    }
}

/// `Send + Sync` so one appender can be shared by loggers on every thread.
pub trait Output: Send + Sync {
    /// Writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying sink. The caller reports them; they never
    /// reach the code that issued the log call.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// Flushes buffered data.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
