//! Standard stream sink. Errors and fatals go to stderr so they survive stdout redirection.

use super::{LogRecord, Output};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Target {
    /// stdout, stderr for `error`/`fatal`
    #[default]
    ByLevel,
    Stderr,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput {
    target: Target,
}

impl ConsoleOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: Target::ByLevel,
        }
    }

    /// Writes every level to stderr. Used for diagnostics that must not mix with program output.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            target: Target::Stderr,
        }
    }
}

impl Output for ConsoleOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let line = record.line();
        if self.target == Target::Stderr || record.level.is_error() {
            writeln!(io::stderr().lock(), "{line}")?;
        } else {
            writeln!(io::stdout().lock(), "{line}")?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
