//! Stepwise registry construction. Steps apply in call order at [`RegistryBuilder::build`],
//! so appenders must be declared before the loggers that reference them.

use super::Registry;
use crate::appender::Appender;
use crate::fmt::{Pattern, PatternSpec};
use crate::level::Level;
use crate::output::{ConsoleOutput, FileOutput, Output};
use std::path::Path;

enum Step {
    Appender(Appender),
    Logger {
        name: String,
        level: Level,
        appenders: Vec<String>,
    },
}

/// Builds a [`Registry`] from scratch: no default console appender, root at `INFO`.
#[derive(Default)]
pub struct RegistryBuilder {
    steps: Vec<Step>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    #[must_use]
    pub fn appender(mut self, appender: Appender) -> Self {
        self.steps.push(Step::Appender(appender));
        self
    }

    #[must_use]
    pub fn console(self, name: &str, pattern: impl Into<PatternSpec>) -> Self {
        self.appender(Appender::new(
            name,
            ConsoleOutput::new(),
            Pattern::new(pattern.into()),
        ))
    }

    /// The file is opened (and truncated, with `clear_on_start`) right away.
    #[must_use]
    pub fn file(
        self,
        name: &str,
        path: impl AsRef<Path>,
        pattern: impl Into<PatternSpec>,
        clear_on_start: bool,
    ) -> Self {
        self.appender(Appender::new(
            name,
            FileOutput::new(path, clear_on_start),
            Pattern::new(pattern.into()),
        ))
    }

    #[must_use]
    pub fn custom(
        self,
        name: &str,
        output: impl Output + 'static,
        pattern: impl Into<PatternSpec>,
    ) -> Self {
        self.appender(Appender::new(name, output, Pattern::new(pattern.into())))
    }

    #[must_use]
    pub fn root(self, level: Level, appenders: &[&str]) -> Self {
        self.logger("", level, appenders)
    }

    #[must_use]
    pub fn logger(mut self, name: &str, level: Level, appenders: &[&str]) -> Self {
        self.steps.push(Step::Logger {
            name: name.to_string(),
            level,
            appenders: appenders.iter().map(ToString::to_string).collect(),
        });
        self
    }

    /// # Errors
    /// [`Error::UnknownAppender`](crate::Error::UnknownAppender) when a logger step
    /// references an appender not declared before it.
    pub fn build(self) -> Result<Registry, crate::Error> {
        let registry = Registry::bare();
        for step in self.steps {
            match step {
                Step::Appender(appender) => {
                    registry.set_appender(appender);
                }
                Step::Logger {
                    name,
                    level,
                    appenders,
                } => {
                    let names: Vec<&str> = appenders.iter().map(String::as_str).collect();
                    registry.set_logger(&name, level, Some(names.as_slice()))?;
                }
            }
        }
        Ok(registry)
    }
}
