//! Turns `(logger, level, message, args)` into the final line an appender receives.
//!
//! The pattern prefixes the formatted text with the level and logger name (and,
//! for the longer layouts, the time) and splits the arguments into those the
//! template consumed and those handed to the sink untouched.

use super::arg::{Arg, Message};
use super::column::{Column, Transform};
use super::format;
use crate::level::Level;
use chrono::Local;
use std::fmt;
use std::sync::Arc;

/// Unformatted inputs handed to custom layouts alongside the formatted text.
#[derive(Debug, Clone, Copy)]
pub struct RawEntry<'a> {
    pub message: &'a Message,
    pub args: &'a [Arg],
}

/// Custom layout: `(logger_name, level, formatted_text, raw) -> line`.
pub type LayoutFn = dyn Fn(&str, Level, &str, &RawEntry<'_>) -> String + Send + Sync;

/// Selects a built-in layout or a custom one.
#[derive(Clone, Default)]
pub enum PatternSpec {
    /// `LEVEL NAME - text`
    Short,
    /// `hh:mm:ss AM LEVEL NAME - text`
    #[default]
    Medium,
    /// `YYYY-MM-DD hh:mm:ss AM TZ LEVEL NAME - text`
    Long,
    Custom(Arc<LayoutFn>),
}

impl PatternSpec {
    /// Resolves a layout by name. Unknown names fall back to the medium layout.
    #[must_use]
    pub fn named(name: &str) -> Self {
        match name {
            "SHORT_FORMAT" => Self::Short,
            "LONG_FORMAT" => Self::Long,
            _ => Self::Medium,
        }
    }

    pub fn custom<F>(layout: F) -> Self
    where
        F: Fn(&str, Level, &str, &RawEntry<'_>) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(layout))
    }
}

impl From<&str> for PatternSpec {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl fmt::Debug for PatternSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short => f.write_str("Short"),
            Self::Medium => f.write_str("Medium"),
            Self::Long => f.write_str("Long"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// What the pattern hands to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternOutput {
    pub message: String,
    /// Arguments the template did not consume, for the sink to render itself.
    pub other_args: Vec<Arg>,
}

/// Layout plus column widths. Held by each appender.
#[derive(Debug, Clone)]
pub struct Pattern {
    spec: PatternSpec,
    level_column: Column,
    name_column: Column,
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new(PatternSpec::default())
    }
}

impl Pattern {
    #[must_use]
    pub fn new(spec: PatternSpec) -> Self {
        let name_width = if matches!(spec, PatternSpec::Long) { 34 } else { 24 };
        Self {
            spec,
            level_column: Column::new(5).transform(Transform::Uppercase),
            name_column: Column::new(name_width),
        }
    }

    /// Overrides the logger-name column width.
    #[must_use]
    pub const fn name_width(mut self, width: usize) -> Self {
        self.name_column.width = width;
        self
    }

    #[must_use]
    pub const fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    /// Formats one log call. Never fails; non-text messages are dumped and also
    /// passed through as the last leftover argument.
    #[must_use]
    pub fn format(
        &self,
        logger_name: &str,
        level: Level,
        message: &Message,
        args: &[Arg],
    ) -> PatternOutput {
        let raw = RawEntry { message, args };
        match message {
            Message::Text(template) => {
                let formatted = format::format_text(template, args);
                PatternOutput {
                    message: self.layout(logger_name, level, &formatted.text, &raw),
                    other_args: args.iter().skip(formatted.consumed).cloned().collect(),
                }
            }
            Message::Value(value) => {
                let mut other_args = args.to_vec();
                other_args.push(value.clone());
                PatternOutput {
                    message: self.layout(logger_name, level, &value.inspect(), &raw),
                    other_args,
                }
            }
        }
    }

    fn layout(&self, logger_name: &str, level: Level, text: &str, raw: &RawEntry<'_>) -> String {
        match &self.spec {
            PatternSpec::Custom(layout) => layout(logger_name, level, text, raw),
            PatternSpec::Short => self.prefixed(logger_name, level, text),
            PatternSpec::Medium => {
                let time = Local::now().format("%I:%M:%S %p");
                format!("{time} {}", self.prefixed(logger_name, level, text))
            }
            PatternSpec::Long => {
                let time = Local::now().format("%Y-%m-%d %I:%M:%S %p %Z");
                format!("{time} {}", self.prefixed(logger_name, level, text))
            }
        }
    }

    fn prefixed(&self, logger_name: &str, level: Level, text: &str) -> String {
        format!(
            "{} {} - {}",
            self.level_column.format(level.as_str()),
            self.name_column.format(logger_name),
            text
        )
    }
}
