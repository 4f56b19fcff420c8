//! Severity levels: message severities on one side, logger thresholds on the other.

use std::fmt;
use std::str::FromStr;

/// Ordered by rank so a message's level can be compared against a logger's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// As a threshold, lets everything through. As a message level, passes any threshold but `None`.
    All = 0,
    /// High-volume instrumentation.
    Trace = 1,
    /// Development-time diagnostics.
    Debug = 2,
    /// Normal operational milestones.
    #[default]
    Info = 3,
    /// Non-fatal anomalies.
    Warn = 4,
    /// Failures of a single operation.
    Error = 5,
    /// Failures the process cannot recover from.
    Fatal = 6,
    /// Markers that should survive any threshold short of `None`.
    Mark = 10,
    /// Threshold that silences a logger completely. Not a message severity.
    None = 10_000,
}

impl Level {
    /// Numeric rank used for threshold comparison.
    #[must_use]
    pub const fn rank(self) -> u32 {
        self as u32
    }

    /// Lowercase, as passed to outputs and accepted in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Mark => "mark",
            Self::None => "none",
        }
    }

    /// Every level, lowest rank first.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::All,
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Fatal,
            Self::Mark,
            Self::None,
        ]
    }

    /// Levels a message can be logged at (everything except `None`).
    #[must_use]
    pub const fn message_levels() -> [Self; 8] {
        [
            Self::All,
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Fatal,
            Self::Mark,
        ]
    }

    /// Whether a message at `self` gets through a logger whose threshold is `threshold`.
    /// `None` is never a message severity, and as a threshold it blocks everything.
    #[must_use]
    pub fn passes(self, threshold: Self) -> bool {
        if self == Self::None || threshold == Self::None {
            return false;
        }
        self == Self::All || self.rank() >= threshold.rank()
    }

    /// Lenient rank lookup for unvalidated names: unknown names rank as 0 (permissive).
    #[must_use]
    pub fn rank_of(name: &str) -> u32 {
        name.parse::<Self>().map_or(0, Self::rank)
    }

    /// Console outputs route these levels to stderr.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error | Self::Fatal)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "mark" => Ok(Self::Mark),
            "none" | "off" => Ok(Self::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
