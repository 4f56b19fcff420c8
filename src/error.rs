//! Unified error type for all hierlog operations.
//!
//! Only configuration-time operations fail. Log calls never return errors:
//! output failures are routed to the internal diagnostic channel instead.

use std::path::PathBuf;

/// Error type for hierlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from an output or while reading a config file.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Cyclic include detected in config sources.
    CyclicInclude(PathBuf),
    /// A file appender was configured without a path.
    MissingAppenderPath(String),
    /// A logger referenced an appender name that is not registered.
    UnknownAppender {
        /// The appender name that failed to resolve.
        appender: String,
        /// The logger being configured (`ROOT` for the root logger).
        logger: String,
    },
    /// Invalid log level string.
    InvalidLevel(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::MissingAppenderPath(name) => {
                write!(f, "file appender [{name}] has no path")
            }
            Self::UnknownAppender { appender, logger } => write!(
                f,
                "appender [{appender}] does not exist - logger [{logger}] definition error"
            ),
            Self::InvalidLevel(level) => write!(f, "invalid log level: {level}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<crate::level::ParseLevelError> for Error {
    fn from(e: crate::level::ParseLevelError) -> Self {
        Self::InvalidLevel(e.name().to_string())
    }
}
