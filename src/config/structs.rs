//! Configuration struct definitions.

use serde::Deserialize;

/// Diagnostic channel settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    /// Minimum level of hierlog's own diagnostics.
    pub level: String,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Root logger overrides. Absent fields keep the registry defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RootConfig {
    pub level: Option<String>,
    /// Replaces the root's appenders when present.
    pub appenders: Option<Vec<String>>,
}

/// Kind of sink behind an appender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppenderKind {
    #[default]
    Console,
    File,
}

/// One `[appenders.NAME]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppenderConfig {
    pub kind: AppenderKind,
    /// `SHORT_FORMAT`, `MEDIUM_FORMAT` or `LONG_FORMAT`.
    pub pattern: String,
    /// Log file path, required for `kind = "file"`. `~` is expanded.
    pub path: Option<String>,
    /// Truncate the file when the appender is created.
    pub clear_on_start: bool,
    /// Logger-name column width override.
    pub name_width: Option<usize>,
}

impl Default for AppenderConfig {
    fn default() -> Self {
        Self {
            kind: AppenderKind::Console,
            pattern: "MEDIUM_FORMAT".to_string(),
            path: None,
            clear_on_start: false,
            name_width: None,
        }
    }
}

/// One `[loggers."name"]` section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Explicit threshold; omit to inherit.
    pub level: Option<String>,
    pub appenders: Option<Vec<String>>,
}
