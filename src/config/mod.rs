//! TOML configuration: appenders, root, and per-logger thresholds, applied to a [`Registry`].
//!
//! ```toml
//! source = "~/.config/hierlog/extra.toml"
//!
//! [internal]
//! level = "warn"
//!
//! [root]
//! level = "info"
//! appenders = ["STDOUT"]
//!
//! [appenders.AUDIT]
//! kind = "file"
//! path = "~/logs/audit.log"
//! pattern = "LONG_FORMAT"
//! clear_on_start = true
//!
//! [loggers."svc/db"]
//! level = "debug"
//! appenders = ["AUDIT"]
//! ```

mod structs;

pub use structs::{AppenderConfig, AppenderKind, InternalConfig, LoggerConfig, RootConfig};

use crate::appender::Appender;
use crate::fmt::{Pattern, PatternSpec};
use crate::internal;
use crate::level::Level;
use crate::output::{ConsoleOutput, FileOutput};
use crate::registry::Registry;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Every field defaults, so an empty file yields a registry identical to [`Registry::new`].
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub internal: InternalConfig,
    pub root: RootConfig,
    /// Keyed by appender name.
    pub appenders: BTreeMap<String, AppenderConfig>,
    /// Keyed by logger name.
    pub loggers: BTreeMap<String, LoggerConfig>,
}

/// Pulls `source = "..."` lines out of raw TOML before deserialization.
/// Returns the include paths and the remaining content.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("source") && trimmed.contains('=') {
            if let Some(path) = trimmed
                .split_once('=')
                .map(|(_, v)| v.trim().trim_matches('"').trim_matches('\''))
                && !path.is_empty()
            {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads the config from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be read,
    /// TOML parsing fails, or includes form a cycle.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads the config at `path`, resolving `source` includes.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses TOML text. `source` lines are ignored here since there is no base file.
    ///
    /// # Errors
    /// TOML syntax or schema errors.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source in sources {
            let expanded = shellexpand::tilde(&source);
            let source_path = Path::new(expanded.as_ref());
            if source_path.exists() {
                config.merge(Self::load_with_sources(source_path, seen)?);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source}"));
            }
        }

        Ok(config)
    }

    /// Folds an included config into `self`. Entries already present win.
    pub fn merge(&mut self, other: Self) {
        for (name, appender) in other.appenders {
            self.appenders.entry(name).or_insert(appender);
        }
        for (name, logger) in other.loggers {
            self.loggers.entry(name).or_insert(logger);
        }
        if self.root.level.is_none() {
            self.root.level = other.root.level;
        }
        if self.root.appenders.is_none() {
            self.root.appenders = other.root.appenders;
        }
    }

    /// `<config_dir>/hierlog/hierlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("hierlog").join("hierlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Diagnostic level; unknown strings fall back to `WARN`.
    #[must_use]
    pub fn internal_level(&self) -> Level {
        self.internal.level.parse().unwrap_or(Level::Warn)
    }

    /// Registers the configured appenders, then configures the root, then each logger.
    /// Application stops at the first error; earlier steps stay applied.
    ///
    /// # Errors
    /// Invalid level strings, file appenders without a path, and references to
    /// appenders that are neither configured nor already registered.
    pub fn apply(&self, registry: &Registry) -> Result<(), crate::Error> {
        for (name, appender) in &self.appenders {
            registry.set_appender(build_appender(name, appender)?);
            internal::debug("CONFIG", &format!("Appender {name} registered"));
        }

        let root_appenders = names(self.root.appenders.as_ref());
        match (&self.root.level, &root_appenders) {
            (Some(level), _) => {
                registry.set_root_logger(level.parse()?, root_appenders.as_deref())?;
            }
            (None, Some(appenders)) => {
                let level = registry.root().explicit_level().unwrap_or(Level::Info);
                registry.set_root_logger(level, Some(appenders.as_slice()))?;
            }
            (None, None) => {}
        }

        for (name, logger) in &self.loggers {
            let appenders = names(logger.appenders.as_ref());
            if let Some(level) = &logger.level {
                registry.set_logger(name, level.parse()?, appenders.as_deref())?;
            } else if let Some(appenders) = appenders {
                let handle = registry.get_logger(name);
                for appender in appenders {
                    handle.add_appender(appender)?;
                }
            }
        }
        Ok(())
    }

    /// A default registry with this config applied.
    ///
    /// # Errors
    /// See [`Config::apply`].
    pub fn build_registry(&self) -> Result<Registry, crate::Error> {
        let registry = Registry::new();
        self.apply(&registry)?;
        Ok(registry)
    }
}

fn names(list: Option<&Vec<String>>) -> Option<Vec<&str>> {
    list.map(|v| v.iter().map(String::as_str).collect())
}

fn build_appender(name: &str, config: &AppenderConfig) -> Result<Appender, crate::Error> {
    let mut pattern = Pattern::new(PatternSpec::named(&config.pattern));
    if let Some(width) = config.name_width {
        pattern = pattern.name_width(width);
    }
    let appender = match config.kind {
        AppenderKind::Console => Appender::new(name, ConsoleOutput::new(), pattern),
        AppenderKind::File => {
            let path = config
                .path
                .as_deref()
                .ok_or_else(|| crate::Error::MissingAppenderPath(name.to_string()))?;
            Appender::new(name, FileOutput::new(path, config.clear_on_start), pattern)
        }
    };
    Ok(appender)
}
