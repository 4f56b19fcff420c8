//! Utility functions for the CLI.

use crate::config::Config;
use crate::internal;
use crate::registry::Registry;
use std::path::Path;

/// Loads `path`, or the default config location when none is given.
/// Also applies the config's `[internal]` level.
///
/// # Errors
/// See [`Config::load_from`] and [`Config::load`].
pub fn load_config(path: Option<&Path>) -> Result<Config, crate::Error> {
    let config = match path {
        Some(path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            Config::load_from(Path::new(&expanded))?
        }
        None => Config::load()?,
    };
    internal::init_with_config(&config);
    Ok(config)
}

/// A fresh registry with `config` applied; failures are reported on the internal channel.
#[must_use]
pub fn build_registry(config: &Config) -> Option<Registry> {
    match config.build_registry() {
        Ok(registry) => Some(registry),
        Err(e) => {
            internal::error("CLI", &format!("Invalid config: {e}"));
            None
        }
    }
}

/// Maps the names users type for the root logger onto its registered name.
#[must_use]
pub fn logger_name(arg: &str) -> &str {
    if arg.eq_ignore_ascii_case(crate::registry::ROOT_NAME) {
        ""
    } else {
        arg
    }
}
