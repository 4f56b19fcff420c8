//! Appends timestamped lines to a single log file.

use super::{LogRecord, Output, render_arg};
use crate::internal;

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File sink. Each record is one `write` of the message line followed by one
/// line per leftover argument.
#[derive(Debug, Clone)]
pub struct FileOutput {
    path: PathBuf,
    /// strftime format prepended to the message line.
    timestamp_format: String,
}

impl FileOutput {
    /// Opens a sink for `path` (`~` is expanded). With `clear_on_start` the file is
    /// truncated now; failures are reported to the internal channel, not returned.
    #[must_use]
    pub fn new(path: impl AsRef<Path>, clear_on_start: bool) -> Self {
        let output = Self {
            path: expand_path(path.as_ref()),
            timestamp_format: "%-I:%M:%S %P".to_string(),
        };
        if clear_on_start && let Err(e) = output.truncate() {
            internal::error(
                "FILE",
                &format!("Appender error clearing file {}: {e}", output.path.display()),
            );
        }
        output
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn truncate(&self) -> Result<(), crate::Error> {
        self.ensure_parent()?;
        File::create(&self.path)?;
        internal::debug("FILE", &format!("Cleared {}", self.path.display()));
        Ok(())
    }

    fn ensure_parent(&self) -> Result<(), crate::Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            internal::debug("FILE", &format!("Created directory: {}", parent.display()));
        }
        Ok(())
    }

    fn format_content(&self, record: &LogRecord) -> String {
        let timestamp = Local::now().format(&self.timestamp_format);
        let mut content = format!("{timestamp} {}\n", record.message);
        for arg in &record.other_args {
            content.push_str(&render_arg(arg));
            content.push('\n');
        }
        content
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // Single write so concurrent appenders on the same file don't interleave a record.
        file.write_all(self.format_content(record).as_bytes())?;
        Ok(())
    }
}

fn expand_path(path: &Path) -> PathBuf {
    path.to_str().map_or_else(
        || path.to_path_buf(),
        |s| PathBuf::from(shellexpand::tilde(s).as_ref()),
    )
}
