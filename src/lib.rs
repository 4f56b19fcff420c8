//! `hierlog` - Hierarchical named loggers.
//!
//! Loggers are named with `/`-separated paths (`"svc"`, `"svc/db"`,
//! `"svc/db/pool"`). A logger's parent is the longest registered prefix of its
//! name, and the root (empty name, shown as `ROOT`) sits above everything.
//! Each logger may set its own threshold and attach its own appenders:
//! - a logger with an explicit threshold writes to its own appenders and to
//!   the appenders of every ancestor
//! - a logger without one inherits both the threshold and the routing of its parent
//! - each appender is written at most once per call
//!
//! # Example
//!
//! ```
//! use hierlog::{Arg, Level, Registry};
//!
//! let registry = Registry::builder()
//!     .console("OUT", "SHORT_FORMAT")
//!     .root(Level::Warn, &["OUT"])
//!     .logger("svc/db", Level::Debug, &[])
//!     .build()
//!     .unwrap();
//!
//! let db = registry.get_logger("svc/db/pool");
//! db.debug("connected to %s in %d ms", &[Arg::from("primary"), Arg::from(12)]);
//! registry.get_logger("svc").info("dropped: below WARN", &[]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `hierlog` binary

pub mod appender;
pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod registry;

#[cfg(feature = "cli")]
pub mod cli;

pub use appender::Appender;
pub use config::Config;
pub use error::Error;
pub use fmt::{Arg, Message, Pattern, PatternSpec, RawEntry, format};
pub use level::Level;
pub use logger::Logger;
pub use output::{ConsoleOutput, FileOutput, LogRecord, Output};
pub use registry::{
    LoggerInfo, Registry, RegistryBuilder, clear, get_appender, get_logger, loggers,
    set_console_appender, set_custom_appender, set_file_appender, set_logger, set_loggers,
    set_root_logger,
};
