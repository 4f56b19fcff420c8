//! One file per subcommand; each handler owns its error reporting and exit code.

mod log;
mod tree;

pub use log::cmd_log;
pub use tree::{cmd_tree, render_tree};
