//! Message formatting: the argument model, template substitution, fixed-width
//! columns, and the per-appender pattern that assembles the final line.

mod arg;
mod column;
pub mod format;
mod pattern;

pub use arg::{Arg, Message, UNSERIALIZABLE};
pub use column::{Alignment, Column, Transform};
pub use format::{Formatted, format, format_text};
pub use pattern::{LayoutFn, Pattern, PatternOutput, PatternSpec, RawEntry};
