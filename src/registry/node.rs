//! One entry in the logger hierarchy.

use super::index::NodeId;
use crate::appender::Appender;
use crate::level::Level;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolved appender set for one (node, level) pair.
pub(crate) type Resolved = Arc<[Arc<Appender>]>;

#[derive(Debug)]
pub(crate) struct Node {
    pub name: String,
    /// `None` inherits the nearest ancestor's threshold.
    pub level: Option<Level>,
    /// Attach order; duplicates are removed at resolution time.
    pub appenders: Vec<Arc<Appender>>,
    /// Nearest registered ancestor. `None` only for the root.
    pub parent: Option<NodeId>,
    pub cache: HashMap<Level, Resolved>,
}

impl Node {
    pub fn new(name: &str, parent: Option<NodeId>) -> Self {
        Self {
            name: name.to_string(),
            level: None,
            appenders: Vec::new(),
            parent,
            cache: HashMap::new(),
        }
    }
}
