//! Mutable registry contents, always accessed under the registry lock.

use super::index::{NameIndex, NodeId, ROOT};
use super::node::Node;
use crate::appender::Appender;
use crate::fmt::{Pattern, PatternSpec};
use crate::level::Level;
use crate::output::ConsoleOutput;
use std::collections::HashMap;
use std::sync::Arc;

/// Name under which the root logger is shown to appenders and in listings.
pub const ROOT_NAME: &str = "ROOT";

/// Name of the console appender every fresh registry starts with.
pub const DEFAULT_APPENDER: &str = "STDOUT";

/// One row of [`Registry::loggers`](super::Registry::loggers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerInfo {
    /// Registered name; empty for the root.
    pub name: String,
    /// Effective threshold, `None` when nothing in the chain defines one.
    pub level: Option<Level>,
    /// Whether `level` is set on this logger rather than inherited.
    pub explicit: bool,
    /// Nearest registered ancestor, `None` for the root.
    pub parent: Option<String>,
    /// Names of the directly attached appenders, in attach order.
    pub appenders: Vec<String>,
}

#[derive(Debug)]
pub(crate) struct State {
    pub(super) nodes: Vec<Node>,
    index: NameIndex,
    appenders: HashMap<String, Arc<Appender>>,
    /// Set by every mutation; the next resolution clears all node caches first.
    pub(super) cache_invalidated: bool,
}

impl State {
    /// Root at `INFO` with no appenders and no registered appenders.
    pub fn bare() -> Self {
        let mut root = Node::new("", None);
        root.level = Some(Level::Info);
        let mut index = NameIndex::default();
        index.insert("", ROOT);
        Self {
            nodes: vec![root],
            index,
            appenders: HashMap::new(),
            cache_invalidated: false,
        }
    }

    /// Bare state plus the `STDOUT` console appender bound to the root.
    pub fn with_defaults() -> Self {
        let mut state = Self::bare();
        let console = Arc::new(Appender::new(
            DEFAULT_APPENDER,
            ConsoleOutput::new(),
            Pattern::new(PatternSpec::Medium),
        ));
        state.insert_appender(Arc::clone(&console));
        state.nodes[ROOT].appenders.push(console);
        state
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.index.get(name)
    }

    /// Looks up `name`, registering a new node with no level and no appenders if absent.
    pub fn node_id(&mut self, name: &str) -> NodeId {
        self.find(name).unwrap_or_else(|| self.register(name))
    }

    fn register(&mut self, name: &str) -> NodeId {
        let id = self.nodes.len();
        let parent = self.index.find_parent(name);

        // Existing descendants whose nearest ancestor is shorter than `name` now hang below it.
        let nodes = &self.nodes;
        let adopted: Vec<NodeId> = self
            .index
            .descendants(name)
            .map(|(_, child)| child)
            .filter(|&child| {
                nodes[child]
                    .parent
                    .is_none_or(|p| nodes[p].name.len() < name.len())
            })
            .collect();
        for child in adopted {
            self.nodes[child].parent = Some(id);
        }

        self.nodes.push(Node::new(name, parent));
        self.index.insert(name, id);
        self.cache_invalidated = true;
        id
    }

    pub fn display_name(&self, id: NodeId) -> &str {
        if id == ROOT {
            ROOT_NAME
        } else {
            &self.nodes[id].name
        }
    }

    pub fn explicit_level(&self, id: NodeId) -> Option<Level> {
        self.nodes[id].level
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn set_level(&mut self, id: NodeId, level: Option<Level>) {
        self.nodes[id].level = level;
        self.cache_invalidated = true;
    }

    pub fn add_appender(&mut self, id: NodeId, appender: Arc<Appender>) {
        self.nodes[id].appenders.push(appender);
        self.cache_invalidated = true;
    }

    pub fn replace_appenders(&mut self, id: NodeId, appenders: Vec<Arc<Appender>>) {
        self.nodes[id].appenders = appenders;
        self.cache_invalidated = true;
    }

    pub fn insert_appender(&mut self, appender: Arc<Appender>) {
        self.appenders
            .insert(appender.name().to_string(), appender);
        self.cache_invalidated = true;
    }

    pub fn appender(&self, name: &str) -> Option<Arc<Appender>> {
        self.appenders.get(name).cloned()
    }

    /// Resolves every name or fails on the first unknown one, naming it and `logger`.
    pub fn lookup_appenders<S: AsRef<str>>(
        &self,
        logger: &str,
        names: &[S],
    ) -> Result<Vec<Arc<Appender>>, crate::Error> {
        names
            .iter()
            .map(|name| {
                self.appender(name.as_ref())
                    .ok_or_else(|| crate::Error::UnknownAppender {
                        appender: name.as_ref().to_string(),
                        logger: logger.to_string(),
                    })
            })
            .collect()
    }

    /// Drops every explicit threshold and opens the root completely.
    pub fn reset_levels(&mut self) {
        for node in &mut self.nodes {
            node.level = None;
        }
        self.nodes[ROOT].level = Some(Level::All);
        self.cache_invalidated = true;
    }

    pub fn snapshot(&self) -> Vec<LoggerInfo> {
        let mut rows: Vec<LoggerInfo> = (0..self.nodes.len())
            .map(|id| {
                let node = &self.nodes[id];
                LoggerInfo {
                    name: node.name.clone(),
                    level: self.effective_level(id),
                    explicit: node.level.is_some(),
                    parent: node.parent.map(|p| self.nodes[p].name.clone()),
                    appenders: node
                        .appenders
                        .iter()
                        .map(|a| a.name().to_string())
                        .collect(),
                }
            })
            .collect();
        rows.sort_by_cached_key(|row| row.name.to_uppercase());
        rows
    }

    pub fn appenders(&self) -> impl Iterator<Item = &Arc<Appender>> {
        self.appenders.values()
    }
}
