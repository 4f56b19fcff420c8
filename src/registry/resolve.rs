//! Which appenders fire for a (logger, level) pair.
//!
//! 1. The emitting logger's effective threshold gates everything: if the level
//!    does not pass it, nothing fires anywhere in the chain.
//! 2. A logger with an explicit threshold forces the message into every
//!    ancestor's own appenders, whatever those ancestors' thresholds say.
//! 3. A logger that inherits its threshold defers to its parent: the parent's
//!    resolution for the same level is included as-is.
//!
//! Results are memoized per node and level. Any mutation sets
//! `cache_invalidated`; the next resolution clears every node's cache before
//! computing.

use super::index::NodeId;
use super::node::Resolved;
use super::state::State;
use crate::appender::{self, Appender};
use crate::level::Level;
use std::sync::Arc;

impl State {
    /// Threshold set on the node or its nearest ancestor that has one.
    pub fn effective_level(&self, id: NodeId) -> Option<Level> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.nodes[current];
            if let Some(level) = node.level {
                return Some(level);
            }
            cursor = node.parent;
        }
        None
    }

    pub fn resolve(&mut self, id: NodeId, level: Level) -> Resolved {
        if self.cache_invalidated {
            for node in &mut self.nodes {
                node.cache.clear();
            }
            self.cache_invalidated = false;
        }
        self.resolve_cached(id, level)
    }

    fn resolve_cached(&mut self, id: NodeId, level: Level) -> Resolved {
        if let Some(hit) = self.nodes[id].cache.get(&level) {
            return Arc::clone(hit);
        }
        let resolved = self.compute(id, level);
        self.nodes[id].cache.insert(level, Arc::clone(&resolved));
        resolved
    }

    fn compute(&mut self, id: NodeId, level: Level) -> Resolved {
        let enabled = self
            .effective_level(id)
            .is_some_and(|threshold| level.passes(threshold));
        if !enabled {
            return Arc::from(Vec::new());
        }

        let node = &self.nodes[id];
        let mut collected = node.appenders.clone();
        let parent = node.parent;

        if node.level.is_some() {
            let mut cursor = parent;
            while let Some(ancestor) = cursor {
                let ancestor = &self.nodes[ancestor];
                collected.extend(ancestor.appenders.iter().cloned());
                cursor = ancestor.parent;
            }
        } else if let Some(parent) = parent {
            let inherited = self.resolve_cached(parent, level);
            collected.extend(inherited.iter().cloned());
        }

        dedup(collected).into()
    }
}

/// Keeps the first occurrence of each appender, by identity.
fn dedup(appenders: Vec<Arc<Appender>>) -> Vec<Arc<Appender>> {
    let mut unique: Vec<Arc<Appender>> = Vec::with_capacity(appenders.len());
    for candidate in appenders {
        if !unique.iter().any(|seen| appender::same(seen, &candidate)) {
            unique.push(candidate);
        }
    }
    unique
}
