//! Name index over `/`-separated logger names.
//!
//! A logger's parent is the longest registered strict prefix of its name that
//! ends at a separator, or the root when none is registered. Keeping names in
//! a `BTreeMap` makes both directions cheap: ancestors are a handful of point
//! lookups, and the descendants of a new name are one contiguous key range.

use std::collections::BTreeMap;

pub(crate) type NodeId = usize;

/// The root is always the first node and has the empty name.
pub(crate) const ROOT: NodeId = 0;

pub const SEPARATOR: char = '/';

/// Candidate ancestor names of `name`, longest first: `a/b/c` yields `a/b`, `a`.
pub fn ancestor_names(name: &str) -> impl Iterator<Item = &str> {
    name.rmatch_indices(SEPARATOR).map(move |(idx, _)| &name[..idx])
}

#[derive(Debug, Default)]
pub(crate) struct NameIndex {
    ids: BTreeMap<String, NodeId>,
}

impl NameIndex {
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    pub fn insert(&mut self, name: &str, id: NodeId) {
        self.ids.insert(name.to_string(), id);
    }

    /// Nearest registered ancestor; the root when no prefix is registered, `None` for the root itself.
    pub fn find_parent(&self, name: &str) -> Option<NodeId> {
        if name.is_empty() {
            return None;
        }
        ancestor_names(name)
            .filter(|candidate| !candidate.is_empty())
            .find_map(|candidate| self.get(candidate))
            .or(Some(ROOT))
    }

    /// Every registered name strictly below `name` in the hierarchy.
    pub fn descendants<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = (&'a str, NodeId)> + use<'a> {
        let prefix = format!("{name}{SEPARATOR}");
        self.ids
            .range(prefix.clone()..)
            .take_while(move |(key, _)| key.starts_with(&prefix))
            .map(|(key, id)| (key.as_str(), *id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(names: &[&str]) -> NameIndex {
        let mut idx = NameIndex::default();
        idx.insert("", ROOT);
        for (i, name) in names.iter().enumerate() {
            idx.insert(name, i + 1);
        }
        idx
    }

    #[test]
    fn ancestor_names_longest_first() {
        let names: Vec<_> = ancestor_names("a/b/c").collect();
        assert_eq!(names, vec!["a/b", "a"]);
        assert_eq!(ancestor_names("solo").count(), 0);
    }

    #[test]
    fn parent_is_longest_registered_prefix() {
        let idx = index(&["a", "a/b/c"]);
        assert_eq!(idx.find_parent("a/b/c/d"), Some(2));
        assert_eq!(idx.find_parent("a/b"), Some(1));
        assert_eq!(idx.find_parent("a/x/y"), Some(1));
    }

    #[test]
    fn unregistered_prefixes_fall_back_to_root() {
        let idx = index(&["other"]);
        assert_eq!(idx.find_parent("svc/db"), Some(ROOT));
        assert_eq!(idx.find_parent("svc"), Some(ROOT));
        assert_eq!(idx.find_parent(""), None);
    }

    #[test]
    fn prefix_without_separator_is_not_an_ancestor() {
        let idx = index(&["app"]);
        assert_eq!(idx.find_parent("application/x"), Some(ROOT));
    }

    #[test]
    fn descendants_stay_within_subtree() {
        let idx = index(&["a", "a/b", "a/b/c", "ab", "a-b", "b/a"]);
        let found: Vec<_> = idx.descendants("a").map(|(name, _)| name).collect();
        assert_eq!(found, vec!["a/b", "a/b/c"]);
    }
}
