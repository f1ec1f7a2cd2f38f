//! Public Suffix List rule table
//!
//! One level of the reversed-label trie. Each node maps a lowercase label
//! to the next level, and may carry a wildcard (`*`) child matching any
//! single label.
//!
//! # Examples
//!
//! ```
//! use pdp_core::rules::RuleTable;
//!
//! let mut rules = RuleTable::new();
//! rules.insert(&["uk", "co"]);
//! rules.insert(&["ck", "*"]);
//!
//! assert!(rules.child("uk").and_then(|uk| uk.child("co")).is_some());
//! assert!(rules.child("ck").and_then(|ck| ck.wildcard()).is_some());
//! ```

use std::collections::HashMap;

/// Label that stands for "any single label" at its level.
pub const WILDCARD: &str = "*";

/// A node of the reversed-label rule trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    children: HashMap<String, RuleTable>,
    wildcard: Option<Box<RuleTable>>,
    exception: bool,
}

impl RuleTable {
    /// Create an empty table. An empty table matches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule given as labels from the TLD inward
    /// (`["uk", "co"]` for `co.uk`). Labels are lowercased.
    pub fn insert<S: AsRef<str>>(&mut self, reversed_labels: &[S]) {
        self.node_mut(reversed_labels);
    }

    /// Insert an exception rule (`!www.ck` as `["ck", "www"]`). The path is
    /// stored like a normal rule and its last node is marked, so the excepted
    /// host is never reported as a public suffix.
    pub fn insert_exception<S: AsRef<str>>(&mut self, reversed_labels: &[S]) {
        self.node_mut(reversed_labels).exception = true;
    }

    fn node_mut<S: AsRef<str>>(&mut self, reversed_labels: &[S]) -> &mut RuleTable {
        let mut node = self;
        for label in reversed_labels {
            let label = label.as_ref();
            node = if label == WILDCARD {
                &mut **node.wildcard.get_or_insert_with(Box::default)
            } else {
                node.children.entry(label.to_lowercase()).or_default()
            };
        }
        node
    }

    /// Child table for an exact label.
    #[inline]
    pub fn child(&self, label: &str) -> Option<&RuleTable> {
        self.children.get(label)
    }

    /// Child table for the wildcard entry.
    #[inline]
    pub fn wildcard(&self) -> Option<&RuleTable> {
        self.wildcard.as_deref()
    }

    /// Whether this node ends an exception rule.
    #[inline]
    pub fn is_exception(&self) -> bool {
        self.exception
    }

    /// Whether this level has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.wildcard.is_none()
    }

    /// Number of nodes below this one.
    pub fn len(&self) -> usize {
        self.children.values().map(|c| 1 + c.len()).sum::<usize>()
            + self.wildcard.as_ref().map_or(0, |w| 1 + w.len())
    }

    /// Longest rule, in labels.
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .chain(self.wildcard.as_deref())
            .map(|c| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }

    /// Exact labels at this level, unordered.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let rules = RuleTable::new();
        assert!(rules.is_empty());
        assert_eq!(rules.len(), 0);
        assert_eq!(rules.depth(), 0);
        assert!(rules.child("com").is_none());
        assert!(rules.wildcard().is_none());
    }

    #[test]
    fn test_insert_shares_prefixes() {
        let mut rules = RuleTable::new();
        rules.insert(&["uk", "co"]);
        rules.insert(&["uk", "ac"]);
        rules.insert(&["uk", "*"]);

        let uk = rules.child("uk").unwrap();
        assert!(uk.child("co").unwrap().is_empty());
        assert!(uk.child("ac").is_some());
        assert!(uk.wildcard().is_some());
        assert_eq!(rules.len(), 4);
        assert_eq!(rules.depth(), 2);
    }

    #[test]
    fn test_insert_lowercases_labels() {
        let mut rules = RuleTable::new();
        rules.insert(&["COM"]);
        assert!(rules.child("com").is_some());
        assert!(rules.child("COM").is_none());
    }

    #[test]
    fn test_insert_lowercases_unicode_labels() {
        let mut rules = RuleTable::new();
        rules.insert(&["ÖSTERREICH"]);
        assert!(rules.child(&"ÖSTERREICH".to_lowercase()).is_some());
        assert!(rules.child("österreich").is_some());
    }

    #[test]
    fn test_insert_exception_marks_last_node() {
        let mut rules = RuleTable::new();
        rules.insert(&["ck", "*"]);
        rules.insert_exception(&["ck", "www"]);

        let ck = rules.child("ck").unwrap();
        assert!(!ck.is_exception());
        assert!(ck.child("www").unwrap().is_exception());
        assert!(!ck.wildcard().unwrap().is_exception());
        assert_eq!(rules.len(), 3);
    }

    #[test]
    fn test_labels() {
        let mut rules = RuleTable::new();
        rules.insert(&["com"]);
        rules.insert(&["net"]);
        rules.insert(&["*"]);
        let mut labels: Vec<&str> = rules.labels().collect();
        labels.sort();
        assert_eq!(labels, vec!["com", "net"]);
    }
}
