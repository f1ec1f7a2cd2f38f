//! Longest-match suffix search over the rule trie
//!
//! Host labels are consumed from the right (TLD side). At every level both
//! the exact label and the wildcard entry are tried; the wildcard branch is
//! tried second and its result replaces the exact one. The first label that
//! no rule covers becomes the leftmost label of the result, so the returned
//! string is the public suffix plus one label: the registrable domain.
//!
//! # Examples
//!
//! ```
//! use pdp_core::rules::RuleTable;
//! use pdp_core::suffix::match_suffix;
//!
//! let mut rules = RuleTable::new();
//! rules.insert(&["com"]);
//!
//! assert_eq!(match_suffix(&["www", "example", "com"], &rules), "example.com");
//! ```

use crate::rules::RuleTable;

// =============================================================================
// Matching
// =============================================================================

/// Match lowercase `labels` (left to right, as written in the host) against
/// `rules` and return the registrable domain.
///
/// Returns an empty string for empty `labels`. When no rule covers the
/// rightmost label, that label alone is returned.
pub fn match_suffix<S: AsRef<str>>(labels: &[S], rules: &RuleTable) -> String {
    breakdown(labels, rules).unwrap_or_default()
}

/// `None` only when there are no labels left to consume.
fn breakdown<S: AsRef<str>>(labels: &[S], rules: &RuleTable) -> Option<String> {
    let (part, rest) = labels.split_last()?;
    let part = part.as_ref();

    let mut result = None;

    if let Some(child) = rules.child(part) {
        result = breakdown(rest, child);
    }

    if let Some(wildcard) = rules.wildcard() {
        result = breakdown(rest, wildcard);
    }

    Some(match result {
        Some(deeper) => format!("{deeper}.{part}"),
        None => part.to_string(),
    })
}

/// Whether some chain of exact or wildcard rules consumes every label,
/// i.e. the host is itself covered by the table as a public suffix.
/// A host ending on an exception rule does not count, even when a sibling
/// wildcard would cover it.
pub fn is_public_suffix<S: AsRef<str>>(labels: &[S], rules: &RuleTable) -> bool {
    let Some((part, rest)) = labels.split_last() else {
        return true;
    };

    let child = rules.child(part.as_ref());
    if rest.is_empty() && child.is_some_and(RuleTable::is_exception) {
        return false;
    }

    child.is_some_and(|child| is_public_suffix(rest, child))
        || rules
            .wildcard()
            .is_some_and(|wildcard| is_public_suffix(rest, wildcard))
}
