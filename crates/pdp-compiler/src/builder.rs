use log::debug;

use pdp_core::rules::RuleTable;

use crate::parser::{PslRule, RuleKind, Section};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Include rules from the PRIVATE DOMAINS section.
    pub include_private: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            include_private: true,
        }
    }
}

/// Build the reversed-label rule trie.
///
/// Exception rules become label paths with their last node marked
/// (`!www.ck` → `ck → www!`); the matcher then treats the excepted label as
/// the registrable one.
pub fn build_rule_table(rules: &[PslRule], options: &CompileOptions) -> RuleTable {
    let mut table = RuleTable::new();
    let mut skipped_private = 0usize;

    for rule in rules {
        if rule.section == Section::Private && !options.include_private {
            skipped_private += 1;
            continue;
        }
        let reversed: Vec<&str> = rule.reversed_labels().collect();
        if rule.kind == RuleKind::Exception {
            table.insert_exception(&reversed);
        } else {
            table.insert(&reversed);
        }
    }

    debug!(
        "Built rule table: {} nodes, depth {}, {} private rules skipped",
        table.len(),
        table.depth(),
        skipped_private
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_psl;

    #[test]
    fn test_build_nested_table() {
        let rules = parse_psl("com\nco.uk\n*.ck\n!www.ck\n");
        let table = build_rule_table(&rules, &CompileOptions::default());

        assert!(table.child("com").unwrap().is_empty());
        let uk = table.child("uk").unwrap();
        assert!(uk.child("co").is_some());
        let ck = table.child("ck").unwrap();
        assert!(ck.wildcard().is_some());
        assert!(ck.child("www").unwrap().is_exception());
        assert!(!uk.child("co").unwrap().is_exception());
        assert_eq!(table.depth(), 2);
    }

    #[test]
    fn test_exclude_private_section() {
        let rules = parse_psl("com\n// ===BEGIN PRIVATE DOMAINS===\nblogspot.com\n");

        let all = build_rule_table(&rules, &CompileOptions::default());
        assert!(all.child("com").unwrap().child("blogspot").is_some());

        let icann_only = build_rule_table(&rules, &CompileOptions { include_private: false });
        assert!(icann_only.child("com").unwrap().is_empty());
    }
}
