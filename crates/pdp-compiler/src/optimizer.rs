use std::collections::HashSet;

use log::debug;

use crate::parser::{PslRule, RuleKind};

pub struct OptimizeStats {
    pub before: usize,
    pub after: usize,
    pub deduped: usize,
}

/// Drop repeated rules, keeping the first occurrence.
pub fn optimize_rules(rules: &mut Vec<PslRule>) -> OptimizeStats {
    let before = rules.len();

    let mut seen: HashSet<RuleKey> = HashSet::new();
    let mut deduped = 0usize;
    rules.retain(|rule| {
        if seen.insert(RuleKey::from(rule)) {
            true
        } else {
            debug!("Duplicate rule '{}' on line {}", rule.labels.join("."), rule.line);
            deduped += 1;
            false
        }
    });

    OptimizeStats {
        before,
        after: rules.len(),
        deduped,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RuleKey {
    kind: RuleKind,
    labels: Vec<String>,
}

impl From<&PslRule> for RuleKey {
    fn from(rule: &PslRule) -> Self {
        Self {
            kind: rule.kind,
            labels: rule.labels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_psl;

    #[test]
    fn test_dedupe_keeps_first() {
        let mut rules = parse_psl("com\nco.uk\ncom\n// ===BEGIN PRIVATE DOMAINS===\nco.uk\n");
        let stats = optimize_rules(&mut rules);
        assert_eq!(stats.before, 4);
        assert_eq!(stats.after, 2);
        assert_eq!(stats.deduped, 2);
        assert_eq!(rules[1].line, 2);
    }

    #[test]
    fn test_exception_is_not_a_duplicate() {
        let mut rules = parse_psl("www.ck\n!www.ck\n");
        let stats = optimize_rules(&mut rules);
        assert_eq!(stats.deduped, 0);
        assert_eq!(rules.len(), 2);
    }
}
