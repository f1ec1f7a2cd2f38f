use log::warn;

use crate::error::CompileError;

const ICANN_MARKER: &str = "===BEGIN ICANN DOMAINS===";
const PRIVATE_MARKER: &str = "===BEGIN PRIVATE DOMAINS===";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Icann,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `co.uk`
    Normal,
    /// `*.ck`
    Wildcard,
    /// `!www.ck`
    Exception,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PslRule {
    pub kind: RuleKind,
    /// Labels as written, lowercased, without the `!` prefix.
    pub labels: Vec<String>,
    pub section: Section,
    /// 1-based source line.
    pub line: usize,
}

impl PslRule {
    /// Labels from the TLD inward, the order the rule trie is keyed by.
    pub fn reversed_labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().rev().map(String::as_str)
    }
}

/// Parse PSL text, skipping malformed rules with a warning.
pub fn parse_psl(text: &str) -> Vec<PslRule> {
    let mut rules = Vec::new();
    let mut section = Section::default();

    for (idx, raw_line) in text.lines().enumerate() {
        match parse_line(raw_line, idx + 1, &mut section) {
            Ok(Some(rule)) => rules.push(rule),
            Ok(None) => {}
            Err(e) => warn!("Skipping rule: {}", e),
        }
    }

    rules
}

/// Parse PSL text, failing on the first malformed rule.
pub fn parse_psl_strict(text: &str) -> Result<Vec<PslRule>, CompileError> {
    let mut rules = Vec::new();
    let mut section = Section::default();

    for (idx, raw_line) in text.lines().enumerate() {
        if let Some(rule) = parse_line(raw_line, idx + 1, &mut section)? {
            rules.push(rule);
        }
    }

    Ok(rules)
}

fn parse_line(
    raw_line: &str,
    line_no: usize,
    section: &mut Section,
) -> Result<Option<PslRule>, CompileError> {
    let line = raw_line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if let Some(comment) = line.strip_prefix("//") {
        if comment.contains(ICANN_MARKER) {
            *section = Section::Icann;
        } else if comment.contains(PRIVATE_MARKER) {
            *section = Section::Private;
        }
        return Ok(None);
    }

    // Only the first token is the rule; the rest of the line is ignored.
    let token = match line.split_whitespace().next() {
        Some(token) => token,
        None => return Ok(None),
    };

    let invalid = |reason: &str| CompileError::InvalidRule {
        line: line_no,
        rule: token.to_string(),
        reason: reason.to_string(),
    };

    let (is_exception, body) = match token.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let labels: Vec<String> = body.split('.').map(|l| l.to_lowercase()).collect();

    if labels.iter().any(|l| l.is_empty()) {
        return Err(invalid("empty label"));
    }

    let wildcard_positions: Vec<usize> = labels
        .iter()
        .enumerate()
        .filter(|(_, l)| l.as_str() == "*")
        .map(|(i, _)| i)
        .collect();

    let kind = if is_exception {
        if !wildcard_positions.is_empty() {
            return Err(invalid("wildcard in exception rule"));
        }
        if labels.len() < 2 {
            return Err(invalid("exception rule needs at least two labels"));
        }
        RuleKind::Exception
    } else if wildcard_positions.is_empty() {
        RuleKind::Normal
    } else {
        if wildcard_positions != [0] {
            return Err(invalid("wildcard must be the leftmost label"));
        }
        RuleKind::Wildcard
    };

    Ok(Some(PslRule {
        kind,
        labels,
        section: *section,
        line: line_no,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule_kinds() {
        let rules = parse_psl("com\n*.ck\n!www.ck\nco.uk\n");
        assert_eq!(rules.len(), 4);
        assert_eq!(rules[0].kind, RuleKind::Normal);
        assert_eq!(rules[0].labels, vec!["com"]);
        assert_eq!(rules[1].kind, RuleKind::Wildcard);
        assert_eq!(rules[1].labels, vec!["*", "ck"]);
        assert_eq!(rules[2].kind, RuleKind::Exception);
        assert_eq!(rules[2].labels, vec!["www", "ck"]);
        assert_eq!(rules[3].reversed_labels().collect::<Vec<_>>(), vec!["uk", "co"]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let text = "// This is a comment\n\n   \ncom // trailing text\n";
        let rules = parse_psl(text);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].labels, vec!["com"]);
        assert_eq!(rules[0].line, 4);
    }

    #[test]
    fn test_sections() {
        let text = "// ===BEGIN ICANN DOMAINS===\ncom\n// ===END ICANN DOMAINS===\n\
                    // ===BEGIN PRIVATE DOMAINS===\nblogspot.com\n";
        let rules = parse_psl(text);
        assert_eq!(rules[0].section, Section::Icann);
        assert_eq!(rules[1].section, Section::Private);
    }

    #[test]
    fn test_lowercases_rules() {
        let rules = parse_psl("CO.UK");
        assert_eq!(rules[0].labels, vec!["co", "uk"]);
    }

    #[test]
    fn test_lenient_skips_invalid() {
        let rules = parse_psl("com\nfoo..bar\n*.*.x\n!org\nnet\n");
        let labels: Vec<_> = rules.iter().map(|r| r.labels.join(".")).collect();
        assert_eq!(labels, vec!["com", "net"]);
    }

    #[test]
    fn test_strict_reports_invalid() {
        let err = parse_psl_strict("com\nfoo.*.bar\n").unwrap_err();
        assert_eq!(
            err,
            CompileError::InvalidRule {
                line: 2,
                rule: "foo.*.bar".to_string(),
                reason: "wildcard must be the leftmost label".to_string(),
            }
        );
    }
}
