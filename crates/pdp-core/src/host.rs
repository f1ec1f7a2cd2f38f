//! Host classification
//!
//! Derives registrable domain, public suffix and subdomain from a bare host
//! using the suffix matcher.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use pdp_core::host::HostClassifier;
//! use pdp_core::rules::RuleTable;
//!
//! let mut rules = RuleTable::new();
//! rules.insert(&["com"]);
//!
//! let classifier = HostClassifier::new(Arc::new(rules));
//! let parts = classifier.classify("www.example.com").unwrap();
//! assert_eq!(parts.registerable_domain, "example.com");
//! assert_eq!(parts.public_suffix, "com");
//! assert_eq!(parts.subdomain.as_deref(), Some("www"));
//! ```

use std::sync::Arc;

use log::{debug, trace};

use crate::error::ParseError;
use crate::rules::RuleTable;
use crate::suffix::{is_public_suffix, match_suffix};
use crate::types::{HostParts, ParseFlags};

/// Most labels a DNS name can carry.
pub const MAX_LABELS: usize = 127;

/// Classifies hosts against a shared, read-only rule table.
#[derive(Debug, Clone)]
pub struct HostClassifier {
    rules: Arc<RuleTable>,
    flags: ParseFlags,
}

impl HostClassifier {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self {
            rules,
            flags: ParseFlags::empty(),
        }
    }

    pub fn with_flags(mut self, flags: ParseFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn flags(&self) -> ParseFlags {
        self.flags
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Classify a bare host.
    pub fn classify(&self, host: &str) -> Result<HostParts, ParseError> {
        let labels = split_labels(host)?;
        let lowered: Vec<String> = labels.iter().map(|l| l.to_lowercase()).collect();

        if self.flags.contains(ParseFlags::REJECT_PUBLIC_SUFFIX)
            && is_public_suffix(&lowered, &self.rules)
        {
            debug!("Host '{}' is a public suffix", host);
            return Err(ParseError::NoRegistrableDomain(lowered.join(".")));
        }

        let registerable = match_suffix(&lowered, &self.rules);
        let matched: Vec<&str> = registerable.split('.').collect();
        let kept = unmatched_labels(&lowered, &matched);

        let source: Vec<&str> = if self.flags.contains(ParseFlags::PRESERVE_CASE) {
            labels
        } else {
            lowered.iter().map(String::as_str).collect()
        };

        let subdomain = join_where(&source, &kept, true);
        let registerable_domain = join_where(&source, &kept, false);
        let public_suffix = registerable_domain
            .split_once('.')
            .map(|(_, suffix)| suffix.to_string())
            .unwrap_or_default();

        trace!(
            "Classified '{}': domain={} suffix={} sub={}",
            host,
            registerable_domain,
            public_suffix,
            subdomain
        );

        Ok(HostParts {
            registerable_domain,
            public_suffix,
            subdomain: if subdomain.is_empty() { None } else { Some(subdomain) },
        })
    }

    /// Registrable domain of a bare host.
    pub fn registerable_domain(&self, host: &str) -> Result<String, ParseError> {
        self.classify(host).map(|parts| parts.registerable_domain)
    }

    /// Public suffix of a bare host.
    pub fn public_suffix(&self, host: &str) -> Result<String, ParseError> {
        self.classify(host).map(|parts| parts.public_suffix)
    }
}

// =============================================================================
// Label Helpers
// =============================================================================

/// Split on `.`, dropping one trailing root dot. Rejects empty hosts, empty
/// labels and overlong hosts.
fn split_labels(host: &str) -> Result<Vec<&str>, ParseError> {
    let trimmed = host.strip_suffix('.').unwrap_or(host);
    if trimmed.is_empty() {
        return Err(ParseError::EmptyHost);
    }

    let labels: Vec<&str> = trimmed.split('.').collect();
    if labels.iter().any(|label| label.is_empty()) {
        return Err(ParseError::EmptyLabel(host.to_string()));
    }
    if labels.len() > MAX_LABELS {
        return Err(ParseError::TooManyLabels {
            count: labels.len(),
            max: MAX_LABELS,
        });
    }

    Ok(labels)
}

/// Multiset difference `host - matched`, by label value. Each matched label
/// removes one occurrence, taken from the right. Returns a keep-mask over
/// `host` so the remainder stays in its original order.
fn unmatched_labels(host: &[String], matched: &[&str]) -> Vec<bool> {
    let mut kept = vec![true; host.len()];
    for label in matched.iter().rev() {
        let found = (0..host.len())
            .rev()
            .find(|&i| kept[i] && host[i] == *label);
        if let Some(i) = found {
            kept[i] = false;
        }
    }
    kept
}

fn join_where(labels: &[&str], kept: &[bool], keep: bool) -> String {
    labels
        .iter()
        .zip(kept)
        .filter(|(_, k)| **k == keep)
        .map(|(label, _)| *label)
        .collect::<Vec<_>>()
        .join(".")
}
