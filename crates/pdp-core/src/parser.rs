//! URL parser façade
//!
//! Splits a URL-like string, classifies its host and assembles a
//! [`ParsedUrl`].

use std::sync::Arc;

use log::trace;

use crate::error::ParseError;
use crate::host::HostClassifier;
use crate::rules::RuleTable;
use crate::types::{ParseFlags, ParsedUrl};
use crate::url::split_url;

/// Parses URLs against a shared rule table. Cheap to clone.
#[derive(Debug, Clone)]
pub struct DomainParser {
    classifier: HostClassifier,
}

impl DomainParser {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self {
            classifier: HostClassifier::new(rules),
        }
    }

    pub fn with_flags(mut self, flags: ParseFlags) -> Self {
        self.classifier = self.classifier.with_flags(flags);
        self
    }

    pub fn classifier(&self) -> &HostClassifier {
        &self.classifier
    }

    /// Parse a URL-like string or bare host.
    pub fn parse(&self, url: &str) -> Result<ParsedUrl, ParseError> {
        let split = split_url(url);
        trace!(
            "Split '{}': scheme={:?} host={} path={:?}",
            url,
            split.scheme,
            split.host,
            split.path
        );
        let parts = self.classifier.classify(&split.host)?;
        Ok(ParsedUrl::new(split, parts))
    }

    /// Registrable domain of a bare host.
    pub fn registerable_domain(&self, host: &str) -> Result<String, ParseError> {
        self.classifier.registerable_domain(host)
    }

    /// Public suffix of a bare host.
    pub fn public_suffix(&self, host: &str) -> Result<String, ParseError> {
        self.classifier.public_suffix(host)
    }
}
