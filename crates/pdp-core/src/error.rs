//! Error types for host classification.

use thiserror::Error;

/// Errors raised at the classification boundary.
///
/// Suffix matching itself never fails: unusual hosts degrade to a
/// best-effort classification. These variants only reject input that
/// should not reach the matcher in the first place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The host is empty (or only a root dot).
    #[error("Invalid input: host is empty")]
    EmptyHost,

    /// The host has an empty label (e.g. `a..com`).
    #[error("Invalid input: empty label in host '{0}'")]
    EmptyLabel(String),

    /// The host has more labels than a DNS name can carry.
    #[error("Invalid input: host has {count} labels (max {max})")]
    TooManyLabels { count: usize, max: usize },

    /// The host is itself a public suffix, so no registrable domain exists.
    #[error("No registrable domain: '{0}' is a public suffix")]
    NoRegistrableDomain(String),
}

impl ParseError {
    /// Whether this error rejects malformed input rather than a valid host.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyHost | Self::EmptyLabel(_) | Self::TooManyLabels { .. })
    }
}
