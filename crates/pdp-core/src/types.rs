//! Shared type definitions
//!
//! Result records handed back to callers, and the flags that tune how a
//! host is classified.

// =============================================================================
// Parse Flags
// =============================================================================

bitflags::bitflags! {
    /// Flags for classification behavior.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ParseFlags: u8 {
        /// Fail with `NoRegistrableDomain` when the host is itself a public suffix
        const REJECT_PUBLIC_SUFFIX = 1 << 0;
        /// Report domain parts in the host's original casing
        const PRESERVE_CASE = 1 << 1;
    }
}

// =============================================================================
// URL Split
// =============================================================================

/// Scheme, host and path isolated from a URL-like string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSplit {
    /// Scheme without the `://` separator
    pub scheme: Option<String>,
    /// Bare host
    pub host: String,
    /// Path starting at the first `/`, if longer than `/`
    pub path: Option<String>,
}

// =============================================================================
// Host Parts
// =============================================================================

/// Classification of a single host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParts {
    /// Public suffix plus one label (e.g. "example.co.uk")
    pub registerable_domain: String,
    /// Public suffix (e.g. "co.uk"), empty for single-label hosts
    pub public_suffix: String,
    /// Labels left of the registrable domain (e.g. "www")
    pub subdomain: Option<String>,
}

// =============================================================================
// Parsed URL
// =============================================================================

/// Full result of parsing a URL-like string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: Option<String>,
    pub path: Option<String>,
    pub host: String,
    pub registerable_domain: String,
    pub public_suffix: String,
    pub subdomain: Option<String>,
}

impl ParsedUrl {
    /// Assemble from the splitter and classifier outputs.
    pub fn new(split: UrlSplit, parts: HostParts) -> Self {
        Self {
            scheme: split.scheme,
            path: split.path,
            host: split.host,
            registerable_domain: parts.registerable_domain,
            public_suffix: parts.public_suffix,
            subdomain: parts.subdomain,
        }
    }

    /// Check if a subdomain is present.
    pub fn has_subdomain(&self) -> bool {
        self.subdomain.is_some()
    }

    /// Check if the host has a non-empty public suffix.
    pub fn has_public_suffix(&self) -> bool {
        !self.public_suffix.is_empty()
    }
}
