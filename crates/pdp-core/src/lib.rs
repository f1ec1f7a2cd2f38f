//! PDP Core Library
//!
//! Public Suffix List based host classification. A URL-like string is split
//! into scheme, host and path; the host is then classified into subdomain,
//! registrable domain and public suffix against a pre-built rule table.
//!
//! # Architecture
//!
//! The rule table is a reversed-label trie built once by an external loader
//! (see the `pdp-compiler` crate) and shared read-only behind an `Arc`.
//! Every parse is a pure function of its input and the table.
//!
//! # Modules
//!
//! - `rules`: Rule trie with exact and wildcard entries
//! - `suffix`: Longest-match suffix search
//! - `host`: Registrable domain / public suffix / subdomain derivation
//! - `url`: Scheme and path splitting
//! - `parser`: `DomainParser` façade assembling a `ParsedUrl`
//! - `types`: Shared type definitions
//! - `error`: Error types
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use pdp_core::{DomainParser, RuleTable};
//!
//! let mut rules = RuleTable::new();
//! rules.insert(&["com"]);
//!
//! let parser = DomainParser::new(Arc::new(rules));
//! let parsed = parser.parse("http://www.example.com/path/to/page")?;
//! assert_eq!(parsed.registerable_domain, "example.com");
//! assert_eq!(parsed.subdomain.as_deref(), Some("www"));
//! # Ok::<(), pdp_core::ParseError>(())
//! ```

pub mod error;
pub mod host;
pub mod parser;
pub mod rules;
pub mod suffix;
pub mod types;
pub mod url;

// Re-export commonly used types
pub use error::ParseError;
pub use host::HostClassifier;
pub use parser::DomainParser;
pub use rules::RuleTable;
pub use suffix::{is_public_suffix, match_suffix};
pub use types::{HostParts, ParseFlags, ParsedUrl, UrlSplit};
pub use url::split_url;
