//! Centralized link-target classification.
//!
//! Every link field in the data tables holds one of two things: an absolute
//! URL (`https://example.com/path`) or a root-relative path (`/articles`).
//! This module provides the single classification function both the config
//! validator and the table checks use, so "what counts as a valid link"
//! is defined in exactly one place.
//!
//! Checks are purely lexical — scheme, `://`, non-empty host — with no
//! network access and no attempt at full RFC 3986 parsing. A typo like
//! `htps://…` or a missing leading slash is the failure mode these guard
//! against, not exotic-but-legal URLs.

/// How a link-target string classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute URL: `scheme://host[/...]` with a non-empty host.
    Absolute,
    /// Root-relative path: starts with `/`, no whitespace.
    RootRelative,
    /// Neither of the above.
    Invalid,
}

/// Classify a link-target string.
///
/// - `"https://x.com/aggmoulik"` → `Absolute`
/// - `"/articles"` → `RootRelative`
/// - `"articles"` → `Invalid`
/// - `"htps://x.com"` → `Absolute` (any alphabetic scheme is accepted;
///   scheme allow-listing is the consumer's call, not a syntax question)
pub fn classify(target: &str) -> LinkTarget {
    if target.chars().any(char::is_whitespace) {
        return LinkTarget::Invalid;
    }
    if let Some((scheme, rest)) = target.split_once("://") {
        let scheme_ok = !scheme.is_empty()
            && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+');
        // Host is everything up to the first `/`; it must be non-empty.
        let host_ok = !rest.is_empty() && !rest.starts_with('/');
        return if scheme_ok && host_ok {
            LinkTarget::Absolute
        } else {
            LinkTarget::Invalid
        };
    }
    if target.starts_with('/') {
        return LinkTarget::RootRelative;
    }
    LinkTarget::Invalid
}

/// True if `target` is a syntactically valid absolute URL.
pub fn is_absolute_url(target: &str) -> bool {
    classify(target) == LinkTarget::Absolute
}

/// True if `target` is a root-relative path.
pub fn is_root_relative(target: &str) -> bool {
    classify(target) == LinkTarget::RootRelative
}
