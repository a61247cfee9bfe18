//! No-proxy (bypass) patterns and matching
//!
//! Handles bypass configuration from environment variables and from system
//! style bypass lists, and decides whether a URL must skip the proxy.

use super::entry::{split_port, split_scheme};
use super::environment::{Environment, lookup};
use crate::Url;
use crate::error::{self, EmptyEntry, Result};

/// The bypass host token that matches any host name without a dot.
pub const LOCAL: &str = "<local>";

/// One parsed bypass entry.
///
/// A whole-list wildcard (`*`) is not a pattern; it is represented as `None`
/// in a bypass list and matches every URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BypassPattern {
    scheme: Option<String>,
    host: String,
    port: u16,
}

impl BypassPattern {
    /// The scheme this pattern is limited to, if any.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// The host suffix, or the `<local>` token.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port this pattern is limited to; `0` means any port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        self.host == LOCAL
    }

    /// Check this pattern against a URL.
    ///
    /// `<local>` matches any host with no `.` in it. Otherwise the URL host
    /// must end with the pattern host (a plain suffix test, so `example.com`
    /// also matches `notexample.com`), and the scheme and port must agree
    /// where the pattern names them.
    #[must_use]
    pub fn matches(&self, url: &Url) -> bool {
        let url_host = url.host_str().unwrap_or("");

        if self.is_local() && !url_host.contains('.') {
            return true;
        }

        url_host.ends_with(&self.host)
            && self.scheme.as_deref().is_none_or(|scheme| scheme == url.scheme())
            && (self.port == 0 || Some(self.port) == url.port_or_known_default())
    }
}

/// Parse a single bypass entry.
///
/// `*` on its own yields `Ok(None)`, the unconditional bypass. A leading `*`
/// on a longer entry is dropped since matching is by suffix anyway. An
/// optional `scheme://` prefix and `:port` suffix limit the pattern. Host
/// names are compared in lowercase, like the hosts `url` produces.
///
/// # Errors
///
/// Returns an `InvalidEntry` error if `entry` is blank.
pub fn parse_bypass_entry(entry: &str) -> Result<Option<BypassPattern>> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err(error::invalid_entry(EmptyEntry));
    }
    if entry == "*" {
        return Ok(None);
    }

    let entry = entry.strip_prefix('*').unwrap_or(entry);
    let (scheme, rest) = split_scheme(entry);
    let (host, port) = split_port(rest);

    let host = if host == LOCAL {
        host.to_string()
    } else {
        host.to_ascii_lowercase()
    };

    Ok(Some(BypassPattern {
        scheme: scheme
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty()),
        host,
        port,
    }))
}

/// Decide whether `url` bypasses the proxy under `patterns`.
///
/// The URL is bypassed if any entry matches; a `None` entry always matches.
#[must_use]
pub fn should_bypass(url: &Url, patterns: &[Option<BypassPattern>]) -> bool {
    tracing::debug!(
        target: "proxyconf::proxy",
        url = %url,
        "Checking whether URL should be bypassed"
    );

    for pattern in patterns {
        match pattern {
            None => return true,
            Some(pattern) => {
                tracing::trace!(
                    target: "proxyconf::proxy",
                    scheme = pattern.scheme().unwrap_or(""),
                    host = pattern.host(),
                    port = pattern.port(),
                    "Bypass entry"
                );
                if pattern.matches(url) {
                    return true;
                }
            }
        }
    }

    tracing::debug!(target: "proxyconf::proxy", "No bypass");
    false
}

/// An ordered bypass list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BypassList {
    entries: Vec<Option<BypassPattern>>,
}

impl BypassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bypass list.
    ///
    /// Entries may be separated by `,` (the `NO_PROXY` convention) or `;`
    /// (the system proxy settings convention); surrounding whitespace and
    /// empty entries are ignored.
    ///
    /// # Errors
    ///
    /// Propagates the first entry error from `parse_bypass_entry`.
    pub fn parse(list: &str) -> Result<Self> {
        list.split([',', ';'])
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_bypass_entry)
            .collect::<Result<Vec<_>>>()
            .map(|entries| Self { entries })
    }

    /// Build from `NO_PROXY`, falling back to `no_proxy`.
    ///
    /// Returns `None` when neither variable is set to anything.
    #[must_use]
    pub fn from_env(environment: &dyn Environment) -> Option<Self> {
        let raw = lookup(environment, "NO_PROXY").or_else(|| lookup(environment, "no_proxy"))?;
        Self::parse(&raw).ok()
    }

    pub fn push(&mut self, pattern: Option<BypassPattern>) {
        self.entries.push(pattern);
    }

    #[must_use]
    pub fn entries(&self) -> &[Option<BypassPattern>] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// See [`should_bypass`].
    #[must_use]
    pub fn matches(&self, url: &Url) -> bool {
        should_bypass(url, &self.entries)
    }
}

impl FromIterator<Option<BypassPattern>> for BypassList {
    fn from_iter<I: IntoIterator<Item = Option<BypassPattern>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
