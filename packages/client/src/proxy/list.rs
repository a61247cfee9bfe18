//! Proxy list parsing
//!
//! A proxy list is a `;`-separated sequence of entries such as
//! `http=proxy:80; https=secure:443; socks://fallback:1080`.

use super::entry::{DIRECT, parse_proxy_entry};
use super::types::{ProxyDescriptor, ProxyType};
use crate::config::validation::is_scheme_token;
use crate::error::Result;

/// Parse a proxy list into descriptors, keeping input order.
///
/// Entries are separated by `;` or whitespace; empty entries are dropped. An
/// entry may start with `scheme=`, which overrides every other source of
/// scheme for that entry. Entries that resolve to `direct` produce `None` in
/// their position rather than being removed.
///
/// # Errors
///
/// Returns an `InvalidEntry` error for the first entry that leaves no host.
pub fn parse_proxy_list(list: &str, url_scheme: &str) -> Result<Vec<Option<ProxyDescriptor>>> {
    parse_list_entries(list, url_scheme)
        .map(|entries| entries.into_iter().map(|entry| entry.proxy).collect())
}

/// One proxy list entry together with the proxy type it is configured for.
///
/// `direct` entries carry no descriptor, so the type is kept alongside:
/// `http=direct` applies to HTTP, an unqualified `direct` to the URL scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListEntry {
    pub(crate) applies_to: ProxyType,
    pub(crate) proxy: Option<ProxyDescriptor>,
}

impl ListEntry {
    /// The backend candidate string for this entry.
    pub(crate) fn candidate(&self) -> String {
        self.proxy
            .as_ref()
            .map_or_else(|| format!("{DIRECT}://"), ToString::to_string)
    }
}

pub(crate) fn parse_list_entries(list: &str, url_scheme: &str) -> Result<Vec<ListEntry>> {
    list.split(|c: char| c == ';' || c.is_whitespace())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (entry_scheme, entry) = split_entry_scheme(entry);
            let proxy = parse_proxy_entry(entry, url_scheme, entry_scheme)?;
            tracing::debug!(
                target: "proxyconf::proxy",
                entry_scheme = %entry_scheme,
                proxy = %proxy.as_ref().map_or_else(|| DIRECT.to_string(), ToString::to_string),
                "Proxy entry"
            );

            let applies_to = match &proxy {
                Some(proxy) => proxy.proxy_type(),
                None if !entry_scheme.is_empty() && !entry_scheme.eq_ignore_ascii_case(DIRECT) => {
                    ProxyType::from_scheme(entry_scheme)
                }
                None => ProxyType::from_scheme(url_scheme),
            };
            Ok(ListEntry { applies_to, proxy })
        })
        .collect()
}

/// Split a leading `scheme=` qualifier off a list entry.
///
/// Only a well-formed scheme name counts, so an `=` inside credentials does
/// not cut the entry apart.
fn split_entry_scheme(entry: &str) -> (&str, &str) {
    match entry.split_once('=') {
        Some((scheme, rest)) if is_scheme_token(scheme.trim()) => (scheme.trim(), rest),
        _ => ("", entry),
    }
}
