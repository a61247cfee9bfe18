//! Single proxy entry parsing
//!
//! Turns strings such as `user:pass@proxyhost:8080` or `socks://host:1080`
//! into a `ProxyDescriptor`. The order of the steps matters: each one removes
//! the part it matched before the next looks at the remainder.

use super::types::{ProxyDescriptor, ProxyType};
use crate::error::{self, EmptyEntry, Result};

/// The scheme that means "no proxy".
pub const DIRECT: &str = "direct";

/// Parse one proxy entry.
///
/// The scheme is picked from, in order: `entry_scheme` (a `scheme=` qualifier
/// from a proxy list), a `scheme://` prefix inside `entry`, and finally
/// `url_scheme`, the scheme of the URL being resolved. A resolved scheme of
/// `direct`, or an entry that is just the word `direct`, yields `Ok(None)`.
///
/// A bare `direct` entry is checked before any scheme is picked, so it means
/// "no proxy" whatever `entry_scheme` says: `socks=direct` in a proxy list
/// sends SOCKS traffic directly rather than naming a proxy host `direct`.
///
/// Credentials are split off at the first `@` before the port is looked for,
/// because a password may itself contain `:`. A port that is missing,
/// non-numeric or out of range is recorded as `0`.
///
/// # Errors
///
/// Returns an `InvalidEntry` error if `entry` is blank or leaves no host.
pub fn parse_proxy_entry(
    entry: &str,
    url_scheme: &str,
    entry_scheme: &str,
) -> Result<Option<ProxyDescriptor>> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err(error::invalid_entry(EmptyEntry));
    }
    if entry.eq_ignore_ascii_case(DIRECT) {
        return Ok(None);
    }

    let (host_scheme, rest) = split_scheme(entry);
    let (credentials, rest) = split_credentials(rest);
    let (host, port) = split_entry_port(rest);

    let scheme = [entry_scheme.trim(), host_scheme.unwrap_or("").trim()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(url_scheme);

    if scheme.trim().eq_ignore_ascii_case(DIRECT) {
        return Ok(None);
    }

    let mut proxy = ProxyDescriptor::new(ProxyType::from_scheme(scheme), host)?.with_port(port);
    if let Some((username, password)) = credentials {
        proxy = proxy.with_credentials(username, password);
    }

    Ok(Some(proxy))
}

/// Split an optional `scheme://` prefix off `entry`.
pub(crate) fn split_scheme(entry: &str) -> (Option<&str>, &str) {
    match entry.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, entry),
    }
}

/// Split optional `user[:password]@` credentials at the first `@`.
fn split_credentials(entry: &str) -> (Option<(&str, &str)>, &str) {
    match entry.find('@') {
        Some(at) if at > 0 => {
            let (credentials, rest) = (&entry[..at], &entry[at + 1..]);
            let (username, password) = credentials.split_once(':').unwrap_or((credentials, ""));
            (Some((username, password)), rest)
        }
        _ => (None, entry),
    }
}

/// Split a trailing `:port` found by scanning back over digits.
///
/// The digit run only counts as a port when it is non-empty and directly
/// preceded by `:`. Values that overflow `u16` become `0`, but are still
/// removed from the host.
pub(crate) fn split_port(entry: &str) -> (&str, u16) {
    let head = entry.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &entry[head.len()..];

    match head.strip_suffix(':') {
        Some(host) if !digits.is_empty() => (host, digits.parse().unwrap_or(0)),
        _ => (entry, 0),
    }
}

/// `split_port`, plus dropping a trailing `:` segment that is not a number.
///
/// `proxy:abc` and `proxy:` become `proxy` with port `0`. Bracketed IPv6
/// literals are left alone.
fn split_entry_port(entry: &str) -> (&str, u16) {
    let (host, port) = split_port(entry);
    if host.len() != entry.len() {
        return (host, port);
    }

    match entry.rfind(':') {
        Some(colon) if !entry[colon..].contains(']') => {
            tracing::trace!(
                target: "proxyconf::proxy",
                entry = %entry,
                "Ignoring malformed proxy port"
            );
            (&entry[..colon], 0)
        }
        _ => (entry, 0),
    }
}
