//! Manual system proxy settings
//!
//! Mirrors the "manual proxy configuration" panes of desktop operating
//! systems: one proxy list (`http=proxy:80;https=proxy:443;socks=socks:1080`)
//! plus one bypass list (`<local>;*.corp.example.com`).

use super::SystemProxyBackend;
use crate::Url;
use crate::error::Result;
use crate::proxy::entry::DIRECT;
use crate::proxy::list::{ListEntry, parse_list_entries, parse_proxy_list};
use crate::proxy::no_proxy::BypassList;
use crate::proxy::types::ProxyType;

/// A system backend answering from fixed proxy and bypass lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticProxyList {
    proxies: String,
    bypass: BypassList,
}

impl StaticProxyList {
    /// # Errors
    ///
    /// Returns an `InvalidEntry` error if either list has an unusable entry.
    pub fn new(proxy_list: &str, bypass_list: &str) -> Result<Self> {
        parse_proxy_list(proxy_list, "http")?;
        Ok(Self {
            proxies: proxy_list.to_string(),
            bypass: BypassList::parse(bypass_list)?,
        })
    }

    #[must_use]
    pub fn bypass(&self) -> &BypassList {
        &self.bypass
    }
}

impl SystemProxyBackend for StaticProxyList {
    /// Bypassed URLs get `direct://`. Otherwise the entries configured for the
    /// URL's proxy type are returned in list order, with `direct` entries as
    /// `direct://`. Unqualified entries take the URL scheme and so always
    /// match. SOCKS entries are only used when nothing is configured for the
    /// URL's type.
    fn candidates(&self, url: &Url) -> Result<Vec<String>> {
        if self.bypass.matches(url) {
            return Ok(vec![format!("{DIRECT}://")]);
        }

        let wanted = ProxyType::from_scheme(url.scheme());
        let entries = parse_list_entries(&self.proxies, url.scheme())?;

        let configured_for = |ty: ProxyType| -> Vec<String> {
            entries
                .iter()
                .filter(|entry| entry.applies_to == ty)
                .map(ListEntry::candidate)
                .collect()
        };

        let matching = configured_for(wanted);
        if !matching.is_empty() || wanted == ProxyType::Socks {
            return Ok(matching);
        }
        Ok(configured_for(ProxyType::Socks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("Test URL should parse correctly")
    }

    #[test]
    fn test_scheme_specific_entry_wins() {
        let backend =
            StaticProxyList::new("http=web:80; https=secure:443; socks=socks:1080", "").expect("valid lists");

        assert_eq!(
            backend.candidates(&url("https://example.com/")).expect("static lists do not fail"),
            vec!["https://secure:443".to_string()]
        );
        assert_eq!(
            backend.candidates(&url("ftp://files.example.com/")).expect("static lists do not fail"),
            vec!["socks://socks:1080".to_string()]
        );
    }

    #[test]
    fn test_direct_entry_keeps_its_scheme_off_socks() {
        let backend = StaticProxyList::new("http=direct; socks=relay:1080", "").expect("valid lists");
        assert_eq!(
            backend.candidates(&url("http://example.com/")).expect("static lists do not fail"),
            vec!["direct://".to_string()]
        );
        assert_eq!(
            backend.candidates(&url("https://example.com/")).expect("static lists do not fail"),
            vec!["socks://relay:1080".to_string()]
        );

        let backend = StaticProxyList::new("direct; socks=relay:1080", "").expect("valid lists");
        assert_eq!(
            backend.candidates(&url("ftp://files.example.com/")).expect("static lists do not fail"),
            vec!["direct://".to_string()]
        );
    }

    #[test]
    fn test_unqualified_entry_applies_to_any_scheme() {
        let backend = StaticProxyList::new("corp-proxy:3128", "").expect("valid lists");
        assert_eq!(
            backend.candidates(&url("https://example.com/")).expect("static lists do not fail"),
            vec!["https://corp-proxy:3128".to_string()]
        );
    }

    #[test]
    fn test_bypassed_url_is_direct() {
        let backend = StaticProxyList::new("corp-proxy:3128", "<local>").expect("valid lists");
        assert_eq!(
            backend.candidates(&url("http://intranet/")).expect("static lists do not fail"),
            vec!["direct://".to_string()]
        );
    }
}
