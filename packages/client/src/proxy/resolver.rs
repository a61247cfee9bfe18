//! Proxy resolution
//!
//! Decides, for one URL, between a direct connection and a specific proxy.
//! Sources are consulted in a fixed order and the first decisive answer wins:
//!
//! 1. locally handled schemes (`app`, `ti`, `file` by default) are direct
//! 2. the HTTP or HTTPS override, for URLs of that scheme
//! 3. `<SCHEME>_PROXY`, then `<scheme>_proxy`
//! 4. the system backend's first candidate
//!
//! Bypass lists are not applied here; see [`ProxyResolver::resolve_with_bypass`].

use std::sync::Arc;

use super::builder::ProxyResolverBuilder;
use super::entry::parse_proxy_entry;
use super::environment::{Environment, EnvironmentProxy, ProcessEnvironment, proxy_from_environment};
use super::no_proxy::BypassList;
use super::overrides::ProxyOverrides;
use super::system::{self, SystemProxyBackend};
use super::types::{OverrideScheme, ProxyDescriptor};
use crate::Url;
use crate::config::ResolverConfig;
use crate::error::{self, Result};

/// Outcome of the steps before the system backend.
enum Decision {
    Decided(Option<ProxyDescriptor>),
    Undecided,
}

/// Resolves the proxy to use for a URL.
///
/// Cloning is cheap and clones share override state, so a handle can be
/// given to each connector while configuration code keeps another.
#[derive(Clone)]
pub struct ProxyResolver {
    pub(crate) config: Arc<ResolverConfig>,
    pub(crate) overrides: Arc<ProxyOverrides>,
    pub(crate) environment: Arc<dyn Environment>,
    pub(crate) backend: Arc<dyn SystemProxyBackend>,
}

impl ProxyResolver {
    #[must_use]
    pub fn builder() -> ProxyResolverBuilder {
        ProxyResolverBuilder::new()
    }

    /// Default configuration over the process environment and the
    /// process-wide system backend.
    #[must_use]
    pub fn system_default() -> Self {
        Self {
            config: Arc::new(ResolverConfig::default()),
            overrides: Arc::new(ProxyOverrides::new()),
            environment: Arc::new(ProcessEnvironment),
            backend: system::shared(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The override slots this resolver reads.
    #[must_use]
    pub fn overrides(&self) -> &Arc<ProxyOverrides> {
        &self.overrides
    }

    pub fn set_override(&self, scheme: OverrideScheme, proxy: Option<ProxyDescriptor>) {
        self.overrides.set(scheme, proxy);
    }

    #[must_use]
    pub fn get_override(&self, scheme: OverrideScheme) -> Option<ProxyDescriptor> {
        self.overrides.get(scheme)
    }

    /// Resolve the proxy for a URL string.
    ///
    /// `Ok(None)` means connect directly.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidUrl` error if `url` cannot be parsed.
    pub fn resolve_for_url(&self, url: &str) -> Result<Option<ProxyDescriptor>> {
        let url = parse_url(url)?;
        Ok(self.resolve(&url))
    }

    /// Resolve the proxy for an already parsed URL.
    #[must_use]
    pub fn resolve(&self, url: &Url) -> Option<ProxyDescriptor> {
        tracing::debug!(
            target: "proxyconf::proxy",
            url = %url,
            "Looking up proxy information"
        );

        let proxy = match self.decide(url) {
            Decision::Decided(proxy) => proxy,
            Decision::Undecided => self
                .backend_candidates(url)
                .into_iter()
                .next()
                .and_then(|candidate| parse_candidate(&candidate, url.scheme())),
        };

        log_outcome(url, proxy.as_ref());
        proxy
    }

    /// Resolve every proxy candidate for a URL string, in preference order.
    ///
    /// Overrides, the environment and local schemes produce a single
    /// element. Otherwise each backend candidate is parsed in order; `None`
    /// elements stand for `direct` candidates and are kept in place, while
    /// malformed candidates are dropped. An empty list means connect directly.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidUrl` error if `url` cannot be parsed.
    pub fn resolve_candidates(&self, url: &str) -> Result<Vec<Option<ProxyDescriptor>>> {
        let url = parse_url(url)?;

        Ok(match self.decide(&url) {
            Decision::Decided(proxy) => vec![proxy],
            Decision::Undecided => self
                .backend_candidates(&url)
                .iter()
                .filter_map(|candidate| {
                    parse_proxy_entry(candidate, url.scheme(), "")
                        .inspect_err(|e| warn_candidate(candidate, e))
                        .ok()
                })
                .collect(),
        })
    }

    /// Resolve the proxy for a URL string, then apply a bypass list.
    ///
    /// A bypassed URL resolves to `None` whatever the other sources say.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidUrl` error if `url` cannot be parsed.
    pub fn resolve_with_bypass(
        &self,
        url: &str,
        bypass: &BypassList,
    ) -> Result<Option<ProxyDescriptor>> {
        let url = parse_url(url)?;
        if bypass.matches(&url) {
            tracing::debug!(target: "proxyconf::proxy", url = %url, "Using direct connection");
            return Ok(None);
        }
        Ok(self.resolve(&url))
    }

    fn decide(&self, url: &Url) -> Decision {
        let scheme = url.scheme();

        if self.config.is_local_scheme(scheme) {
            tracing::debug!(
                target: "proxyconf::proxy",
                scheme = %scheme,
                "Local scheme never uses a proxy"
            );
            return Decision::Decided(None);
        }

        if let Some(proxy) = self.overrides.for_url_scheme(scheme) {
            tracing::debug!(
                target: "proxyconf::proxy",
                proxy = %proxy,
                "Using proxy override"
            );
            return Decision::Decided(Some(proxy));
        }

        if self.config.use_environment {
            if let EnvironmentProxy::Set(proxy) =
                proxy_from_environment(self.environment.as_ref(), scheme)
            {
                return Decision::Decided(proxy);
            }
        }

        Decision::Undecided
    }

    fn backend_candidates(&self, url: &Url) -> Vec<String> {
        match self.backend.candidates(url) {
            Ok(candidates) => {
                tracing::debug!(
                    target: "proxyconf::proxy",
                    count = candidates.len(),
                    "System proxy candidates"
                );
                candidates
            }
            Err(e) => {
                tracing::warn!(
                    target: "proxyconf::proxy",
                    error = %e,
                    "System proxy lookup failed; connecting directly"
                );
                Vec::new()
            }
        }
    }
}

impl Default for ProxyResolver {
    fn default() -> Self {
        Self::system_default()
    }
}

impl std::fmt::Debug for ProxyResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyResolver")
            .field("config", &self.config)
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| error::invalid_url(e, url))
}

fn parse_candidate(candidate: &str, url_scheme: &str) -> Option<ProxyDescriptor> {
    parse_proxy_entry(candidate, url_scheme, "")
        .inspect_err(|e| warn_candidate(candidate, e))
        .ok()
        .flatten()
}

fn warn_candidate(candidate: &str, e: &error::Error) {
    tracing::warn!(
        target: "proxyconf::proxy",
        candidate = %candidate,
        error = %e,
        "Ignoring malformed system proxy candidate"
    );
}

fn log_outcome(url: &Url, proxy: Option<&ProxyDescriptor>) {
    match proxy {
        Some(proxy) => tracing::debug!(
            target: "proxyconf::proxy",
            url = %url,
            proxy = %proxy,
            "Using proxy"
        ),
        None => tracing::debug!(
            target: "proxyconf::proxy",
            url = %url,
            "Using direct connection"
        ),
    }
}
