//! Proxyconf Public API
//!
//! Decide, for any outbound URL, whether to connect directly or through a
//! proxy. The resolution core lives in `proxyconf_client`; this crate
//! re-exports it and adds process-wide entry points.
//!
//! ```rust
//! // `file` URLs are handled locally and never use a proxy.
//! assert_eq!(proxyconf::resolve("file:///etc/hosts")?, None);
//! # Ok::<(), proxyconf::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::sync::OnceLock;

// Re-export the client surface
pub use proxyconf_client::{
    BypassList, BypassPattern, ConfigurationError, ConfigurationValidator, Environment, Error,
    FnBackend, Kind, MapEnvironment, NoSystemProxy, OverrideScheme, ProcessEnvironment,
    ProxyDescriptor, ProxyOverrides, ProxyResolver, ProxyResolverBuilder, ProxyType,
    ResolverConfig, Result, StaticProxyList, SystemProxyBackend, parse_bypass_entry,
    parse_proxy_entry, parse_proxy_list, should_bypass,
};
pub use proxyconf_client::{config, error, prelude, proxy};
pub use url::Url;

/// Main entry point providing resolver constructors
#[derive(Debug, Clone, Copy)]
pub struct ProxyConf;

impl ProxyConf {
    /// Start configuring a resolver.
    ///
    /// Shorthand for `ProxyResolver::builder()`
    #[must_use]
    pub fn builder() -> ProxyResolverBuilder {
        ProxyResolver::builder()
    }

    /// Build a resolver from a configuration over the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `config` fails validation.
    pub fn from_config(config: ResolverConfig) -> Result<ProxyResolver> {
        ProxyResolver::builder().config(config).build()
    }

    /// A resolver with default settings over the process environment and the
    /// process-wide system backend.
    #[must_use]
    pub fn system() -> ProxyResolver {
        ProxyResolver::system_default()
    }
}

/// Process-wide resolver, created on first use
static GLOBAL_RESOLVER: OnceLock<ProxyResolver> = OnceLock::new();

/// Get the process-wide resolver.
///
/// Unless [`init_global`] ran first, this is [`ProxyConf::system`].
#[must_use]
pub fn global() -> &'static ProxyResolver {
    GLOBAL_RESOLVER.get_or_init(|| {
        tracing::debug!(target: "proxyconf::proxy", "Initializing global proxy resolver");
        ProxyConf::system()
    })
}

/// Initialize the process-wide resolver from a configuration.
///
/// Returns `Ok(false)` if the global resolver already exists, in which case
/// it is left unchanged.
///
/// # Errors
///
/// Returns a `Configuration` error if `config` fails validation.
pub fn init_global(config: ResolverConfig) -> Result<bool> {
    let resolver = ProxyConf::from_config(config)?;
    let installed = GLOBAL_RESOLVER.set(resolver).is_ok();
    if !installed {
        tracing::warn!(
            target: "proxyconf::proxy",
            "Global proxy resolver already initialized; keeping the existing one"
        );
    }
    Ok(installed)
}

/// Resolve the proxy for `url` with the process-wide resolver.
///
/// # Errors
///
/// Returns an `InvalidUrl` error if `url` cannot be parsed.
pub fn resolve(url: &str) -> Result<Option<ProxyDescriptor>> {
    global().resolve_for_url(url)
}
