//! Explicit proxy overrides
//!
//! Two independent slots, HTTP and HTTPS, that take precedence over the
//! environment and the system backend for URLs of the matching scheme.

use std::sync::{Arc, PoisonError, RwLock};

use super::types::{OverrideScheme, ProxyDescriptor};

/// Override state shared between whoever configures proxies and the resolver.
///
/// Each slot holds an `Arc` that is swapped whole on every write, so a reader
/// sees either the previous descriptor or the new one, never a mix. The last
/// writer wins.
#[derive(Debug, Default)]
pub struct ProxyOverrides {
    http: RwLock<Option<Arc<ProxyDescriptor>>>,
    https: RwLock<Option<Arc<ProxyDescriptor>>>,
}

impl ProxyOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, scheme: OverrideScheme) -> &RwLock<Option<Arc<ProxyDescriptor>>> {
        match scheme {
            OverrideScheme::Http => &self.http,
            OverrideScheme::Https => &self.https,
        }
    }

    /// Replace the override for `scheme`; `None` clears it.
    pub fn set(&self, scheme: OverrideScheme, proxy: Option<ProxyDescriptor>) {
        tracing::debug!(
            target: "proxyconf::proxy",
            scheme = ?scheme,
            proxy = %proxy.as_ref().map_or_else(|| "none".to_string(), ToString::to_string),
            "Setting proxy override"
        );
        let proxy = proxy.map(Arc::new);
        *self
            .slot(scheme)
            .write()
            .unwrap_or_else(PoisonError::into_inner) = proxy;
    }

    /// The current override for `scheme`, shared.
    #[must_use]
    pub fn get_shared(&self, scheme: OverrideScheme) -> Option<Arc<ProxyDescriptor>> {
        self.slot(scheme)
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The current override for `scheme`.
    #[must_use]
    pub fn get(&self, scheme: OverrideScheme) -> Option<ProxyDescriptor> {
        self.get_shared(scheme).map(|proxy| (*proxy).clone())
    }

    pub fn clear(&self) {
        self.set(OverrideScheme::Http, None);
        self.set(OverrideScheme::Https, None);
    }

    pub fn set_http(&self, proxy: Option<ProxyDescriptor>) {
        self.set(OverrideScheme::Http, proxy);
    }

    #[must_use]
    pub fn get_http(&self) -> Option<ProxyDescriptor> {
        self.get(OverrideScheme::Http)
    }

    pub fn set_https(&self, proxy: Option<ProxyDescriptor>) {
        self.set(OverrideScheme::Https, proxy);
    }

    #[must_use]
    pub fn get_https(&self) -> Option<ProxyDescriptor> {
        self.get(OverrideScheme::Https)
    }

    /// The override that applies to a request URL scheme.
    ///
    /// Only `http` and `https` have slots; every other scheme gets `None`.
    #[must_use]
    pub fn for_url_scheme(&self, scheme: &str) -> Option<ProxyDescriptor> {
        OverrideScheme::from_url_scheme(scheme).and_then(|scheme| self.get(scheme))
    }
}
