//! Resolver builder
//!
//! Every collaborator is optional. Unset ones default to the default
//! `ResolverConfig`, fresh override slots, the process environment, and the
//! process-wide system backend (or the manual lists from the config).

use std::sync::Arc;

use super::environment::{Environment, ProcessEnvironment};
use super::overrides::ProxyOverrides;
use super::resolver::ProxyResolver;
use super::system::{self, SystemProxyBackend};
use crate::config::{ConfigurationValidator, ResolverConfig};
use crate::error::Result;

/// Builder for [`ProxyResolver`].
#[derive(Default)]
pub struct ProxyResolverBuilder {
    config: ResolverConfig,
    overrides: Option<Arc<ProxyOverrides>>,
    environment: Option<Arc<dyn Environment>>,
    backend: Option<Arc<dyn SystemProxyBackend>>,
}

impl ProxyResolverBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a scheme that is always resolved to a direct connection.
    #[must_use]
    pub fn local_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.config.local_schemes.insert(scheme.into());
        self
    }

    /// Whether `<SCHEME>_PROXY` variables are consulted.
    #[must_use]
    pub fn use_environment(mut self, enabled: bool) -> Self {
        self.config.use_environment = enabled;
        self
    }

    /// Share override slots with other resolvers or with configuration code.
    #[must_use]
    pub fn overrides(mut self, overrides: Arc<ProxyOverrides>) -> Self {
        self.overrides = Some(overrides);
        self
    }

    #[must_use]
    pub fn environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Some(Arc::new(environment));
        self
    }

    #[must_use]
    pub fn backend(mut self, backend: impl SystemProxyBackend + 'static) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    #[must_use]
    pub fn shared_backend(mut self, backend: Arc<dyn SystemProxyBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Build the resolver.
    ///
    /// An explicit backend wins over the config's manual proxy list, which
    /// wins over the process-wide backend.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the configuration fails validation.
    pub fn build(self) -> Result<ProxyResolver> {
        self.config.validate()?;

        let backend: Arc<dyn SystemProxyBackend> = match self.backend {
            Some(backend) => backend,
            None => match self.config.static_backend()? {
                Some(list) => Arc::new(list),
                None => system::shared(),
            },
        };

        tracing::debug!(
            target: "proxyconf::proxy",
            use_environment = self.config.use_environment,
            local_schemes = self.config.local_schemes.len(),
            "Building proxy resolver"
        );

        Ok(ProxyResolver {
            config: Arc::new(self.config),
            overrides: self.overrides.unwrap_or_default(),
            environment: self
                .environment
                .unwrap_or_else(|| Arc::new(ProcessEnvironment)),
            backend,
        })
    }
}

impl std::fmt::Debug for ProxyResolverBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyResolverBuilder")
            .field("config", &self.config)
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}
