//! Resolver Configuration
//!
//! Settings that shape resolution: which URL schemes never use a proxy,
//! whether the environment is consulted, and an optional manual system proxy
//! configuration.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::proxy::system::StaticProxyList;

pub mod validation;

pub use validation::{ConfigResult, ConfigurationError, ConfigurationValidator};

/// Schemes handled inside the application or on local files.
pub const DEFAULT_LOCAL_SCHEMES: &[&str] = &["app", "ti", "file"];

/// Resolution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// URL schemes that are always resolved to a direct connection
    pub local_schemes: HashSet<String>,
    /// Whether `<SCHEME>_PROXY` / `<scheme>_proxy` are consulted
    pub use_environment: bool,
    /// A manual proxy list, e.g. `http=proxy:80;https=proxy:443`
    pub system_proxy_list: Option<String>,
    /// A manual bypass list, e.g. `<local>;*.corp.example.com`
    pub system_bypass_list: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            local_schemes: DEFAULT_LOCAL_SCHEMES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            use_environment: true,
            system_proxy_list: None,
            system_bypass_list: None,
        }
    }
}

impl ResolverConfig {
    /// Load from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the JSON does not deserialize or
    /// the result fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Add a scheme that never uses a proxy.
    #[must_use]
    pub fn with_local_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.local_schemes.insert(scheme.into());
        self
    }

    #[must_use]
    pub fn is_local_scheme(&self, scheme: &str) -> bool {
        self.local_schemes.contains(scheme)
    }

    /// The manual system backend described by this configuration, if any.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidEntry` error if either list does not parse.
    pub fn static_backend(&self) -> Result<Option<StaticProxyList>> {
        match &self.system_proxy_list {
            Some(list) => {
                StaticProxyList::new(list, self.system_bypass_list.as_deref().unwrap_or("")).map(Some)
            }
            None => Ok(None),
        }
    }
}
