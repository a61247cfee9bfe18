//! Configuration Validation
//!
//! Validation rules for `ResolverConfig` and the shared scheme-name check.

use super::ResolverConfig;
use crate::proxy::list::parse_proxy_list;
use crate::proxy::no_proxy::BypassList;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid local scheme: {0:?} is not a lowercase URL scheme")]
    InvalidLocalScheme(String),

    #[error("Invalid system proxy list: {0}")]
    InvalidProxyList(String),

    #[error("Invalid system bypass list: {0}")]
    InvalidBypassList(String),

    #[error("Configuration could not be parsed: {0}")]
    Parse(String),
}

impl From<ConfigurationError> for crate::Error {
    fn from(e: ConfigurationError) -> Self {
        crate::error::configuration(e)
    }
}

/// Configuration validation trait
pub trait ConfigurationValidator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidLocalScheme` - if a local scheme is empty, not lowercase, or
    ///   contains characters a URL scheme cannot have
    /// - `InvalidProxyList` - if the system proxy list has an unusable entry
    /// - `InvalidBypassList` - if the system bypass list has an unusable entry
    fn validate(&self) -> ConfigResult<()>;
}

impl ConfigurationValidator for ResolverConfig {
    fn validate(&self) -> ConfigResult<()> {
        for scheme in &self.local_schemes {
            if !is_scheme_token(scheme) || scheme.to_ascii_lowercase() != *scheme {
                return Err(ConfigurationError::InvalidLocalScheme(scheme.clone()));
            }
        }

        if let Some(list) = &self.system_proxy_list {
            parse_proxy_list(list, "http")
                .map_err(|e| ConfigurationError::InvalidProxyList(e.to_string()))?;
        }

        if let Some(list) = &self.system_bypass_list {
            BypassList::parse(list)
                .map_err(|e| ConfigurationError::InvalidBypassList(e.to_string()))?;
        }

        Ok(())
    }
}

/// Whether `s` is a well-formed URL scheme name (RFC 3986 `scheme`).
pub(crate) fn is_scheme_token(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
