//! Environment variable lookup
//!
//! Resolution reads `<SCHEME>_PROXY` / `<scheme>_proxy` and `NO_PROXY` /
//! `no_proxy` through the `Environment` trait, so callers can substitute the
//! process environment with anything that maps names to strings.

use std::env;

use hashbrown::HashMap;

use super::entry::parse_proxy_entry;
use super::types::ProxyDescriptor;

/// A source of environment variables.
///
/// An empty (or whitespace-only) value is treated the same as an unset one.
pub trait Environment: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// An in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<F> Environment for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn get(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// What the environment says about a scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentProxy {
    /// Neither variable is set to anything usable
    Unset,
    /// A variable was set; `None` means it asked for a direct connection
    Set(Option<ProxyDescriptor>),
}

/// Look up a non-empty variable, treating blank values as unset.
pub(crate) fn lookup(environment: &dyn Environment, name: &str) -> Option<String> {
    environment
        .get(name)
        .filter(|value| !value.trim().is_empty())
}

/// Read the proxy for `scheme` from `<SCHEME>_PROXY`, then `<scheme>_proxy`.
///
/// The first non-empty variable decides. A value that cannot be parsed is
/// logged and skipped as if it were unset.
pub fn proxy_from_environment(environment: &dyn Environment, scheme: &str) -> EnvironmentProxy {
    let names = [
        format!("{}_PROXY", scheme.to_ascii_uppercase()),
        format!("{}_proxy", scheme.to_ascii_lowercase()),
    ];

    for name in &names {
        let Some(value) = lookup(environment, name) else {
            continue;
        };

        match parse_proxy_entry(&value, scheme, "") {
            Ok(proxy) => {
                tracing::debug!(
                    target: "proxyconf::proxy",
                    variable = %name,
                    proxy = %proxy.as_ref().map_or_else(|| "direct".to_string(), ToString::to_string),
                    "Found proxy in environment"
                );
                return EnvironmentProxy::Set(proxy);
            }
            Err(e) => {
                tracing::warn!(
                    target: "proxyconf::proxy",
                    variable = %name,
                    error = %e,
                    "Ignoring malformed proxy variable"
                );
            }
        }
    }

    EnvironmentProxy::Unset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_unset() {
        let env = MapEnvironment::new().with("HTTP_PROXY", "   ");
        assert_eq!(lookup(&env, "HTTP_PROXY"), None);
        assert_eq!(proxy_from_environment(&env, "http"), EnvironmentProxy::Unset);
    }

    #[test]
    fn test_lowercase_variable_is_consulted() {
        let env = MapEnvironment::new().with("https_proxy", "secure.example.com:443");
        let EnvironmentProxy::Set(Some(proxy)) = proxy_from_environment(&env, "https") else {
            panic!("https_proxy should be picked up");
        };
        assert_eq!(proxy.to_string(), "https://secure.example.com:443");
    }

    #[test]
    fn test_malformed_uppercase_falls_through() {
        let env = MapEnvironment::new()
            .with("HTTP_PROXY", "http://")
            .with("http_proxy", "fallback:8080");
        let EnvironmentProxy::Set(Some(proxy)) = proxy_from_environment(&env, "http") else {
            panic!("lowercase variable should be used");
        };
        assert_eq!(proxy.host(), "fallback");
    }

    #[test]
    fn test_closure_environment() {
        let env = |name: &str| (name == "FTP_PROXY").then(|| "direct".to_string());
        assert_eq!(proxy_from_environment(&env, "ftp"), EnvironmentProxy::Set(None));
    }
}
