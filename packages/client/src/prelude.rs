//! Proxyconf Prelude
//!
//! The types most callers need to resolve proxies.

// Resolution
pub use crate::proxy::{ProxyResolver, ProxyResolverBuilder};

// Resolved values
pub use crate::proxy::{OverrideScheme, ProxyDescriptor, ProxyType};

// Bypass
pub use crate::proxy::{BypassList, BypassPattern};

// Collaborators
pub use crate::proxy::{Environment, SystemProxyBackend};

// Configuration
pub use crate::config::ResolverConfig;

// Error types
pub use crate::error::{Error, Result};

// URL handling
pub use url::Url;
