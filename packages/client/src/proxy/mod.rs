//! Proxy resolution
//!
//! Parsing of proxy entries, proxy lists and bypass lists, plus the resolver
//! that layers overrides, environment variables and system settings.

pub mod builder;
pub mod entry;
pub mod environment;
pub mod list;
pub mod no_proxy;
pub mod overrides;
pub mod resolver;
pub mod system;
pub mod types;

pub use builder::ProxyResolverBuilder;
pub use entry::{DIRECT, parse_proxy_entry};
pub use environment::{
    Environment, EnvironmentProxy, MapEnvironment, ProcessEnvironment, proxy_from_environment,
};
pub use list::parse_proxy_list;
pub use no_proxy::{BypassList, BypassPattern, LOCAL, parse_bypass_entry, should_bypass};
pub use overrides::ProxyOverrides;
pub use resolver::ProxyResolver;
pub use system::{FnBackend, NoSystemProxy, StaticProxyList, SystemProxyBackend};
pub use types::{OverrideScheme, ProxyDescriptor, ProxyType};
