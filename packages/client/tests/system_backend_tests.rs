//! The process-wide backend can only be installed once per process, so this
//! file holds a single test.

use std::sync::Arc;

use proxyconf_client::proxy::system;
use proxyconf_client::{
    FnBackend, MapEnvironment, NoSystemProxy, ProxyResolver, ProxyType, SystemProxyBackend, Url,
};

#[test]
fn test_install_shared_backend() {
    assert!(!system::is_installed());

    let backend = FnBackend::new(|_| Ok(vec!["socks://system-relay:1080".to_string()]));
    assert!(system::install(Arc::new(backend)));
    assert!(system::is_installed());

    // first install wins
    assert!(!system::install(Arc::new(NoSystemProxy)));

    let resolver = ProxyResolver::builder()
        .environment(MapEnvironment::new())
        .build()
        .expect("Resolver should build");
    let resolved = resolver
        .resolve_for_url("https://example.com/")
        .expect("URL should parse")
        .expect("Shared backend should supply a proxy");
    assert_eq!(resolved.proxy_type(), ProxyType::Socks);
    assert_eq!(resolved.host(), "system-relay");

    let url = Url::parse("http://example.com/").expect("Test URL should parse");
    let candidates = system::shared()
        .candidates(&url)
        .expect("Backend should answer");
    assert_eq!(candidates, vec!["socks://system-relay:1080".to_string()]);
}
