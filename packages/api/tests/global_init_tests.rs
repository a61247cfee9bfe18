//! `init_global` must run before anything touches the global resolver, so
//! this file holds a single test.

use proxyconf::ResolverConfig;

#[test]
fn test_init_global_once() {
    let config = ResolverConfig::default()
        .with_local_scheme("data")
        .with_local_scheme("chrome");
    assert!(proxyconf::init_global(config).expect("Configuration should be valid"));
    assert!(proxyconf::global().config().is_local_scheme("chrome"));

    assert!(!proxyconf::init_global(ResolverConfig::default()).expect("Configuration should be valid"));
    assert!(proxyconf::global().config().is_local_scheme("chrome"));

    let err = proxyconf::init_global(ResolverConfig::default().with_local_scheme("Bad Scheme"))
        .expect_err("Invalid configuration should be rejected");
    assert!(err.is_configuration());

    assert_eq!(proxyconf::resolve("chrome://settings").expect("URL should parse"), None);
}
