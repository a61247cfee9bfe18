use proxyconf_client::{ConfigurationValidator, ProxyResolver, ResolverConfig};

#[test]
fn test_defaults() {
    let config = ResolverConfig::default();
    assert!(config.use_environment);
    for scheme in ["app", "ti", "file"] {
        assert!(config.is_local_scheme(scheme));
    }
    assert!(!config.is_local_scheme("http"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_json_fills_missing_fields() {
    let config = ResolverConfig::from_json(r#"{ "use_environment": false }"#)
        .expect("Configuration should load");
    assert!(!config.use_environment);
    assert!(config.is_local_scheme("file"));
    assert_eq!(config.system_proxy_list, None);
}

#[test]
fn test_from_json_replaces_local_schemes() {
    let config = ResolverConfig::from_json(
        r#"{
            "local_schemes": ["app", "chrome-extension"],
            "system_proxy_list": "http=proxy:80;https=proxy:443",
            "system_bypass_list": "<local>;*.corp.example.com"
        }"#,
    )
    .expect("Configuration should load");
    assert!(config.is_local_scheme("chrome-extension"));
    assert!(!config.is_local_scheme("file"));
    assert!(config.static_backend().expect("Lists should parse").is_some());
}

#[test]
fn test_from_json_rejects_bad_input() {
    let err = ResolverConfig::from_json("{ not json").expect_err("JSON should be rejected");
    assert!(err.is_configuration());

    let err = ResolverConfig::from_json(r#"{ "local_schemes": ["App"] }"#)
        .expect_err("Uppercase scheme should be rejected");
    assert!(err.is_configuration());

    let result = ResolverConfig::from_json(r#"{ "system_bypass_list": "localhost;  ;" }"#);
    assert!(result.is_ok(), "blank bypass tokens are skipped");
}

#[test]
fn test_builder_validates_config() {
    let config = ResolverConfig::default().with_local_scheme("not a scheme");
    let err = ProxyResolver::builder()
        .config(config)
        .build()
        .expect_err("Invalid configuration should be rejected");
    assert!(err.is_configuration());
}

#[test]
fn test_round_trips_through_json() {
    let config = ResolverConfig {
        system_proxy_list: Some("socks=relay:1080".to_string()),
        ..ResolverConfig::default()
    };
    let json = serde_json::to_string(&config).expect("Configuration should serialize");
    assert_eq!(
        ResolverConfig::from_json(&json).expect("Configuration should load"),
        config
    );
}
