//! Property tests for the canonical descriptor form

use proptest::prelude::*;
use proxyconf_client::{ProxyDescriptor, ProxyType, parse_proxy_entry};

fn scheme() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["http", "https", "ftp", "socks"])
}

fn host() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}(\\.[a-z][a-z0-9-]{0,10}){0,3}"
}

proptest! {
    #[test]
    fn canonical_form_round_trips(
        scheme in scheme(),
        host in host(),
        port in 1u16..,
        username in "[a-zA-Z0-9_.-]{1,12}",
        password in "[a-zA-Z0-9_.:-]{1,12}",
    ) {
        let entry = format!("{scheme}://{username}:{password}@{host}:{port}");
        let proxy = parse_proxy_entry(&entry, "http", "")
            .expect("Generated entry should parse")
            .expect("Generated entry should not be direct");

        prop_assert_eq!(proxy.proxy_type(), ProxyType::from_scheme(scheme));
        prop_assert_eq!(proxy.host(), host.as_str());
        prop_assert_eq!(proxy.port(), port);
        prop_assert_eq!(proxy.username(), Some(username.as_str()));
        prop_assert_eq!(proxy.password(), Some(password.as_str()));
        prop_assert_eq!(proxy.to_string(), entry);
    }

    #[test]
    fn display_then_parse_is_identity(
        scheme in scheme(),
        host in host(),
        port in any::<u16>(),
    ) {
        let proxy = ProxyDescriptor::new(ProxyType::from_scheme(scheme), &host)
            .expect("Generated host should be valid")
            .with_port(port);
        let reparsed: ProxyDescriptor = proxy.to_string().parse().expect("Canonical form should parse");
        prop_assert_eq!(reparsed, proxy);
    }
}
