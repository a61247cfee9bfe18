use std::sync::Arc;
use std::thread;

use proxyconf_client::{
    MapEnvironment, NoSystemProxy, OverrideScheme, ProxyDescriptor, ProxyOverrides,
    ProxyResolver, ProxyType,
};

fn proxy(host: &str) -> ProxyDescriptor {
    ProxyDescriptor::new(ProxyType::Http, host)
        .expect("Test host should be valid")
        .with_port(8080)
}

fn resolver(overrides: &Arc<ProxyOverrides>) -> ProxyResolver {
    ProxyResolver::builder()
        .overrides(Arc::clone(overrides))
        .environment(MapEnvironment::new())
        .backend(NoSystemProxy)
        .build()
        .expect("Resolver should build")
}

#[test]
fn test_resolvers_share_override_slots() {
    let overrides = Arc::new(ProxyOverrides::new());
    let first = resolver(&overrides);
    let second = resolver(&overrides);

    first.set_override(OverrideScheme::Http, Some(proxy("shared")));
    assert_eq!(
        second.resolve_for_url("http://example.com/").expect("URL should parse"),
        Some(proxy("shared"))
    );

    overrides.clear();
    assert_eq!(
        first.resolve_for_url("http://example.com/").expect("URL should parse"),
        None
    );
}

#[test]
fn test_concurrent_set_and_resolve() {
    let overrides = Arc::new(ProxyOverrides::new());
    let resolver = resolver(&overrides);
    let candidates = [proxy("a.example.com"), proxy("b.example.com")];

    let writer = {
        let overrides = Arc::clone(&overrides);
        let candidates = candidates.clone();
        thread::spawn(move || {
            for i in 0..1000 {
                overrides.set_http(Some(candidates[i % 2].clone()));
            }
            overrides.set_http(None);
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let resolver = resolver.clone();
            let candidates = candidates.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    let resolved = resolver
                        .resolve_for_url("http://example.com/")
                        .expect("URL should parse");
                    if let Some(resolved) = resolved {
                        assert!(candidates.contains(&resolved));
                    }
                }
            })
        })
        .collect();

    writer.join().expect("Writer thread should not panic");
    for reader in readers {
        reader.join().expect("Reader thread should not panic");
    }
    assert_eq!(overrides.get_http(), None);
}
