use proxyconf_client::{ProxyType, parse_proxy_list};

fn describe(list: &str, url_scheme: &str) -> Vec<Option<String>> {
    parse_proxy_list(list, url_scheme)
        .expect("List should parse")
        .into_iter()
        .map(|proxy| proxy.map(|p| p.to_string()))
        .collect()
}

#[test]
fn test_scheme_qualified_entries_keep_order() {
    assert_eq!(
        describe("http=web:80; https=secure:443 ;; socks://s:1080", "ftp"),
        vec![
            Some("http://web:80".to_string()),
            Some("https://secure:443".to_string()),
            Some("socks://s:1080".to_string()),
        ]
    );
}

#[test]
fn test_direct_entries_stay_in_place() {
    assert_eq!(
        describe("direct; proxy:8080; http=direct", "https"),
        vec![None, Some("https://proxy:8080".to_string()), None]
    );
}

#[test]
fn test_whitespace_separates_entries() {
    let proxies = parse_proxy_list("proxy:8080 fallback:3128", "http").expect("List should parse");
    assert_eq!(proxies.len(), 2);
    assert!(
        proxies
            .iter()
            .flatten()
            .all(|p| p.proxy_type() == ProxyType::Http)
    );
}

#[test]
fn test_empty_list() {
    assert!(parse_proxy_list(" ; ;", "http").expect("List should parse").is_empty());
}

#[test]
fn test_entry_without_host_fails_the_list() {
    let err = parse_proxy_list("http=proxy:80; https=", "http").expect_err("List should be rejected");
    assert!(err.is_invalid_entry());
}
