use proxyconf_client::proxy::environment::MapEnvironment;
use proxyconf_client::{BypassList, Url, parse_bypass_entry, should_bypass};

fn url(s: &str) -> Url {
    Url::parse(s).expect("Test URL should parse correctly")
}

fn patterns(entries: &[&str]) -> Vec<Option<proxyconf_client::BypassPattern>> {
    entries
        .iter()
        .map(|entry| parse_bypass_entry(entry).expect("Bypass entry should parse"))
        .collect()
}

#[test]
fn test_local_token() {
    let list = patterns(&["<local>"]);
    assert!(should_bypass(&url("http://myhost/"), &list));
    assert!(!should_bypass(&url("http://myhost.example.com/"), &list));
}

#[test]
fn test_wildcard_suffix() {
    let list = patterns(&["*.example.com"]);
    assert!(should_bypass(&url("http://www.example.com/"), &list));
    assert!(!should_bypass(&url("http://example.com/"), &list));
}

#[test]
fn test_lone_wildcard_bypasses_everything() {
    assert_eq!(parse_bypass_entry("*").expect("Wildcard should parse"), None);
    assert!(should_bypass(&url("https://anything.example.org:9999/"), &[None]));
}

#[test]
fn test_suffix_match_is_not_dot_aware() {
    let list = patterns(&["example.com"]);
    assert!(should_bypass(&url("http://notexample.com/"), &list));
}

#[test]
fn test_scheme_and_port_constraints() {
    let list = patterns(&["https://example.com", "internal.corp:8080"]);
    assert!(should_bypass(&url("https://www.example.com/"), &list));
    assert!(!should_bypass(&url("http://www.example.com/"), &list));
    assert!(should_bypass(&url("http://api.internal.corp:8080/"), &list));
    assert!(!should_bypass(&url("http://api.internal.corp/"), &list));
}

#[test]
fn test_host_case_is_ignored() {
    let list = patterns(&["*.Example.COM"]);
    assert!(should_bypass(&url("http://WWW.EXAMPLE.COM/"), &list));
}

#[test]
fn test_empty_list_never_bypasses() {
    assert!(!should_bypass(&url("http://myhost/"), &[]));
    assert!(!BypassList::new().matches(&url("http://myhost/")));
}

#[test]
fn test_list_from_environment() {
    let env = MapEnvironment::new().with("no_proxy", "localhost,.internal");
    let list = BypassList::from_env(&env).expect("no_proxy should be read");
    assert_eq!(list.len(), 2);
    assert!(list.matches(&url("http://db.internal/")));

    let env = MapEnvironment::new()
        .with("NO_PROXY", "*")
        .with("no_proxy", "localhost");
    let list = BypassList::from_env(&env).expect("NO_PROXY should be read");
    assert!(list.matches(&url("http://example.org/")));

    assert_eq!(BypassList::from_env(&MapEnvironment::new()), None);
}
