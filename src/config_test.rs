use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    assert_eq!(config.api_upstream, None);
}

#[test]
fn reads_every_variable() {
    let config = HostConfig::from_lookup(lookup(&[
        ("PORT", "9000"),
        ("PROCESSMART_DIST_DIR", "/srv/processmart"),
        ("PROCESSMART_API_UPSTREAM", "http://backend:8000/api/"),
    ]))
    .unwrap();
    assert_eq!(config.port, 9000);
    assert_eq!(config.dist_dir, PathBuf::from("/srv/processmart"));
    assert_eq!(config.api_upstream.as_deref(), Some("http://backend:8000/api"));
    assert_eq!(config.bind_addr().port(), 9000);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("PROCESSMART_API_UPSTREAM", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api_upstream, None);
}

#[test]
fn rejects_bad_port() {
    for raw in ["abc", "70000", "-1"] {
        assert_eq!(
            HostConfig::from_lookup(lookup(&[("PORT", raw)])),
            Err(ConfigError::InvalidPort(raw.to_owned())),
            "{raw}"
        );
    }
}

#[test]
fn rejects_non_http_upstream() {
    assert_eq!(
        HostConfig::from_lookup(lookup(&[("PROCESSMART_API_UPSTREAM", "backend:8000")])),
        Err(ConfigError::InvalidUpstream("backend:8000".to_owned()))
    );
}

