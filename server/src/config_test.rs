use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("ASSETS_DIR", "/srv/site/assets"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, Some(PathBuf::from("/srv/site/assets")));
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("ASSETS_DIR", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.assets_dir, None);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid { var: "PORT", value: "http".to_owned(), reason: "expected a port number" }
    );
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn from_lookup_rejects_bad_bind_addr() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(err.to_string().contains("BIND_ADDR"));
}
