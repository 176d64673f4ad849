use std::collections::HashMap;
use std::path::PathBuf;

use bedbet_client::config::{ClientConfig, DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT};
use pretty_assertions::assert_eq;
use tracing::Level;

fn load(vars: &[(&str, &str)]) -> eyre::Result<ClientConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ClientConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = load(&[]).expect("defaults load");

    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.token_path, None);
    assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_custom_values() {
    let config = load(&[
        ("BEDBET_API_BASE", "http://localhost:8000/api/"),
        ("BEDBET_TOKEN_PATH", "/tmp/bedbet/token"),
        ("BEDBET_REQUEST_TIMEOUT_SECONDS", "5"),
        ("LOG_LEVEL", "debug"),
    ])
    .expect("custom values load");

    assert_eq!(config.api_base, "http://localhost:8000/api");
    assert_eq!(config.token_path, Some(PathBuf::from("/tmp/bedbet/token")));
    assert_eq!(config.request_timeout, 5);
    assert_eq!(config.log_level, Level::DEBUG);
}

#[test]
fn test_bad_timeout_falls_back() {
    let config = load(&[("BEDBET_REQUEST_TIMEOUT_SECONDS", "soon")]).expect("config loads");

    assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
}

#[test]
fn test_zero_timeout_falls_back() {
    let config = load(&[("BEDBET_REQUEST_TIMEOUT_SECONDS", "0")]).expect("config loads");

    assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
}

#[test]
fn test_base_must_be_http() {
    assert!(load(&[("BEDBET_API_BASE", "bedbet.knpu.re.kr/api")]).is_err());
}

#[test]
fn test_blank_token_path_means_memory() {
    let config = load(&[("BEDBET_TOKEN_PATH", "  ")]).expect("config loads");

    assert_eq!(config.token_path, None);
}

#[test]
fn test_endpoint_joins_paths() {
    let config = load(&[("BEDBET_API_BASE", "http://localhost:8000/api")]).expect("config loads");

    assert_eq!(config.endpoint("/team/list"), "http://localhost:8000/api/team/list");
    assert_eq!(config.endpoint("user/info"), "http://localhost:8000/api/user/info");
}
