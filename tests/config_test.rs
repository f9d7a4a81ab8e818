//! Config file tests

use portfolio_common::contact::ENDPOINT_ENV;
use portfolio_site::config::{validate_http_url, Config, DEFAULT_BASE_URL};
use portfolio_site::error::SiteError;
use serial_test::serial;
use tempfile::tempdir;

/// Missing file falls back to defaults
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

/// Save then load returns the same settings
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_endpoint("https://forms.example.com/f/abc".into()).unwrap();
    config.set_base_url("https://example.com/".into()).unwrap();
    config.save_to(&path).expect("save failed");

    let loaded = Config::load_from(&path).expect("load failed");
    assert_eq!(loaded.contact_endpoint.as_deref(), Some("https://forms.example.com/f/abc"));
    assert_eq!(loaded.base_url, "https://example.com");
}

/// Fields missing from the file take their defaults
#[test]
fn test_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeoutSeconds": 3, "timeout_seconds": 7}"#).unwrap();

    let config = Config::load_from(&path).expect("load failed");
    assert_eq!(config.timeout_seconds, 7);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

/// Broken JSON is an error, not silently ignored
#[test]
fn test_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ nope").unwrap();

    assert!(matches!(Config::load_from(&path), Err(SiteError::Json(_))));
}

/// Only http(s) URLs are accepted
#[test]
fn test_reject_non_http_endpoint() {
    let mut config = Config::default();
    let result = config.set_endpoint("ftp://example.com".into());
    assert!(matches!(result, Err(SiteError::Config(_))));
    assert_eq!(config, Config::default());
}

/// A scheme with nothing after it is not a URL
#[test]
fn test_reject_bare_scheme() {
    assert!(validate_http_url("https://").is_err());
    assert!(validate_http_url(" http://forms.example.com/f/x ").is_ok());
}

/// Zero timeout in the file is refused at load
#[test]
fn test_reject_zero_timeout() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 0}"#).unwrap();

    assert!(matches!(Config::load_from(&path), Err(SiteError::Config(_))));
}

/// Hand-edited endpoint is checked at load
#[test]
fn test_reject_bad_endpoint_in_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"contact_endpoint": "mailto:someone@example.com"}"#).unwrap();

    assert!(matches!(Config::load_from(&path), Err(SiteError::Config(_))));
}

/// No endpoint anywhere means none, not a built-in default
#[test]
#[serial]
fn test_endpoint_unset() {
    std::env::remove_var(ENDPOINT_ENV);
    assert_eq!(Config::default().endpoint().unwrap(), None);
}

/// Environment variable wins over the file
#[test]
#[serial]
fn test_endpoint_env_override() {
    let mut config = Config::default();
    config.set_endpoint("https://forms.example.com/f/file".into()).unwrap();

    std::env::set_var(ENDPOINT_ENV, " https://forms.example.com/f/env ");
    let endpoint = config.endpoint();
    std::env::remove_var(ENDPOINT_ENV);

    assert_eq!(endpoint.unwrap().as_deref(), Some("https://forms.example.com/f/env"));
}

/// Blank variable falls back to the file value
#[test]
#[serial]
fn test_endpoint_env_blank() {
    let mut config = Config::default();
    config.set_endpoint("https://forms.example.com/f/file".into()).unwrap();

    std::env::set_var(ENDPOINT_ENV, "   ");
    let endpoint = config.endpoint();
    std::env::remove_var(ENDPOINT_ENV);

    assert_eq!(endpoint.unwrap().as_deref(), Some("https://forms.example.com/f/file"));
}

/// A malformed variable is a config error naming the variable
#[test]
#[serial]
fn test_endpoint_env_invalid() {
    std::env::set_var(ENDPOINT_ENV, "forms.example.com/f/env");
    let endpoint = Config::default().endpoint();
    std::env::remove_var(ENDPOINT_ENV);

    match endpoint {
        Err(SiteError::Config(msg)) => assert!(msg.contains(ENDPOINT_ENV)),
        other => panic!("expected config error, got {:?}", other),
    }
}
