use std::fs;

use crate::config::{Config, DEFAULT_API_BASE_URL, DEFAULT_IP_SERVICE_URL, DEFAULT_TIMEOUT_SECS};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    fs::write(&file, contents).unwrap();
    file
}

#[test]
fn test_config_from_yaml() {
    let file = write_config(
        r#"
            api_token: "file_token"
            api_base_url: "http://localhost:8080/client/v4"
            ip_service_url: "https://api.ipify.org"
            timeout_secs: 10
        "#,
    );

    let config = Config::resolve(Some(file.path()), None).unwrap();
    assert_eq!(config.api_token, "file_token");
    assert_eq!(config.api_base_url, "http://localhost:8080/client/v4");
    assert_eq!(config.ip_service_url, "https://api.ipify.org");
    assert_eq!(config.timeout_secs, 10);
}

#[test]
fn test_defaults_fill_missing_fields() {
    let file = write_config("api_token: \"file_token\"\n");

    let config = Config::resolve(Some(file.path()), None).unwrap();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.ip_service_url, DEFAULT_IP_SERVICE_URL);
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_env_token_overrides_file() {
    let file = write_config("api_token: \"file_token\"\n");

    let config = Config::resolve(Some(file.path()), Some("env_token".to_string())).unwrap();
    assert_eq!(config.api_token, "env_token");
}

#[test]
fn test_token_without_file() {
    let config = Config::resolve(None, Some("env_token".to_string())).unwrap();
    assert_eq!(config.api_token, "env_token");
    assert_eq!(config.timeout_secs, 60);
}

#[test]
fn test_missing_token_is_rejected() {
    assert!(Config::resolve(None, None).is_err());
    assert!(Config::resolve(None, Some(String::new())).is_err());
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config(
        r#"
            api_token: "file_token"
            timeout_secs: 0
        "#,
    );
    assert!(Config::resolve(Some(file.path()), None).is_err());

    let file = write_config(
        r#"
            api_token: "file_token"
            api_base_url: "not a url"
        "#,
    );
    assert!(Config::resolve(Some(file.path()), None).is_err());
}

#[test]
fn test_unreadable_config() {
    let file = write_config("api_token: [unterminated");
    assert!(Config::resolve(Some(file.path()), None).is_err());

    let missing = std::path::Path::new("/nonexistent/clouddns-sync.yaml");
    assert!(Config::resolve(Some(missing), None).is_err());
}

#[test]
fn test_debug_redacts_token() {
    let config = Config::resolve(None, Some("super_secret".to_string())).unwrap();
    let printed = format!("{:?}", config);

    assert!(!printed.contains("super_secret"));
    assert!(printed.contains("<REDACTED>"));
}
