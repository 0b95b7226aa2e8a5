use deskmate::config::{normalize_endpoint, FileConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_normalize_endpoint_full_url_unchanged() {
    assert_eq!(
        normalize_endpoint("https://openrouter.ai/api/v1/chat/completions"),
        "https://openrouter.ai/api/v1/chat/completions"
    );
}

#[test]
fn test_normalize_endpoint_v1_base() {
    assert_eq!(
        normalize_endpoint("http://localhost:11434/v1"),
        "http://localhost:11434/v1/chat/completions"
    );
}

#[test]
fn test_normalize_endpoint_v1_base_trailing_slash() {
    assert_eq!(
        normalize_endpoint("http://localhost:11434/v1/"),
        "http://localhost:11434/v1/chat/completions"
    );
}

#[test]
fn test_normalize_endpoint_bare_host() {
    assert_eq!(
        normalize_endpoint("https://api.moonshot.cn/"),
        "https://api.moonshot.cn/v1/chat/completions"
    );
}

#[test]
fn test_parse_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deskmate.yaml");
    fs::write(
        &path,
        r#"
api:
  endpoint: "http://localhost:11434/v1"
  request_timeout: 90
model:
  default_model: "openai/gpt-4-turbo-preview"
  temperature: 0.2
tools:
  news:
    page_size: 3
  weather:
    units: "imperial"
  messaging:
    enabled: false
"#,
    )
    .unwrap();

    let config = FileConfig::parse(&path).unwrap();

    assert_eq!(
        config.api.endpoint.as_deref(),
        Some("http://localhost:11434/v1")
    );
    assert_eq!(config.api.request_timeout, Some(90));
    assert_eq!(
        config.model.default_model.as_deref(),
        Some("openai/gpt-4-turbo-preview")
    );
    assert_eq!(config.model.temperature, Some(0.2));
    assert_eq!(config.tools.news.page_size, Some(3));
    assert_eq!(config.tools.weather.units.as_deref(), Some("imperial"));
    assert!(config.tools.weather.enabled);
    assert!(!config.tools.messaging.enabled);
    assert!(config.tools.enabled);
}

#[test]
fn test_parse_json_config_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deskmate.json");
    fs::write(
        &path,
        r#"{ "model": { "default_model": "openai/gpt-5" }, "tools": { "enabled": false } }"#,
    )
    .unwrap();

    let config = FileConfig::parse(&path).unwrap();

    assert_eq!(config.model.default_model.as_deref(), Some("openai/gpt-5"));
    assert!(!config.tools.enabled);
}

#[test]
fn test_parse_rejects_malformed_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deskmate.yaml");
    fs::write(&path, "api: [not: a: mapping").unwrap();

    assert!(FileConfig::parse(&path).is_err());
}

#[test]
fn test_defaults_when_sections_missing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deskmate.yaml");
    fs::write(&path, "model:\n  system_prompt: \"Be brief.\"\n").unwrap();

    let config = FileConfig::parse(&path).unwrap();

    assert_eq!(config.model.system_prompt.as_deref(), Some("Be brief."));
    assert!(config.tools.enabled);
    assert!(config.tools.stock.enabled);
    assert!(config.api.endpoint.is_none());
}
