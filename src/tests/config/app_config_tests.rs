//! Tests for AppConfig parsing and loading.

use std::path::Path;

use crate::{AppConfig, ConfigError, ConfigFormat, ErrorPolicy, SinkConfig};

#[test]
fn defaults_render_hello_world_into_message() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.message, "Hello World");
    assert_eq!(cfg.target, "message");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.sinks.is_empty());
    assert_eq!(cfg.error_policy().unwrap(), ErrorPolicy::Accumulate);
}

#[test]
fn format_is_inferred_from_extension() {
    assert_eq!(ConfigFormat::from_path(Path::new("a.json")), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_path(Path::new("a.YML")), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), Some(ConfigFormat::Toml));
    assert_eq!(ConfigFormat::from_path(Path::new("a.ini")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("noext")), None);
}

#[test]
fn error_policy_strings_are_parsed() {
    let cfg = AppConfig::new().with_error_policy("fast_fail");
    assert_eq!(cfg.error_policy().unwrap(), ErrorPolicy::FastFail);

    let cfg = AppConfig::new().with_error_policy("whenever");
    assert!(matches!(cfg.error_policy(), Err(ConfigError::InvalidPolicy(p)) if p == "whenever"));
}

#[test]
fn load_rejects_unknown_extension() {
    let err = AppConfig::load("settings.ini").unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[cfg(feature = "json")]
#[test]
fn parse_json_with_partial_fields() {
    let json = r#"{
        "target": "banner",
        "sinks": [
            { "id": "banner", "kind": "stdout" },
            { "id": "copy", "kind": "file", "path": "copy.txt" }
        ]
    }"#;

    let cfg = AppConfig::parse(json, ConfigFormat::Json).unwrap();

    assert_eq!(cfg.message, "Hello World");
    assert_eq!(cfg.target, "banner");
    assert_eq!(
        cfg.sinks,
        vec![
            SinkConfig::new("banner", "stdout"),
            SinkConfig::new("copy", "file").with_path("copy.txt"),
        ]
    );
}

#[cfg(feature = "json")]
#[test]
fn load_json_from_disk_and_report_parse_errors_with_path() {
    let dir = tempfile::tempdir().expect("tempdir");

    let good = dir.path().join("app.json");
    std::fs::write(&good, r#"{ "message": "Hi" }"#).unwrap();
    assert_eq!(AppConfig::load(&good).unwrap().message, "Hi");

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    match AppConfig::load(&bad).unwrap_err() {
        ConfigError::Parse { path, .. } => assert!(path.ends_with("bad.json")),
        other => panic!("unexpected error: {other}"),
    }

    let missing = dir.path().join("missing.json");
    assert!(matches!(AppConfig::load(&missing), Err(ConfigError::Read { .. })));
}

#[cfg(feature = "yaml")]
#[test]
fn parse_yaml_config() {
    let yaml = r#"
message: Hello from YAML
error_policy: fast_fail
sinks:
  - id: message
    kind: stderr
"#;

    let cfg = AppConfig::parse(yaml, ConfigFormat::Yaml).unwrap();
    assert_eq!(cfg.message, "Hello from YAML");
    assert_eq!(cfg.error_policy().unwrap(), ErrorPolicy::FastFail);
    assert_eq!(cfg.sinks[0].kind, "stderr");
}

#[cfg(feature = "toml")]
#[test]
fn parse_toml_config() {
    let toml = r#"
log_level = "debug"

[[sinks]]
id = "message"
kind = "memory"
"#;

    let cfg = AppConfig::parse(toml, ConfigFormat::Toml).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.sinks, vec![SinkConfig::new("message", "memory")]);
}

#[cfg(not(feature = "yaml"))]
#[test]
fn yaml_without_feature_is_unsupported() {
    let err = AppConfig::parse("message: x", ConfigFormat::Yaml).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(f) if f == "yaml"));
}
