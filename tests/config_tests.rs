// Config loading and validation tests

use stepcount::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[source]
path = "data/steps.json"

[session]
connect_on_start = false
read_timeout_secs = 10
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.source.path, "data/steps.json");
    assert!(!config.session.connect_on_start);
    assert_eq!(config.session.read_timeout_secs, 10);
}

#[test]
fn test_config_session_defaults_when_omitted() {
    let minimal = VALID_CONFIG
        .replace("[session]", "")
        .replace("connect_on_start = false", "")
        .replace("read_timeout_secs = 10", "");
    let config = AppConfig::load_from_str(&minimal).expect("valid");
    assert!(config.session.connect_on_start);
    assert_eq!(config.session.read_timeout_secs, 30);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_empty_source_path() {
    let bad = VALID_CONFIG.replace("path = \"data/steps.json\"", "path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("source.path"));
}

#[test]
fn test_config_validation_rejects_read_timeout_zero() {
    let bad = VALID_CONFIG.replace("read_timeout_secs = 10", "read_timeout_secs = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("read_timeout_secs"));
}

#[test]
fn test_config_rejects_missing_source_section() {
    let bad = VALID_CONFIG
        .replace("[source]", "")
        .replace("path = \"data/steps.json\"", "");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.source.path, "data/steps.json");
}
