use gcp_log::{Logger, LoggerConfig, Severity};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HostConfig {
    service: String,
    #[serde(default)]
    logging: LoggerConfig,
}

#[test]
fn test_embedded_in_host_toml() {
    let raw = r#"
service = "ingest"

[logging]
severity = "ERROR"
"#;
    let config: HostConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.service, "ingest");
    assert_eq!(Logger::from_config(&config.logging).severity(), Severity::Error);
}

#[test]
fn test_missing_logging_table_defaults() {
    let config: HostConfig = toml::from_str(r#"service = "ingest""#).unwrap();
    assert_eq!(Logger::from(&config.logging).severity(), Severity::Default);
}

#[test]
fn test_empty_logging_table_defaults() {
    let config: HostConfig = toml::from_str("service = \"x\"\n[logging]\n").unwrap();
    assert_eq!(config.logging.severity, Severity::Default);
}

#[test]
fn test_lowercase_token_rejected() {
    let raw = "service = \"x\"\n[logging]\nseverity = \"error\"\n";
    assert!(toml::from_str::<HostConfig>(raw).is_err());
}
