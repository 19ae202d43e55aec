//! Tests for configuration module.

use super::*;

fn settings(max_cap: usize) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8698,
            serve_origin: None,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
        },
        expansion: ExpansionConfig { max_cap },
    }
}

#[test_log::test]
fn test_load_defaults() {
    let settings = Settings::load().expect("defaults should load");

    tracing::debug!(?settings, "Loaded default settings");

    assert!(!settings.server.host.is_empty());
    assert!(settings.expansion.max_cap >= 1);
}

#[test]
fn test_server_bind_addr() {
    let settings = settings(10);
    assert_eq!(settings.server.bind_addr(), "127.0.0.1:8698");
}

#[test]
fn test_server_origin_override() {
    let mut settings = settings(10);
    assert_eq!(settings.server.origin(), "http://127.0.0.1:8698");

    settings.server.serve_origin = Some("https://facilities.example.com".to_string());
    assert_eq!(settings.server.origin(), "https://facilities.example.com");
}

#[test]
fn test_check_rejects_zero_cap() {
    let err = settings(0).check().expect_err("zero cap is invalid");
    assert!(matches!(err, CoreError::InvalidInput(_)));
}

#[test]
fn test_check_accepts_positive_cap() {
    assert!(settings(1).check().is_ok());
}

#[test]
fn test_settings_debug() {
    let debug_str = format!("{:?}", settings(5));
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("expansion"));
    assert!(debug_str.contains("max_cap: 5"));
}
