//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` to avoid
//! interfering with each other.

use pathogen_portal::config::{load_config, Environment};
use pathogen_portal::domain::NotificationType;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    for var in [
        "PORTAL_APPLICATION_LOG_LEVEL",
        "PORTAL_GATEWAY_BASE_URL",
        "PORTAL_GATEWAY_AUTH_TOKEN",
        "PORTAL_GATEWAY_TIMEOUT_SECONDS",
        "PORTAL_GATEWAY_TLS_VERIFY",
        "PORTAL_RECEIPT_OUTPUT_DIR",
        "PORTAL_LOGGING_LOCAL_ENABLED",
        "PORTAL_LOGGING_LOCAL_PATH",
        "TEST_GATEWAY_TOKEN",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
environment = "staging"

[application]
log_level = "debug"

[gateway]
base_url = "https://gateway.example.org/"
auth_token = "token-123"
timeout_seconds = 15
tls_verify = true

[gateway.endpoints]
nominal = "/v2/nominal"
non_nominal = "/v2/non-nominal"
follow_up = "/v2/follow-up"

[features]
FEATURE_FLAG_PORTAL_PASTEBOX = true
FEATURE_FLAG_FOLLOW_UP = false

[receipt]
output_dir = "/tmp/receipts"

[logging]
local_enabled = false
local_path = "/tmp/portal-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.environment, Environment::Staging);
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.gateway.timeout_seconds, 15);
    assert_eq!(
        config.gateway.auth_token.as_ref().unwrap().expose_secret().as_ref(),
        "token-123"
    );
    assert_eq!(
        config.gateway.url_for(NotificationType::NonNominal),
        "https://gateway.example.org/v2/non-nominal"
    );
    assert!(config.features.is_enabled("FEATURE_FLAG_PORTAL_PASTEBOX"));
    assert!(!config.features.is_enabled("FEATURE_FLAG_FOLLOW_UP"));
    assert!(!config.features.is_enabled("FEATURE_FLAG_UNKNOWN"));
    assert_eq!(config.receipt.output_dir, "/tmp/receipts");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[gateway]
base_url = "http://localhost:9000"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.application.log_level, "info");
    assert!(config.gateway.auth_token.is_none());
    assert_eq!(config.gateway.timeout_seconds, 60);
    assert!(config.gateway.tls_verify);
    assert_eq!(
        config.gateway.url_for(NotificationType::Nominal),
        "http://localhost:9000/api/ng/notification/pathogen"
    );
    assert_eq!(
        config.gateway.url_for(NotificationType::FollowUp),
        "http://localhost:9000/api/ng/notification/pathogen/7.1/follow_up"
    );
    assert!(config.features.is_empty());
    assert_eq!(config.receipt.output_dir, "receipts");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_GATEWAY_TOKEN", "from-env");

    let file = write_config(
        r#"
[gateway]
base_url = "http://localhost:9000"
auth_token = "${TEST_GATEWAY_TOKEN}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.gateway.auth_token.as_ref().unwrap().expose_secret().as_ref(),
        "from-env"
    );

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[gateway]
base_url = "http://localhost:9000"
auth_token = "${TEST_GATEWAY_TOKEN}"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_GATEWAY_TOKEN"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("PORTAL_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("PORTAL_GATEWAY_BASE_URL", "https://override.example.org");
    std::env::set_var("PORTAL_GATEWAY_TIMEOUT_SECONDS", "5");
    std::env::set_var("PORTAL_RECEIPT_OUTPUT_DIR", "/srv/receipts");

    let file = write_config(
        r#"
[application]
log_level = "info"

[gateway]
base_url = "http://localhost:9000"
timeout_seconds = 30
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.gateway.base_url, "https://override.example.org");
    assert_eq!(config.gateway.timeout_seconds, 5);
    assert_eq!(config.receipt.output_dir, "/srv/receipts");

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let cases = [
        (
            "missing scheme",
            r#"
[gateway]
base_url = "gateway.example.org"
"#,
        ),
        (
            "zero timeout",
            r#"
[gateway]
base_url = "http://localhost"
timeout_seconds = 0
"#,
        ),
        (
            "tls disabled in production",
            r#"
environment = "production"

[gateway]
base_url = "https://gateway.example.org"
tls_verify = false
"#,
        ),
        (
            "unknown rotation",
            r#"
[gateway]
base_url = "http://localhost"

[logging]
local_rotation = "size"
"#,
        ),
    ];

    for (name, content) in cases {
        let file = write_config(content);
        assert!(load_config(file.path()).is_err(), "{name} should be rejected");
    }
}
