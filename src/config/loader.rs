//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PortalConfig;
use super::secret::secret_string;
use crate::domain::errors::PortalError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PortalConfig
/// 4. Applies environment variable overrides (PORTAL_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use pathogen_portal::config::loader::load_config;
///
/// let config = load_config("portal.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PortalConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PortalError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PortalError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
///
/// Same pipeline as [`load_config`] minus the file access.
pub fn parse_config(contents: &str) -> Result<PortalConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: PortalConfig = toml::from_str(&contents)
        .map_err(|e| PortalError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        PortalError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(
        base_url = %config.gateway.base_url,
        features = config.features.iter().count(),
        "Configuration loaded"
    );

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PortalError::Other(format!("Invalid placeholder pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        // Placeholders in comments are left alone
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PortalError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using PORTAL_* prefix
///
/// Environment variables follow the pattern: PORTAL_<SECTION>_<KEY>
/// For example: PORTAL_GATEWAY_BASE_URL, PORTAL_APPLICATION_LOG_LEVEL
fn apply_env_overrides(config: &mut PortalConfig) {
    if let Ok(val) = std::env::var("PORTAL_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Gateway overrides
    if let Ok(val) = std::env::var("PORTAL_GATEWAY_BASE_URL") {
        config.gateway.base_url = val;
    }
    if let Ok(val) = std::env::var("PORTAL_GATEWAY_AUTH_TOKEN") {
        config.gateway.auth_token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("PORTAL_GATEWAY_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.gateway.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("PORTAL_GATEWAY_TLS_VERIFY") {
        config.gateway.tls_verify = val.parse().unwrap_or(true);
    }

    if let Ok(val) = std::env::var("PORTAL_RECEIPT_OUTPUT_DIR") {
        config.receipt.output_dir = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PORTAL_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("PORTAL_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
