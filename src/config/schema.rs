//! Configuration schema types
//!
//! Loaded once at process start and passed by value or reference into every
//! component that needs it. Nothing mutates it after loading.

use crate::config::SecretString;
use crate::domain::NotificationType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main portal configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Notification gateway
    pub gateway: GatewayConfig,

    /// Opaque feature flags
    #[serde(default)]
    pub features: FeatureFlags,

    /// Receipt output settings
    #[serde(default)]
    pub receipt: ReceiptConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PortalConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.gateway.validate(&self.environment)?;
        self.receipt.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Notification gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the notification gateway
    pub base_url: String,

    /// Bearer token sent with every request (optional)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub auth_token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// **SECURITY WARNING**: must stay `true` in production (enforced by
    /// validation).
    #[serde(default = "default_true")]
    pub tls_verify: bool,

    /// Endpoint path per notification type
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

impl GatewayConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("gateway.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("gateway.base_url must start with http:// or https://".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("gateway.timeout_seconds must be > 0".to_string());
        }

        if *environment == Environment::Production && !self.tls_verify {
            return Err(
                "TLS certificate verification cannot be disabled in production environments"
                    .to_string(),
            );
        }

        self.endpoints.validate()
    }

    /// Full URL the given notification type is posted to
    ///
    /// # Examples
    ///
    /// ```
    /// use pathogen_portal::config::GatewayConfig;
    /// use pathogen_portal::domain::NotificationType;
    ///
    /// let gateway = GatewayConfig {
    ///     base_url: "https://portal.example.org/".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     gateway.url_for(NotificationType::Nominal),
    ///     "https://portal.example.org/api/ng/notification/pathogen"
    /// );
    /// ```
    pub fn url_for(&self, notification_type: NotificationType) -> String {
        let path = self.endpoints.path_for(notification_type);
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            auth_token: None,
            timeout_seconds: default_timeout_seconds(),
            tls_verify: true,
            endpoints: EndpointConfig::default(),
        }
    }
}

/// Endpoint paths, relative to the gateway base URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_nominal_endpoint")]
    pub nominal: String,

    #[serde(default = "default_non_nominal_endpoint")]
    pub non_nominal: String,

    #[serde(default = "default_follow_up_endpoint")]
    pub follow_up: String,
}

impl EndpointConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, path) in [
            ("nominal", &self.nominal),
            ("non_nominal", &self.non_nominal),
            ("follow_up", &self.follow_up),
        ] {
            if path.trim().is_empty() {
                return Err(format!("gateway.endpoints.{name} cannot be empty"));
            }
        }
        Ok(())
    }

    pub fn path_for(&self, notification_type: NotificationType) -> &str {
        match notification_type {
            NotificationType::Nominal => &self.nominal,
            NotificationType::NonNominal => &self.non_nominal,
            NotificationType::FollowUp => &self.follow_up,
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            nominal: default_nominal_endpoint(),
            non_nominal: default_non_nominal_endpoint(),
            follow_up: default_follow_up_endpoint(),
        }
    }
}

/// Feature flags supplied by the deployment
///
/// The core treats them as opaque; unknown flags read as disabled.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FeatureFlags(BTreeMap<String, bool>);

impl FeatureFlags {
    pub fn is_enabled(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }

    pub fn set(&mut self, name: impl Into<String>, enabled: bool) {
        self.0.insert(name.into(), enabled);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Receipt output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptConfig {
    /// Directory receipts are written to
    #[serde(default = "default_receipt_dir")]
    pub output_dir: String,
}

impl ReceiptConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("receipt.output_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            output_dir: default_receipt_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }

    /// Console-only logging, used by the CLI before a config is loaded
    pub fn console_only() -> Self {
        Self {
            local_enabled: false,
            local_path: String::new(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_nominal_endpoint() -> String {
    "/api/ng/notification/pathogen".to_string()
}

fn default_non_nominal_endpoint() -> String {
    "/api/ng/notification/pathogen/7.3/non_nominal".to_string()
}

fn default_follow_up_endpoint() -> String {
    "/api/ng/notification/pathogen/7.1/follow_up".to_string()
}

fn default_receipt_dir() -> String {
    "receipts".to_string()
}

fn default_local_path() -> String {
    "/var/log/pathogen-portal".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
