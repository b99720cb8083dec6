//! Configuration management for the portal core.
//!
//! Replaces the global runtime environment of the web portal with an explicit
//! value: loaded once at process start from TOML, validated, and then handed
//! to every component that needs it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pathogen_portal::config::load_config;
//! use pathogen_portal::domain::NotificationType;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("portal.toml")?;
//! println!("Nominal endpoint: {}", config.gateway.url_for(NotificationType::Nominal));
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "production"
//!
//! [application]
//! log_level = "info"
//!
//! [gateway]
//! base_url = "https://portal.example.org/gateway"
//! auth_token = "${PORTAL_GATEWAY_TOKEN}"
//! timeout_seconds = 60
//!
//! [gateway.endpoints]
//! nominal = "/api/ng/notification/pathogen"
//! non_nominal = "/api/ng/notification/pathogen/7.3/non_nominal"
//! follow_up = "/api/ng/notification/pathogen/7.1/follow_up"
//!
//! [features]
//! FEATURE_FLAG_PORTAL_PASTEBOX = true
//!
//! [receipt]
//! output_dir = "receipts"
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders are substituted before parsing, and
//! `PORTAL_<SECTION>_<KEY>` variables override parsed values.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, EndpointConfig, Environment, FeatureFlags, GatewayConfig, LoggingConfig,
    PortalConfig, ReceiptConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
