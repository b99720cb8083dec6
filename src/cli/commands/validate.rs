//! Validate config command implementation

use crate::config::load_config;
use crate::domain::NotificationType;
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let token = match &config.gateway.auth_token {
            Some(token) if !token.expose_secret().is_empty() => "configured",
            _ => "not set",
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Environment: {:?}", config.environment);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Gateway: {}", config.gateway.base_url);
        println!("  Gateway Token: {token}");
        println!("  Timeout: {}s", config.gateway.timeout_seconds);
        for notification_type in [
            NotificationType::Nominal,
            NotificationType::NonNominal,
            NotificationType::FollowUp,
        ] {
            println!(
                "  Endpoint {}: {}",
                notification_type,
                config.gateway.url_for(notification_type)
            );
        }
        println!("  Receipts: {}", config.receipt.output_dir);
        if !config.features.is_empty() {
            println!("  Features:");
            for (name, enabled) in config.features.iter() {
                println!("    {name}: {enabled}");
            }
        }
        println!();

        Ok(0)
    }
}
