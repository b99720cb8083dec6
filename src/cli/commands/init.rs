//! Init command implementation
//!
//! Writes a sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

const SAMPLE_CONFIG: &str = r#"# Pathogen Portal configuration

environment = "development"  # development | staging | production

[application]
log_level = "info"

[gateway]
base_url = "http://localhost:8080"
# Bearer token, usually injected from the environment or a .env file
auth_token = "${PORTAL_GATEWAY_TOKEN}"
timeout_seconds = 60
tls_verify = true

[gateway.endpoints]
nominal = "/api/ng/notification/pathogen"
non_nominal = "/api/ng/notification/pathogen/7.3/non_nominal"
follow_up = "/api/ng/notification/pathogen/7.1/follow_up"

[features]
FEATURE_FLAG_PORTAL_PASTEBOX = true

[receipt]
output_dir = "receipts"

[logging]
local_enabled = false
local_path = "/var/log/pathogen-portal"
local_rotation = "daily"  # daily | hourly
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "portal.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, SAMPLE_CONFIG) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set gateway.base_url to your notification gateway");
                println!("  2. Put PORTAL_GATEWAY_TOKEN into the environment or a .env file");
                println!("  3. Validate configuration: pathogen-portal validate-config");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}
