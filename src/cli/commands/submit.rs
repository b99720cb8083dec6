//! Submit command implementation
//!
//! Submits a JSON form model through the gateway client and prints the
//! outcome through the console dialog.

use crate::adapters::dialog::ConsoleDialog;
use crate::adapters::gateway::GatewayClient;
use crate::config::load_config;
use crate::core::submission::SubmissionPipeline;
use crate::domain::{NotificationType, PathogenNotification};
use anyhow::Context;
use clap::Args;
use std::sync::Arc;

/// Arguments for the submit command
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// JSON file holding the filled notification
    #[arg(short, long)]
    pub payload: String,

    /// Notification type to submit as
    #[arg(short = 't', long, default_value = "nominal")]
    pub notification_type: NotificationType,
}

impl SubmitArgs {
    /// Execute the submit command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config(config_path)
            .with_context(|| format!("Failed to load configuration from {config_path}"))?;

        let content = std::fs::read_to_string(&self.payload)
            .with_context(|| format!("Failed to read payload {}", self.payload))?;
        let notification: PathogenNotification = serde_json::from_str(&content)
            .with_context(|| format!("Invalid notification in {}", self.payload))?;

        let transport = Arc::new(GatewayClient::new(&config.gateway)?);
        let dialog = Arc::new(ConsoleDialog::new(&config.receipt));
        let pipeline = SubmissionPipeline::new(transport, dialog, config.gateway.clone());

        let outcome = pipeline
            .submit_notification(&notification, self.notification_type)
            .await?;

        Ok(if outcome.is_success() { 0 } else { 1 })
    }
}
