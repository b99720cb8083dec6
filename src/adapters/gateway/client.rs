//! HTTP gateway client
//!
//! [`GatewayClient`] is the `reqwest` backed [`NotificationTransport`].

use super::{NotificationTransport, SubmissionResponse};
use crate::config::{GatewayConfig, SecretString};
use crate::domain::{ErrorBody, PortalError, Result, TransportError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Notification gateway client
///
/// # Example
///
/// ```no_run
/// use pathogen_portal::adapters::gateway::{GatewayClient, NotificationTransport};
/// use pathogen_portal::config::GatewayConfig;
/// use pathogen_portal::domain::NotificationType;
///
/// # async fn example() -> pathogen_portal::domain::Result<()> {
/// let config = GatewayConfig::default();
/// let client = GatewayClient::new(&config)?;
///
/// let url = config.url_for(NotificationType::Nominal);
/// let response = client.post(&url, &serde_json::json!({})).await?;
/// println!("{}", response.notification_id);
/// # Ok(())
/// # }
/// ```
pub struct GatewayClient {
    client: Client,
    auth_token: Option<SecretString>,
}

impl GatewayClient {
    /// Builds the HTTP client from gateway configuration
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds.min(30)));

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification is disabled for the gateway");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|e| {
            PortalError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            auth_token: config.auth_token.clone(),
        })
    }

    fn auth_header_value(&self) -> Option<String> {
        self.auth_token
            .as_ref()
            .filter(|token| !token.expose_secret().is_empty())
            .map(|token| format!("Bearer {}", token.expose_secret().as_ref()))
    }
}

/// Decodes a failure body; plain text becomes the `message`
fn parse_error_body(text: &str) -> ErrorBody {
    serde_json::from_str::<ErrorBody>(text).unwrap_or_else(|_| ErrorBody {
        validation_errors: None,
        message: Some(text.trim().to_string()).filter(|m| !m.is_empty()),
    })
}

#[async_trait]
impl NotificationTransport for GatewayClient {
    async fn post(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> std::result::Result<SubmissionResponse, TransportError> {
        tracing::debug!(url = %url, "Posting notification to gateway");

        let mut request = self.client.post(url).json(payload);
        if let Some(auth) = self.auth_header_value() {
            request = request.header("Authorization", auth);
        }

        let resp = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::ConnectionFailed(format!("request timed out: {e}"))
            } else {
                TransportError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Gateway rejected notification");
            return Err(TransportError::Http {
                status: status.as_u16(),
                body: parse_error_body(&text),
            });
        }

        resp.json::<SubmissionResponse>()
            .await
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))
    }
}
