//! Transport trait definition

use super::SubmissionResponse;
use crate::domain::TransportError;
use async_trait::async_trait;

/// Trait for notification transports
///
/// Posts a JSON notification to the gateway and returns its receipt. A
/// non-success answer is reported as [`TransportError::Http`] carrying the
/// decoded error body, so callers never see the HTTP client's own types.
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> Result<SubmissionResponse, TransportError>;
}
