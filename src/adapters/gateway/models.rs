//! Gateway response models

use serde::{Deserialize, Serialize};

/// Successful submission answer of the notification gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    /// Base64 encoded receipt PDF
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub notification_id: String,

    #[serde(default)]
    pub author_email: String,

    #[serde(default)]
    pub author_name: String,

    #[serde(default)]
    pub timestamp: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
