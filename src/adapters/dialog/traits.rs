//! Dialog collaborator trait
//!
//! The presentation layer that shows spinners, receipts and errors to the
//! user. The core only ever talks to it through [`DialogService`], so any
//! host (a web shell, a desktop app, the CLI) can plug in its own.

use crate::domain::TransportError;
use async_trait::async_trait;
use serde::Serialize;

/// A single line in the error dialog
///
/// `query_string` is what the host may use to locate the offending field.
/// The portal currently fills it with the message itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogError {
    pub text: String,
    pub query_string: String,
}

impl DialogError {
    /// Entry whose text and query string are both `message`
    pub fn from_message(message: impl Into<String>) -> Self {
        let text = message.into();
        Self {
            query_string: text.clone(),
            text,
        }
    }
}

/// Content of the error dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDialogData {
    pub title: String,
    pub errors: Vec<DialogError>,
    pub redirect_to_home: bool,
}

/// Content of the submit (receipt) dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitDialogData {
    pub author_email: String,
    pub notification_id: String,
    pub timestamp: String,
    /// Download reference for the receipt
    pub href: String,
    pub file_name: String,
    /// Decoded receipt PDF
    pub receipt_content: Vec<u8>,
}

/// Trait for dialog implementations
///
/// Presentation failures are the implementation's concern; none of these
/// calls can fail a submission or an import.
#[async_trait]
pub trait DialogService: Send + Sync {
    /// Show a busy indicator while a request is in flight
    async fn show_spinner_dialog(&self);

    /// Close the busy indicator
    async fn close_spinner_dialog(&self);

    /// Present a delivered notification and its receipt
    async fn show_submit_dialog(&self, data: SubmitDialogData);

    /// Present a failed submission
    async fn show_error_dialog(&self, data: ErrorDialogData);

    /// Present the "clipboard content is not importable" error
    async fn show_error_dialog_insert_data_from_clipboard(&self);

    /// Reduces a transport failure to one user-facing message
    ///
    /// The default prefers the gateway's own `message` and falls back to the
    /// error's display text.
    fn extract_message_from_error(&self, error: &TransportError) -> String {
        error
            .body()
            .and_then(|body| body.message.as_deref())
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string())
    }
}
