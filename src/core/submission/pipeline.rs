//! Submission pipeline
//!
//! Sends a filled notification to the gateway and reports the result through
//! the dialog collaborator.

use super::filename::receipt_file_name;
use super::normalize::normalize_payload;
use super::outcome::{extract_error_details, Receipt, SubmissionOutcome};
use crate::adapters::dialog::{DialogError, DialogService, ErrorDialogData, SubmitDialogData};
use crate::adapters::gateway::{NotificationTransport, SubmissionResponse};
use crate::config::GatewayConfig;
use crate::domain::{NotificationType, PathogenNotification, PersonInfo, Result, TransportError};
use base64::{engine::general_purpose, Engine as _};
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;

/// Title of the error dialog for every failed submission
pub const SUBMISSION_ERROR_TITLE: &str = "Meldung konnte nicht zugestellt werden!";

const RECEIPT_MIME_TYPE: &str = "application/pdf";

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Submits notifications and presents their outcome
///
/// Holds no mutable state; one pipeline can serve any number of
/// submissions.
pub struct SubmissionPipeline {
    transport: Arc<dyn NotificationTransport>,
    dialog: Arc<dyn DialogService>,
    gateway: GatewayConfig,
    clock: fn() -> NaiveDateTime,
}

impl SubmissionPipeline {
    pub fn new(
        transport: Arc<dyn NotificationTransport>,
        dialog: Arc<dyn DialogService>,
        gateway: GatewayConfig,
    ) -> Self {
        Self {
            transport,
            dialog,
            gateway,
            clock: local_now,
        }
    }

    /// Replaces the wall clock used for receipt filenames
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Normalizes, posts and reports a notification
    ///
    /// Transport failures are not errors of this call; they are classified
    /// into the returned [`SubmissionOutcome`] and shown in the error dialog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the payload cannot be serialized, in which
    /// case nothing was shown or sent.
    pub async fn submit_notification(
        &self,
        payload: &PathogenNotification,
        notification_type: NotificationType,
    ) -> Result<SubmissionOutcome> {
        let normalized = normalize_payload(payload.clone());
        let body = serde_json::to_value(&normalized)?;
        let url = self.gateway.url_for(notification_type);

        tracing::info!(
            notification_type = %notification_type,
            url = %url,
            "Submitting notification"
        );

        self.dialog.show_spinner_dialog().await;
        let response = self.transport.post(&url, &body).await;
        self.dialog.close_spinner_dialog().await;

        let outcome = match response {
            Ok(response) => {
                self.on_success(response, normalized.person_info(), notification_type)
                    .await
            }
            Err(e) => self.on_failure(&e).await,
        };

        crate::log_submission_outcome!(&outcome, notification_type);
        Ok(outcome)
    }

    async fn on_success(
        &self,
        response: SubmissionResponse,
        person: Option<&PersonInfo>,
        notification_type: NotificationType,
    ) -> SubmissionOutcome {
        // Gateways may wrap base64 at 76 columns
        let encoded: String = response.content.split_ascii_whitespace().collect();
        let content = match general_purpose::STANDARD.decode(&encoded) {
            Ok(bytes) => bytes,
            Err(e) => {
                crate::log_error_with_context!(&e, "Receipt content is not valid base64");
                return self
                    .report_generic(format!("Die Quittung konnte nicht gelesen werden: {e}"))
                    .await;
            }
        };

        let receipt = Receipt {
            href: format!("data:{RECEIPT_MIME_TYPE};base64,{encoded}"),
            file_name: receipt_file_name(person, notification_type, (self.clock)()),
            author_email: response.author_email,
            author_name: response.author_name,
            timestamp: response.timestamp,
            notification_id: response.notification_id,
            content,
        };

        self.dialog
            .show_submit_dialog(SubmitDialogData {
                author_email: receipt.author_email.clone(),
                notification_id: receipt.notification_id.clone(),
                timestamp: receipt.timestamp.clone(),
                href: receipt.href.clone(),
                file_name: receipt.file_name.clone(),
                receipt_content: receipt.content.clone(),
            })
            .await;

        SubmissionOutcome::Success(receipt)
    }

    async fn on_failure(&self, error: &TransportError) -> SubmissionOutcome {
        match extract_error_details(error) {
            Some(messages) => {
                self.show_errors(messages.iter().map(DialogError::from_message).collect())
                    .await;
                SubmissionOutcome::ValidationFailure(messages)
            }
            None => {
                let message = self.dialog.extract_message_from_error(error);
                self.report_generic(message).await
            }
        }
    }

    async fn report_generic(&self, message: String) -> SubmissionOutcome {
        self.show_errors(vec![DialogError::from_message(message.as_str())])
            .await;
        SubmissionOutcome::GenericFailure(message)
    }

    async fn show_errors(&self, errors: Vec<DialogError>) {
        self.dialog
            .show_error_dialog(ErrorDialogData {
                title: SUBMISSION_ERROR_TITLE.to_string(),
                errors,
                redirect_to_home: false,
            })
            .await;
    }
}
