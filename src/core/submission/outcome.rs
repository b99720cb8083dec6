//! Submission outcome classification

use crate::domain::TransportError;
use serde::Serialize;

/// A delivered notification together with its receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub author_email: String,
    pub author_name: String,
    pub timestamp: String,
    pub notification_id: String,
    /// Decoded receipt PDF
    #[serde(skip)]
    pub content: Vec<u8>,
    pub file_name: String,
    pub href: String,
}

/// Result of a submission as reported to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "details", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Success(Receipt),
    /// The gateway rejected individual fields
    ValidationFailure(Vec<String>),
    /// Any other failure, reduced to one message
    GenericFailure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success(_) => "success",
            SubmissionOutcome::ValidationFailure(_) => "validation_failure",
            SubmissionOutcome::GenericFailure(_) => "generic_failure",
        }
    }

    /// Messages shown to the user for a failed submission
    pub fn messages(&self) -> Vec<String> {
        match self {
            SubmissionOutcome::Success(_) => Vec::new(),
            SubmissionOutcome::ValidationFailure(messages) => messages.clone(),
            SubmissionOutcome::GenericFailure(message) => vec![message.clone()],
        }
    }
}

/// Field validation messages of a failed submission
///
/// Returns `None` when the gateway did not report any validation errors, in
/// which case the failure is a generic one.
///
/// # Examples
///
/// ```
/// use pathogen_portal::core::submission::extract_error_details;
/// use pathogen_portal::domain::{ErrorBody, TransportError, ValidationMessage};
///
/// let error = TransportError::Http {
///     status: 422,
///     body: ErrorBody {
///         validation_errors: Some(vec![ValidationMessage {
///             message: "Error A".to_string(),
///             field: None,
///         }]),
///         message: None,
///     },
/// };
/// assert_eq!(extract_error_details(&error), Some(vec!["Error A".to_string()]));
///
/// let error = TransportError::ConnectionFailed("refused".to_string());
/// assert_eq!(extract_error_details(&error), None);
/// ```
pub fn extract_error_details(error: &TransportError) -> Option<Vec<String>> {
    let messages: Vec<String> = error
        .body()?
        .validation_errors
        .as_ref()?
        .iter()
        .map(|validation| validation.message.clone())
        .collect();

    (!messages.is_empty()).then_some(messages)
}
