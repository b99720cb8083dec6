//! Notification submission
//!
//! [`SubmissionPipeline`] normalizes a filled model, posts it through the
//! [`NotificationTransport`](crate::adapters::gateway::NotificationTransport)
//! and reports the [`SubmissionOutcome`] through the dialog collaborator.

pub mod filename;
pub mod normalize;
pub mod outcome;
pub mod pipeline;

pub use filename::receipt_file_name;
pub use normalize::normalize_payload;
pub use outcome::{extract_error_details, Receipt, SubmissionOutcome};
pub use pipeline::{SubmissionPipeline, SUBMISSION_ERROR_TITLE};
