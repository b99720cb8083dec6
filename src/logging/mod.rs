//! Logging and observability
//!
//! Structured logging through `tracing`: a console layer plus an optional
//! JSON file layer with rotation. The macros below log the portal's domain
//! events with consistent field names. They only ever log keys and counts,
//! never names or birth dates.
//!
//! # Example
//!
//! ```no_run
//! use pathogen_portal::config::LoggingConfig;
//! use pathogen_portal::logging::init_logging;
//!
//! let _guard = init_logging("info", &LoggingConfig::default())
//!     .expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the end of a clipboard fill run
///
/// # Example
///
/// ```no_run
/// use pathogen_portal::log_fill_complete;
///
/// log_fill_complete!(12, 1, 3);
/// ```
#[macro_export]
macro_rules! log_fill_complete {
    ($applied:expr, $errors:expr, $ignored:expr) => {
        tracing::info!(
            applied = $applied,
            errors = $errors,
            ignored = $ignored,
            "Clipboard fill completed"
        );
    };
}

/// Log the outcome of a submission
///
/// # Example
///
/// ```no_run
/// use pathogen_portal::core::submission::SubmissionOutcome;
/// use pathogen_portal::domain::NotificationType;
/// use pathogen_portal::log_submission_outcome;
///
/// let outcome = SubmissionOutcome::GenericFailure("timeout".to_string());
/// log_submission_outcome!(&outcome, NotificationType::Nominal);
/// ```
#[macro_export]
macro_rules! log_submission_outcome {
    ($outcome:expr, $notification_type:expr) => {
        match $outcome {
            $crate::core::submission::SubmissionOutcome::Success(receipt) => tracing::info!(
                notification_type = %$notification_type,
                notification_id = %receipt.notification_id,
                "Notification delivered"
            ),
            failure => tracing::warn!(
                notification_type = %$notification_type,
                outcome = failure.kind(),
                messages = failure.messages().len(),
                "Notification not delivered"
            ),
        }
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use pathogen_portal::domain::PortalError;
/// use pathogen_portal::log_error_with_context;
///
/// let error = PortalError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
