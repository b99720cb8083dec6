//! Domain error types
//!
//! This module defines the error hierarchy for the portal core. Rule failures,
//! clipboard format failures and transport failures each have their own type
//! so that the fill engine and the submission pipeline can decide locally how
//! to surface them. None of them expose third-party HTTP client types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main portal error type
///
/// This is the primary error type used throughout the library. It wraps the
/// narrower error types and provides context for the CLI boundary.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Clipboard import errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Gateway transport errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised by a single clipboard rule
///
/// These never abort an import. The fill engine renders them into the
/// per-key error list, which is why every message carries the `Error: `
/// prefix the portal has always shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Value is not part of the known value set of an enum-valued field
    #[error("Error: Unknown value '{0}'")]
    UnknownValue(String),

    /// No value set was supplied for the category a code rule looks up
    #[error("Error: {pathogen_code}_no-valueset: {category}")]
    NoValueSet {
        pathogen_code: String,
        category: String,
    },
}

/// Errors raised while reading clipboard text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Clipboard text does not carry the `URL ` marker
    #[error("invalid clipboard: it does not start with \"URL \"")]
    MissingPrefix,
}

/// A single field-level validation message reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidationMessage {
    /// Human-readable message
    pub message: String,

    /// Field the message refers to, if the gateway reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Structured error body returned by the gateway on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Field-level validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationMessage>>,

    /// Single error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Gateway transport errors
///
/// Errors that occur when posting a notification. These errors don't expose
/// the HTTP client's own types.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Gateway answered with a non-success status
    #[error("Gateway returned status {status}")]
    Http { status: u16, body: ErrorBody },

    /// Failed to reach the gateway
    #[error("Failed to connect to gateway: {0}")]
    ConnectionFailed(String),

    /// Gateway answered with a body that could not be decoded
    #[error("Invalid response from gateway: {0}")]
    InvalidResponse(String),
}

impl TransportError {
    /// Structured body of an HTTP failure, if any
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            TransportError::Http { body, .. } => Some(body),
            _ => None,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PortalError {
    fn from(err: toml::de::Error) -> Self {
        PortalError::Configuration(format!("TOML parse error: {err}"))
    }
}
