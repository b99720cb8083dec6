//! Notification gateway integration
//!
//! - [`NotificationTransport`] - the contract the submission pipeline posts through
//! - [`GatewayClient`] - HTTP implementation

pub mod client;
pub mod models;
pub mod traits;

pub use client::GatewayClient;
pub use models::SubmissionResponse;
pub use traits::NotificationTransport;
