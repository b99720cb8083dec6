//! Core portal logic
//!
//! - [`clipboard`] - clipboard import into the notification model
//! - [`submission`] - submission to the gateway and receipt handling
//! - [`dates`] - date reformatting shared by both

pub mod clipboard;
pub mod dates;
pub mod submission;
