//! External collaborators of the portal core
//!
//! - [`gateway`] - notification gateway transport (HTTP)
//! - [`dialog`] - presentation of spinners, receipts and errors
//!
//! Both are trait-based so hosts and tests can substitute their own
//! implementations.

pub mod dialog;
pub mod gateway;
