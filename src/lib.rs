// Pathogen Portal - Clipboard import and notification submission
// Copyright (c) 2025 Pathogen Portal Contributors
// Licensed under the MIT License

//! # Pathogen Portal
//!
//! Core of a pathogen notification portal: laboratories fill a notification
//! form, optionally from data pasted out of their primary clinical system,
//! and submit it to a notification gateway that answers with a PDF receipt.
//!
//! ## Overview
//!
//! This library provides:
//! - **Clipboard import**: `URL <url>` clipboard text is tokenized and every
//!   known field path is applied to the form model through a rule table
//! - **Submission**: the model is normalized, posted to the gateway and the
//!   outcome is reported through a dialog collaborator
//! - **Receipts**: base64 receipts are decoded and given a filename derived
//!   from the notified person and the submission time
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Clipboard import and submission pipeline
//! - [`adapters`] - Gateway transport and dialog collaborators
//! - [`domain`] - Notification model, patch merging and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use pathogen_portal::core::clipboard::{fill_model, parse_clipboard, FillContext, RuleTable};
//! use pathogen_portal::domain::{NotificationType, PathogenNotification};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pairs = parse_clipboard("URL https://x.org/?P.lastname=Meier&P.zip=10115&P.r.zip=10115")?;
//!
//! let table = RuleTable::for_notification_type(NotificationType::NonNominal);
//! let mut model = PathogenNotification::default();
//! let result = fill_model(&table, pairs, &mut model, &FillContext::default());
//!
//! // Anonymous profile: names are ignored, postal codes are coarsened
//! assert!(model.person_info().is_none());
//! assert_eq!(result.ignored, vec!["P.lastname", "P.zip"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Submitting
//!
//! ```rust,no_run
//! use pathogen_portal::adapters::dialog::ConsoleDialog;
//! use pathogen_portal::adapters::gateway::GatewayClient;
//! use pathogen_portal::config::load_config;
//! use pathogen_portal::core::submission::SubmissionPipeline;
//! use pathogen_portal::domain::{NotificationType, PathogenNotification};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("portal.toml")?;
//! let pipeline = SubmissionPipeline::new(
//!     Arc::new(GatewayClient::new(&config.gateway)?),
//!     Arc::new(ConsoleDialog::new(&config.receipt)),
//!     config.gateway.clone(),
//! );
//!
//! let outcome = pipeline
//!     .submit_notification(&PathogenNotification::default(), NotificationType::Nominal)
//!     .await?;
//! println!("{}", outcome.kind());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
