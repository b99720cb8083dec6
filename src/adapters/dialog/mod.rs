//! Dialog collaborator
//!
//! - [`DialogService`] - the contract the core calls into
//! - [`ConsoleDialog`] - terminal implementation used by the CLI

pub mod console;
pub mod traits;

pub use console::ConsoleDialog;
pub use traits::{DialogError, DialogService, ErrorDialogData, SubmitDialogData};
