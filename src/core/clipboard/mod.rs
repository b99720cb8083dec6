//! Clipboard import
//!
//! Turns clipboard text from a primary clinical system into a (partial)
//! notification model:
//!
//! 1. [`parse_clipboard`] checks the `URL ` marker and tokenizes the text
//! 2. [`RuleTable`] resolves each key to a [`FieldPath`] rule
//! 3. [`fill_model`] merges the rule patches and collects per-key errors
//!
//! [`ClipboardImporter`] ties the steps together and reports a malformed
//! clipboard through the dialog collaborator.

pub mod field_path;
pub mod fill;
pub mod parser;
pub mod rules;

pub use field_path::FieldPath;
pub use fill::{fill_model, FillResult};
pub use parser::{parse_clipboard, CLIPBOARD_PREFIX};
pub use rules::{FillContext, RuleProfile, RuleTable, ValueSetCategory};

use crate::adapters::dialog::DialogService;
use crate::domain::{ClipboardError, NotificationType, PathogenNotification};
use std::sync::Arc;

/// Imports clipboard text into a notification model
pub struct ClipboardImporter {
    dialog: Arc<dyn DialogService>,
    table: RuleTable,
}

impl ClipboardImporter {
    pub fn new(dialog: Arc<dyn DialogService>, notification_type: NotificationType) -> Self {
        Self {
            dialog,
            table: RuleTable::for_notification_type(notification_type),
        }
    }

    pub fn rule_table(&self) -> &RuleTable {
        &self.table
    }

    /// Parses `text` and fills `model` with it in place
    ///
    /// # Errors
    ///
    /// A malformed clipboard fails before `model` is touched; the clipboard
    /// error dialog is shown and the error is returned. Rule failures do not
    /// fail the import, they are listed in [`FillResult::errors`].
    pub async fn import(
        &self,
        text: &str,
        model: &mut PathogenNotification,
        ctx: &FillContext,
    ) -> Result<FillResult, ClipboardError> {
        let pairs = match parse_clipboard(text) {
            Ok(pairs) => pairs,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected clipboard content");
                self.dialog.show_error_dialog_insert_data_from_clipboard().await;
                return Err(e);
            }
        };

        tracing::info!(
            pairs = pairs.len(),
            profile = ?self.table.profile(),
            "Importing clipboard data"
        );

        Ok(fill_model(&self.table, pairs, model, ctx))
    }
}
