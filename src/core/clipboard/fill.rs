//! Model fill engine
//!
//! Applies clipboard pairs to a model in place through the rule table.
//! Processing is at-least-effort: a failing key is recorded and the next key
//! is processed as if nothing happened.

use super::rules::{FillContext, RuleTable};
use crate::domain::{Merge, PathogenNotification};
use serde::Serialize;

/// Outcome of a fill run
///
/// The model itself is filled in place; this only reports what happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillResult {
    /// One message per failing key, in input order
    pub errors: Vec<String>,

    /// Number of keys whose patch was merged
    pub applied: usize,

    /// Keys without an active rule
    pub ignored: Vec<String>,
}

impl FillResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Applies `(key, value)` pairs in order to `model`
///
/// Unknown keys are skipped silently. A rule error is rendered as
/// `Error processing rule for key <key>: <error>` and leaves the model
/// untouched for that key.
///
/// # Examples
///
/// ```
/// use pathogen_portal::core::clipboard::{fill_model, FillContext, RuleTable};
/// use pathogen_portal::domain::{NotificationType, PathogenNotification};
///
/// let table = RuleTable::for_notification_type(NotificationType::Nominal);
/// let pairs = vec![
///     ("P.lastname".to_string(), "Meier".to_string()),
///     ("P.gender".to_string(), "X".to_string()),
/// ];
///
/// let mut model = PathogenNotification::default();
/// let result = fill_model(&table, pairs, &mut model, &FillContext::default());
/// assert_eq!(
///     result.errors,
///     vec!["Error processing rule for key P.gender: Error: Unknown value 'X'"]
/// );
/// assert_eq!(result.applied, 1);
/// assert_eq!(model.person_info().unwrap().last_name.as_deref(), Some("Meier"));
/// ```
pub fn fill_model<I>(
    table: &RuleTable,
    pairs: I,
    model: &mut PathogenNotification,
    ctx: &FillContext,
) -> FillResult
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut errors = Vec::new();
    let mut ignored = Vec::new();
    let mut applied = 0;

    for (key, value) in pairs {
        let Some(path) = table.lookup(&key) else {
            tracing::debug!(key = %key, "No rule for clipboard key, skipping");
            ignored.push(key);
            continue;
        };

        match table.apply(path, &value, model, ctx) {
            Ok(patch) => {
                model.merge(patch);
                applied += 1;
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Clipboard rule failed");
                errors.push(format!("Error processing rule for key {key}: {e}"));
            }
        }
    }

    crate::log_fill_complete!(applied, errors.len(), ignored.len());

    FillResult {
        errors,
        applied,
        ignored,
    }
}
