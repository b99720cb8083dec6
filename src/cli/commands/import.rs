//! Import clipboard command implementation
//!
//! Reads clipboard text from a file or stdin, fills a notification model and
//! prints it as JSON.

use crate::adapters::dialog::ConsoleDialog;
use crate::config::ReceiptConfig;
use crate::core::clipboard::{ClipboardImporter, FillContext, ValueSetCategory};
use crate::domain::{CodeDisplay, NotificationType, PathogenNotification};
use anyhow::Context;
use clap::Args;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

/// Arguments for the import-clipboard command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// File holding the clipboard text (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Notification type the data is imported for
    #[arg(short = 't', long, default_value = "nominal")]
    pub notification_type: NotificationType,

    /// Pathogen the form is currently set to
    #[arg(short, long, default_value = "")]
    pub pathogen_code: String,

    /// JSON file with the pathogen's value sets, keyed by "materials"/"methods"
    #[arg(long)]
    pub value_sets: Option<String>,
}

impl ImportArgs {
    /// Execute the import-clipboard command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let text = self.read_input()?;
        let ctx = self.fill_context()?;

        // The console dialog never writes receipts during an import.
        let dialog = Arc::new(ConsoleDialog::new(&ReceiptConfig::default()));
        let importer = ClipboardImporter::new(dialog, self.notification_type);

        let mut model = PathogenNotification::default();
        let result = match importer.import(&text, &mut model, &ctx).await {
            Ok(result) => result,
            Err(e) => {
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("{}", serde_json::to_string_pretty(&model)?);

        if result.has_errors() {
            println!();
            println!("⚠️  {} field(s) could not be imported:", result.errors.len());
            for error in &result.errors {
                println!("   - {error}");
            }
            return Ok(1);
        }

        println!();
        println!("✅ Imported {} field(s)", result.applied);
        Ok(0)
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read clipboard file {path}")),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read clipboard text from stdin")?;
                Ok(text)
            }
        }
    }

    fn fill_context(&self) -> anyhow::Result<FillContext> {
        let mut ctx = FillContext::new(self.pathogen_code.as_str());

        if let Some(path) = &self.value_sets {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read value sets {path}"))?;
            let sets: HashMap<ValueSetCategory, Vec<CodeDisplay>> =
                serde_json::from_str(&content)
                    .with_context(|| format!("Invalid value set file {path}"))?;
            for (category, codes) in sets {
                ctx = ctx.with_value_set(category, codes);
            }
        }

        Ok(ctx)
    }
}
