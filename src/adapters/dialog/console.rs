//! Console dialog
//!
//! Prints dialog content to stdout and stores received receipts in the
//! configured directory. Used by the CLI.

use super::{DialogService, ErrorDialogData, SubmitDialogData};
use crate::config::ReceiptConfig;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Dialog that renders to the terminal
pub struct ConsoleDialog {
    receipt_dir: PathBuf,
}

impl ConsoleDialog {
    pub fn new(config: &ReceiptConfig) -> Self {
        Self {
            receipt_dir: PathBuf::from(&config.output_dir),
        }
    }

    pub fn receipt_dir(&self) -> &Path {
        &self.receipt_dir
    }

    async fn store_receipt(&self, data: &SubmitDialogData) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.receipt_dir).await?;
        let path = self.receipt_dir.join(&data.file_name);
        tokio::fs::write(&path, &data.receipt_content).await?;
        Ok(path)
    }
}

#[async_trait]
impl DialogService for ConsoleDialog {
    async fn show_spinner_dialog(&self) {
        println!("⏳ Sending notification...");
    }

    async fn close_spinner_dialog(&self) {
        tracing::debug!("Spinner closed");
    }

    async fn show_submit_dialog(&self, data: SubmitDialogData) {
        println!("✅ Notification delivered");
        println!("  Notification ID: {}", data.notification_id);
        println!("  Author: {}", data.author_email);
        println!("  Timestamp: {}", data.timestamp);

        match self.store_receipt(&data).await {
            Ok(path) => {
                tracing::info!(path = %path.display(), "Receipt stored");
                println!("  Receipt: {}", path.display());
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to store receipt");
                println!("⚠️  Receipt could not be stored: {e}");
            }
        }
    }

    async fn show_error_dialog(&self, data: ErrorDialogData) {
        println!("❌ {}", data.title);
        for error in &data.errors {
            println!("   - {}", error.text);
        }
    }

    async fn show_error_dialog_insert_data_from_clipboard(&self) {
        println!("❌ Die Daten aus der Zwischenablage konnten nicht übernommen werden.");
        println!("   Der Inhalt muss mit \"URL \" beginnen.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_submit_dialog_writes_receipt() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("nested");
        let dialog = ConsoleDialog::new(&ReceiptConfig {
            output_dir: out.to_string_lossy().to_string(),
        });

        dialog
            .show_submit_dialog(SubmitDialogData {
                author_email: "lab@example.org".to_string(),
                notification_id: "n-1".to_string(),
                timestamp: "2024-03-01T10:00:00Z".to_string(),
                href: "data:application/pdf;base64,JVBERg==".to_string(),
                file_name: "240301100000.pdf".to_string(),
                receipt_content: b"%PDF".to_vec(),
            })
            .await;

        let written = std::fs::read(out.join("240301100000.pdf")).unwrap();
        assert_eq!(written, b"%PDF");
    }
}
