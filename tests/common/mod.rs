//! Recording fakes of the portal collaborators

#![allow(dead_code)]

use async_trait::async_trait;
use pathogen_portal::adapters::dialog::{DialogService, ErrorDialogData, SubmitDialogData};
use pathogen_portal::adapters::gateway::{NotificationTransport, SubmissionResponse};
use pathogen_portal::domain::TransportError;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum DialogEvent {
    SpinnerShown,
    SpinnerClosed,
    Submit(SubmitDialogData),
    Error(ErrorDialogData),
    ClipboardError,
}

/// Dialog that remembers every call in order
#[derive(Default)]
pub struct RecordingDialog {
    events: Mutex<Vec<DialogEvent>>,
}

impl RecordingDialog {
    pub fn events(&self) -> Vec<DialogEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: DialogEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl DialogService for RecordingDialog {
    async fn show_spinner_dialog(&self) {
        self.record(DialogEvent::SpinnerShown);
    }

    async fn close_spinner_dialog(&self) {
        self.record(DialogEvent::SpinnerClosed);
    }

    async fn show_submit_dialog(&self, data: SubmitDialogData) {
        self.record(DialogEvent::Submit(data));
    }

    async fn show_error_dialog(&self, data: ErrorDialogData) {
        self.record(DialogEvent::Error(data));
    }

    async fn show_error_dialog_insert_data_from_clipboard(&self) {
        self.record(DialogEvent::ClipboardError);
    }
}

/// Transport that answers every post with a fixed result
pub struct FakeTransport {
    answer: Result<SubmissionResponse, TransportError>,
    requests: Mutex<Vec<(String, serde_json::Value)>>,
}

impl FakeTransport {
    pub fn answering(answer: Result<SubmissionResponse, TransportError>) -> Self {
        Self {
            answer,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationTransport for FakeTransport {
    async fn post(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> Result<SubmissionResponse, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), payload.clone()));
        self.answer.clone()
    }
}
