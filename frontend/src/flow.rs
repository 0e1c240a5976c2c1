//! Upload flow state machine.
//!
//! Owns the selected file, the presentation [`UploadState`] and the
//! in-flight guard, and queues the [`Notice`]s raised along the way.
//! It knows nothing about Leptos: the [`UploadSection`] component keeps
//! one flow in a signal and drives it.
//!
//! ```text
//!   Idle ──choose/drop──▶ FileChosen ──begin_submit──▶ Submitting
//!    ▲                        ▲                         │       │
//!    │                        └──── retry ── Failed ◀───┘ err   │ ok
//!    └──────── reset ─────────────────── Complete ◀─────────────┘
//! ```
//!
//! [`UploadSection`]: crate::components::UploadSection

use serde_json::Value;

use crate::config::RESULT_STORAGE_KEY;
use crate::services::storage::{persist_result, KeyValueStore};
use crate::services::upload::{is_csv_name, PredictionClient, SelectedFile};
use crate::types::{AppError, AppResult, Notice, UploadState};

/// State of the upload page.
#[derive(Clone, Debug)]
pub struct UploadFlow<F> {
    file: Option<F>,
    state: UploadState,
    in_flight: bool,
    notices: Vec<Notice>,
}

impl<F> Default for UploadFlow<F> {
    fn default() -> Self {
        Self {
            file: None,
            state: UploadState::Idle,
            in_flight: false,
            notices: Vec::new(),
        }
    }
}

impl<F: SelectedFile> UploadFlow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.as_ref().map(SelectedFile::name)
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn is_complete(&self) -> bool {
        self.state == UploadState::Complete
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.in_flight
    }

    /// Drain the notices raised since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// File picked through the native picker. Its `accept` filter
    /// already restricted the choice, so no check happens here.
    pub fn choose(&mut self, file: F) {
        if self.in_flight {
            log::warn!("Ignoring selection of '{}' while a submission is running", file.name());
            return;
        }
        log::info!("📄 Selected {} ({})", file.name(), file.media_type());
        self.file = Some(file);
        self.state = UploadState::FileChosen;
    }

    /// File dropped on the drop zone. Anything not named `*.csv` is
    /// rejected and the current selection is left untouched.
    pub fn drop_file(&mut self, file: Option<F>) -> AppResult<()> {
        let file = match file {
            Some(file) if is_csv_name(&file.name()) => file,
            other => {
                let name = other.map(|f| f.name()).unwrap_or_default();
                log::warn!("⚠️ Rejected dropped file '{}'", name);
                self.notices
                    .push(Notice::warning("Invalid file type", "Please upload a CSV file."));
                return Err(AppError::InvalidFileType(name));
            }
        };
        self.choose(file);
        Ok(())
    }

    /// Check the preconditions and enter `Submitting`.
    ///
    /// Returns the file to upload. No network call may happen when this
    /// returns an error.
    pub fn begin_submit(&mut self) -> AppResult<F> {
        if self.in_flight {
            log::warn!("Submission already in flight");
            return Err(AppError::SubmissionInFlight);
        }
        let Some(file) = self.file.clone() else {
            self.notices
                .push(Notice::warning("No file selected", "Please upload a CSV file first."));
            return Err(AppError::NoFileSelected);
        };
        log::info!("🚀 Submitting {}", file.name());
        self.in_flight = true;
        self.state = UploadState::Submitting;
        Ok(file)
    }

    /// Leave `Submitting` with the outcome of [`classify`].
    pub fn finish_submit(&mut self, outcome: AppResult<Value>) -> AppResult<Value> {
        self.in_flight = false;
        match outcome {
            Ok(value) => {
                log::info!("✅ Classification stored");
                self.file = None;
                self.state = UploadState::Complete;
                self.notices
                    .push(Notice::success("Success!", "Data successfully processed."));
                Ok(value)
            }
            Err(e) => {
                log::error!("❌ Upload failed: {}", e);
                self.state = UploadState::Failed;
                self.notices.push(Notice::error("Upload failed", e.to_string()));
                Err(e)
            }
        }
    }

    /// Run a whole submission: guard, upload, persist, transition.
    pub async fn submit<C, S>(&mut self, client: &C, store: &S) -> AppResult<Value>
    where
        C: PredictionClient<F> + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let file = self.begin_submit()?;
        let outcome = classify(client, store, &file).await;
        self.finish_submit(outcome)
    }

    /// Back to `Idle`. The stored result is kept.
    pub fn reset(&mut self) {
        if self.in_flight {
            log::warn!("Ignoring reset while a submission is running");
            return;
        }
        self.file = None;
        self.state = UploadState::Idle;
    }
}

/// Upload `file` and cache the answer under [`RESULT_STORAGE_KEY`].
pub async fn classify<F, C, S>(client: &C, store: &S, file: &F) -> AppResult<Value>
where
    F: SelectedFile,
    C: PredictionClient<F> + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let value = client.predict(file).await?;
    persist_result(store, RESULT_STORAGE_KEY, &value)?;
    Ok(value)
}
