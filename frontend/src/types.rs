//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Upload Types** - Presentation state of the upload flow
//! - **Notice Types** - User-visible notifications
//! - **Result Types** - Display view over the prediction service answer
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// Upload Types
// =============================================================================

/// Presentation state of the upload flow. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    /// Nothing selected yet
    #[default]
    Idle,
    /// A file is selected and can be submitted
    FileChosen,
    /// The file is being uploaded and classified
    Submitting,
    /// The last submission succeeded
    Complete,
    /// The last submission failed; the file is kept for a retry
    Failed,
}

impl UploadState {
    /// Label of the submit button for this state.
    pub fn submit_label(&self) -> &'static str {
        match self {
            UploadState::Submitting => "Processing...",
            UploadState::Failed => "Retry Analysis",
            _ => "Analyze and Classify",
        }
    }
}

// =============================================================================
// Notice Types
// =============================================================================

/// Notice severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// Operation completed
    Success,
    /// User error, nothing happened
    Warning,
    /// Operation failed
    Error,
}

impl NoticeKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Warning => "notice notice-warning",
            NoticeKind::Error => "notice notice-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            NoticeKind::Success => "✅",
            NoticeKind::Warning => "⚠️",
            NoticeKind::Error => "❌",
        }
    }
}

/// A user-visible notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity
    pub kind: NoticeKind,
    /// Short headline
    pub title: String,
    /// Detail line
    pub description: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, description)
    }
}

// =============================================================================
// Result Types
// =============================================================================

/// Display view over a classification result.
///
/// The prediction service answers with
/// `{"message": "success", "total_records": 12, "batch_id": "..."}`,
/// but nothing is enforced: every field is optional and unknown
/// shapes simply yield an empty summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub message: Option<String>,
    pub total_records: Option<u64>,
    pub batch_id: Option<String>,
}

impl ClassificationSummary {
    /// Extract the known fields from an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Self {
        Self {
            message: value.get("message").and_then(Value::as_str).map(str::to_string),
            total_records: value.get("total_records").and_then(Value::as_u64),
            batch_id: value.get("batch_id").and_then(Value::as_str).map(str::to_string),
        }
    }

    /// True when none of the known fields were present.
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.total_records.is_none() && self.batch_id.is_none()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Every variant is recoverable: the UI always returns to a state
/// where the user can act again.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Submit requested without a selected file.
    #[error("No file selected")]
    NoFileSelected,

    /// A dropped file does not carry the `.csv` extension.
    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    /// A submission is already running.
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// Request could not be built or the transport failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The prediction service answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Browser storage unavailable or write refused.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The dashboard window could not be opened.
    #[error("Could not open dashboard: {0}")]
    Dashboard(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_from_service_response() {
        let value = json!({
            "message": "success",
            "total_records": 128,
            "batch_id": "2025-01-14T10:22:31.512345"
        });

        let summary = ClassificationSummary::from_value(&value);
        assert_eq!(summary.message.as_deref(), Some("success"));
        assert_eq!(summary.total_records, Some(128));
        assert_eq!(summary.batch_id.as_deref(), Some("2025-01-14T10:22:31.512345"));
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_summary_tolerates_unknown_shapes() {
        let summary = ClassificationSummary::from_value(&json!({"life_remaining_days": 42}));
        assert!(summary.is_empty());

        let summary = ClassificationSummary::from_value(&json!([1, 2, 3]));
        assert!(summary.is_empty());

        let summary = ClassificationSummary::from_value(&json!({"total_records": "many"}));
        assert_eq!(summary.total_records, None);
    }

    #[test]
    fn test_error_display_is_user_readable() {
        let err = AppError::Server { status: 500, body: "boom".to_string() };
        assert_eq!(err.to_string(), "Server error (500): boom");
        assert_eq!(AppError::NoFileSelected.to_string(), "No file selected");
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let err: AppError = serde_json::from_str::<Value>("{not json").unwrap_err().into();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(UploadState::Idle.submit_label(), "Analyze and Classify");
        assert_eq!(UploadState::Submitting.submit_label(), "Processing...");
    }
}
