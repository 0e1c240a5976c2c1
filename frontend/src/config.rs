//! Application configuration.
//!
//! Centralized configuration for the ReCore upload frontend.
//! Endpoints are fixed for local development; the two URLs can be
//! overridden at build time with `RECORE_PREDICT_URL` and
//! `RECORE_DASHBOARD_URL`.

/// Prediction service endpoint.
///
/// Receives the CSV as a multipart upload and answers with JSON.
pub const PREDICT_URL: &str = "http://127.0.0.1:5000/predict";

/// Dashboard application opened after a successful classification.
pub const DASHBOARD_URL: &str = "http://localhost:8501";

/// `localStorage` key holding the last classification result.
pub const RESULT_STORAGE_KEY: &str = "classifiedData";

/// Multipart field name the prediction service reads the file from.
pub const FILE_FIELD: &str = "file";

/// Accepted file name suffix.
pub const CSV_EXTENSION: &str = ".csv";

/// How long a notice stays on screen (in milliseconds).
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Maximum notices displayed at once.
pub const MAX_NOTICES: usize = 3;

/// Prediction endpoint, honouring the build-time override.
pub fn predict_url() -> &'static str {
    option_env!("RECORE_PREDICT_URL").unwrap_or(PREDICT_URL)
}

/// Dashboard URL, honouring the build-time override.
pub fn dashboard_url() -> &'static str {
    option_env!("RECORE_DASHBOARD_URL").unwrap_or(DASHBOARD_URL)
}
