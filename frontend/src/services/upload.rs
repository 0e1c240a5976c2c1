//! HTTP service uploading GPU telemetry CSV files to the prediction service.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::config::{CSV_EXTENSION, FILE_FIELD};
use crate::types::{AppError, AppResult};

/// A file handed over by the file picker or a drop.
pub trait SelectedFile: Clone {
    /// File name as reported by the host.
    fn name(&self) -> String;
    /// Declared media type, possibly empty.
    fn media_type(&self) -> String;
}

impl SelectedFile for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn media_type(&self) -> String {
        self.type_()
    }
}

/// Extension sniffing only; contents are never inspected.
pub fn is_csv_name(name: &str) -> bool {
    name.ends_with(CSV_EXTENSION)
}

/// Remote classification of an uploaded file.
#[async_trait(?Send)]
pub trait PredictionClient<F: SelectedFile> {
    /// Upload `file` and return the service's JSON answer.
    async fn predict(&self, file: &F) -> AppResult<Value>;
}

/// Multipart upload with gloo-net.
#[derive(Clone, Debug)]
pub struct HttpPredictionClient {
    endpoint: String,
}

impl HttpPredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl PredictionClient<File> for HttpPredictionClient {
    async fn predict(&self, file: &File) -> AppResult<Value> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(FILE_FIELD, file, &file.name())
            .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        log::info!("📤 POST {} ({})", self.endpoint, file.name());

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Server { status: response.status(), body });
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

        parse_prediction(&text)
    }
}

/// Parse the service answer. No schema is enforced.
pub fn parse_prediction(body: &str) -> AppResult<Value> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_name_check() {
        assert!(is_csv_name("gpu_metrics.csv"));
        assert!(is_csv_name("a.b.csv"));
        assert!(!is_csv_name("gpu_metrics.xlsx"));
        assert!(!is_csv_name("csv"));
        assert!(!is_csv_name("gpu_metrics.csv.zip"));
        // matches the picker filter's suffix exactly
        assert!(!is_csv_name("GPU.CSV"));
    }

    #[test]
    fn test_parse_service_response() {
        let body = r#"{
            "message": "success",
            "total_records": 3,
            "batch_id": "2025-01-14T10:22:31.512345"
        }"#;

        let value = parse_prediction(body).unwrap();
        assert_eq!(value["total_records"], 3);
        assert_eq!(value["message"], "success");
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        let err = parse_prediction("<html>Internal Server Error</html>").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = HttpPredictionClient::new("http://127.0.0.1:5000/predict");
        assert_eq!(client.endpoint(), "http://127.0.0.1:5000/predict");
    }
}
