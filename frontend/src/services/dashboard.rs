//! Hand-off to the separately hosted dashboard application.

use crate::types::{AppError, AppResult};

/// Open the dashboard in a new browsing context. No data is passed;
/// the dashboard reads the classification results on its own.
pub fn open_dashboard(url: &str) -> AppResult<()> {
    let opened = gloo_utils::window()
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| AppError::Dashboard(format!("{:?}", e)))?;

    match opened {
        Some(_) => {
            log::info!("📊 Dashboard opened at {}", url);
            Ok(())
        }
        None => Err(AppError::Dashboard("the window was blocked by the browser".to_string())),
    }
}
