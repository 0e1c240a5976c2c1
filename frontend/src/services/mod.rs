//! Host environment services.
//!
//! # Services
//!
//! - [`upload`] - CSV upload to the prediction service
//! - [`storage`] - `localStorage` cache of the last result
//! - [`dashboard`] - Opening the external dashboard

pub mod upload;
pub mod storage;
pub mod dashboard;

pub use upload::*;
pub use storage::{load_result, persist_result, KeyValueStore, LocalStorage};
pub use dashboard::*;
