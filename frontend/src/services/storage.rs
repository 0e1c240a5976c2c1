//! Client-side cache of the last classification result.
//!
//! A single key in `localStorage`, no expiry, no versioning.

use serde_json::Value;
use web_sys::Storage;

use crate::types::{AppError, AppResult};

/// Minimal string key/value store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Browser `localStorage`, looked up on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> AppResult<Storage> {
        gloo_utils::window()
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }
}

/// Store `value` verbatim (compact JSON) under `key`.
pub fn persist_result<S: KeyValueStore + ?Sized>(store: &S, key: &str, value: &Value) -> AppResult<()> {
    let serialized = serde_json::to_string(value)?;
    store.set_item(key, &serialized)?;
    log::debug!("💾 Stored {} bytes under '{}'", serialized.len(), key);
    Ok(())
}

/// Read back the value stored under `key`, if any.
pub fn load_result<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> AppResult<Option<Value>> {
    match store.get_item(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}
