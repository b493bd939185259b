//! `localStorage` persistence for the daily record.
use crate::dom::{js_error_message, local_storage};
use tarot_draw::QuotaBackend;

/// Quota backend writing through `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Operation(String),
}

impl QuotaBackend for LocalStorageBackend {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage =
            local_storage().map_err(|e| WebStorageError::Unavailable(js_error_message(&e)))?;
        storage
            .get_item(key)
            .map_err(|e| WebStorageError::Operation(js_error_message(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage =
            local_storage().map_err(|e| WebStorageError::Unavailable(js_error_message(&e)))?;
        storage
            .set_item(key, value)
            .map_err(|e| WebStorageError::Operation(js_error_message(&e)))
    }
}
