//! Browser LocalStorage backend

use super::{ScalarStore, StorageError, TextStore, parse_scalar};

/// One LocalStorage key, read either as raw text or as a number
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    /// LocalStorage key used by the browser build for the best score
    pub const HIGH_SCORE_KEY: &'static str = "highScore";

    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub fn high_score() -> Self {
        Self::new(Self::HIGH_SCORE_KEY)
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl TextStore for LocalStorageStore {
    fn get_text(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(self.key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set_text(&mut self, text: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(self.key, text)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

impl ScalarStore for LocalStorageStore {
    fn get(&self) -> Result<Option<f64>, StorageError> {
        self.get_text()?.map(|raw| parse_scalar(&raw)).transpose()
    }

    fn set(&mut self, value: f64) -> Result<(), StorageError> {
        self.set_text(&value.to_string())
    }
}
