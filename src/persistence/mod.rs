//! Persistence for the best score and the settings blob
//!
//! The game persists one number (the best score) and one JSON string
//! (settings). Backends:
//! - `MemoryStore` / `MemoryTextStore`: in-process, used natively and in tests
//! - `LocalStorageStore`: browser LocalStorage (wasm32 only), both kinds

#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use thiserror::Error;

/// Failure talking to a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend (e.g. LocalStorage) is not reachable in this context
    #[error("storage backend unavailable")]
    Unavailable,
    /// A value was stored but could not be parsed as a number
    #[error("stored value {0:?} is not a number")]
    Malformed(String),
    /// Backend refused the write (quota, privacy mode, ...)
    #[error("failed to write to storage: {0}")]
    Write(String),
}

/// Get/set access to a single persisted float
pub trait ScalarStore {
    /// Read the stored value, `None` if nothing has been stored yet
    fn get(&self) -> Result<Option<f64>, StorageError>;

    /// Overwrite the stored value
    fn set(&mut self, value: f64) -> Result<(), StorageError>;
}

/// Get/set access to a single persisted string
pub trait TextStore {
    /// Read the stored text, `None` if nothing has been stored yet
    fn get_text(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the stored text
    fn set_text(&mut self, text: &str) -> Result<(), StorageError>;
}

/// Parse a stored string the way the browser build writes it
pub fn parse_scalar(raw: &str) -> Result<f64, StorageError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| StorageError::Malformed(raw.to_string()))
}

/// Volatile store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: f64) -> Self {
        Self { value: Some(value) }
    }
}

impl ScalarStore for MemoryStore {
    fn get(&self) -> Result<Option<f64>, StorageError> {
        Ok(self.value)
    }

    fn set(&mut self, value: f64) -> Result<(), StorageError> {
        self.value = Some(value);
        Ok(())
    }
}

/// Volatile text store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryTextStore {
    text: Option<String>,
}

impl MemoryTextStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl TextStore for MemoryTextStore {
    fn get_text(&self) -> Result<Option<String>, StorageError> {
        Ok(self.text.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<(), StorageError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}
