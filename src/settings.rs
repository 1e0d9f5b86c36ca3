//! Game settings and preferences
//!
//! Presentation-only; persisted separately from the high score in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::persistence::{StorageError, TextStore};

/// Sprite image paths for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSet {
    pub bird: &'static str,
    pub top_pipe: &'static str,
    pub bottom_pipe: &'static str,
}

/// Which sprite set the renderer draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AssetTheme {
    #[default]
    Dark,
    Light,
}

impl AssetTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetTheme::Dark => "Dark",
            AssetTheme::Light => "Light",
        }
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            AssetTheme::Dark => AssetTheme::Light,
            AssetTheme::Light => AssetTheme::Dark,
        }
    }

    pub fn assets(&self) -> AssetSet {
        match self {
            AssetTheme::Dark => AssetSet {
                bird: "images/flappybird.png",
                top_pipe: "images/toppipe.png",
                bottom_pipe: "images/bottompipe.png",
            },
            AssetTheme::Light => AssetSet {
                bird: "images/lbg.png",
                top_pipe: "images/ltp.png",
                bottom_pipe: "images/lbp.png",
            },
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Sprite theme
    #[serde(default)]
    pub theme: AssetTheme,
}

impl Settings {
    /// Flip between the dark and light sprite sets
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "flappy_bird_settings";

    /// Read settings from `store`, falling back to defaults on any failure
    pub fn load_from(store: &impl TextStore) -> Self {
        match store.get_text() {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from storage");
                    settings
                }
                Err(e) => {
                    log::warn!("Stored settings are invalid, using defaults: {}", e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to read settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings to `store` as JSON
    pub fn save_to(&self, store: &mut impl TextStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(self).map_err(|e| StorageError::Write(e.to_string()))?;
        store.set_text(&json)?;
        log::info!("Settings saved (theme: {})", self.theme.as_str());
        Ok(())
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        use crate::persistence::LocalStorageStore;
        Self::load_from(&LocalStorageStore::new(Self::STORAGE_KEY))
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        use crate::persistence::LocalStorageStore;
        if let Err(e) = self.save_to(&mut LocalStorageStore::new(Self::STORAGE_KEY)) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryTextStore;

    #[test]
    fn test_toggle_theme() {
        let mut settings = Settings::default();
        assert_eq!(settings.theme, AssetTheme::Dark);
        settings.toggle_theme();
        assert_eq!(settings.theme, AssetTheme::Light);
        assert_eq!(settings.theme.assets().bird, "images/lbg.png");
        settings.toggle_theme();
        assert_eq!(settings.theme.assets().top_pipe, "images/toppipe.png");
    }

    /// Store whose writes always fail (e.g. quota exceeded)
    struct FullStore;

    impl TextStore for FullStore {
        fn get_text(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set_text(&mut self, _text: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("QuotaExceededError".into()))
        }
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryTextStore::new();
        let settings = Settings {
            theme: AssetTheme::Light,
        };
        settings.save_to(&mut store).unwrap();
        assert_eq!(Settings::load_from(&store).theme, AssetTheme::Light);
    }

    #[test]
    fn test_failed_save_is_reported() {
        let result = Settings::default().save_to(&mut FullStore);
        assert!(matches!(result, Err(StorageError::Write(msg)) if msg == "QuotaExceededError"));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        assert_eq!(Settings::load_from(&MemoryTextStore::new()).theme, AssetTheme::Dark);
        assert_eq!(Settings::load_from(&FullStore).theme, AssetTheme::Dark);
        let garbage = MemoryTextStore::with_text("{not json");
        assert_eq!(Settings::load_from(&garbage).theme, AssetTheme::Dark);
        let unknown = MemoryTextStore::with_text(r#"{"theme":"Sepia"}"#);
        assert_eq!(Settings::load_from(&unknown).theme, AssetTheme::Dark);
    }

    #[test]
    fn test_settings_json_defaults_missing_fields() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.theme, AssetTheme::Dark);
        let json = serde_json::to_string(&Settings {
            theme: AssetTheme::Light,
        })
        .unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme, AssetTheme::Light);
    }
}
