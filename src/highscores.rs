//! Best score tracking
//!
//! A single number, persisted through a `ScalarStore`, that only ever goes up.

use serde::{Deserialize, Serialize};

use crate::persistence::{ScalarStore, StorageError};

/// Best score seen across runs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HighScore {
    best: f64,
}

impl HighScore {
    /// Create a tracker starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known best (negative or non-finite values count as zero)
    pub fn from_value(best: f64) -> Self {
        if best.is_finite() && best > 0.0 {
            Self { best }
        } else {
            Self::new()
        }
    }

    pub fn best(&self) -> f64 {
        self.best
    }

    /// Record a score after a pipe was passed
    ///
    /// Returns true if the score beat the previous best.
    pub fn record_pass(&mut self, score: f64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load the best score, falling back to zero when absent or unreadable
    pub fn load(store: &impl ScalarStore) -> Self {
        match store.get() {
            Ok(Some(value)) => {
                log::info!("Loaded high score {}", value);
                Self::from_value(value)
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Could not read high score: {}", e);
                Self::new()
            }
        }
    }

    /// Persist the current best
    pub fn save(&self, store: &mut impl ScalarStore) -> Result<(), StorageError> {
        store.set(self.best)?;
        log::info!("High score saved ({})", self.best);
        Ok(())
    }
}
