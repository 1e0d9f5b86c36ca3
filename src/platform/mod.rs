//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Score text output (DOM elements on web)
//! - Storage (see `persistence`)

#[cfg(target_arch = "wasm32")]
pub mod dom;

/// Receives human-readable score lines whenever they change
pub trait ScoreDisplay {
    fn show_score(&mut self, text: &str);
    fn show_high_score(&mut self, text: &str);
}

/// Current score line
pub fn format_score(score: f64) -> String {
    format!("Current Score => {}", score)
}

/// High score line
pub fn format_high_score(high_score: f64) -> String {
    format!("High Score => {}", high_score)
}

/// Score display that writes through the `log` facade
#[derive(Debug, Default)]
pub struct LogDisplay;

impl ScoreDisplay for LogDisplay {
    fn show_score(&mut self, text: &str) {
        log::debug!("{}", text);
    }

    fn show_high_score(&mut self, text: &str) {
        log::info!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_lines() {
        assert_eq!(format_score(0.0), "Current Score => 0");
        assert_eq!(format_score(7.5), "Current Score => 7.5");
        assert_eq!(format_high_score(12.0), "High Score => 12");
    }
}
