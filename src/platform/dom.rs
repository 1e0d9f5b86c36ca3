//! DOM-backed score display (browser only)

use web_sys::Document;

use super::ScoreDisplay;

/// Writes score lines into the first element of a CSS class
pub struct DomScoreDisplay {
    document: Document,
}

impl DomScoreDisplay {
    const SCORE_CLASS: &'static str = "currentScore";
    const HIGH_SCORE_CLASS: &'static str = "highScore";

    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn set_text(&self, class: &str, text: &str) {
        if let Some(el) = self.document.get_elements_by_class_name(class).item(0) {
            el.set_inner_html(text);
        }
    }
}

impl ScoreDisplay for DomScoreDisplay {
    fn show_score(&mut self, text: &str) {
        self.set_text(Self::SCORE_CLASS, text);
    }

    fn show_high_score(&mut self, text: &str) {
        self.set_text(Self::HIGH_SCORE_CLASS, text);
    }
}
