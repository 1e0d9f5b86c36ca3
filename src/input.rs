//! Input mapping
//!
//! Key presses and touches all collapse into a single action: flap.

/// A raw input notification from the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Key pressed, identified by its `KeyboardEvent.code` (e.g. "Space")
    KeyDown(String),
    TouchStart,
    TouchEnd,
}

/// What the game should do in response to input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Jump (and restart first if the game is over)
    Flap,
}

/// Key codes that make the bird flap
pub const FLAP_KEYS: [&str; 3] = ["Space", "ArrowUp", "KeyX"];

/// Map a platform event to a game action, `None` for ignored input
pub fn map_input(event: &InputEvent) -> Option<Action> {
    match event {
        InputEvent::KeyDown(code) if FLAP_KEYS.contains(&code.as_str()) => Some(Action::Flap),
        InputEvent::TouchStart => Some(Action::Flap),
        InputEvent::KeyDown(_) | InputEvent::TouchEnd => None,
    }
}
