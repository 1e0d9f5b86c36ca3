//! Rendering module
//!
//! The simulation only knows the `Renderer` trait. The browser build draws
//! sprites onto a 2D canvas; native runs use the headless renderer.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::settings::AssetTheme;
use crate::sim::GameState;

/// Text drawn over the field once the run ends
pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Draws a frame of the current game state
pub trait Renderer {
    /// Clear the previous frame, draw bird and pipes, and the game over
    /// overlay when the run has ended
    fn draw(&mut self, state: &GameState);

    /// Switch sprite sets
    fn set_theme(&mut self, _theme: AssetTheme) {}
}

/// Renderer that draws nothing and counts frames
#[derive(Debug, Default)]
pub struct Headless {
    pub frames: u64,
    pub game_over_frames: u64,
}

impl Renderer for Headless {
    fn draw(&mut self, state: &GameState) {
        self.frames += 1;
        if state.is_game_over() {
            self.game_over_frames += 1;
        }
    }
}
