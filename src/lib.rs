//! Flappy Bird - A single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, score)
//! - `scheduler`: Frame clock and fixed-cadence pipe spawn timer
//! - `game`: Game loop driver tying simulation, input, storage and output together
//! - `input`: Key/touch event mapping
//! - `highscores`: Persisted best score
//! - `persistence`: Scalar storage backends
//! - `renderer`: Renderer seam and the 2D canvas implementation
//! - `platform`: Score display seam and DOM bindings

pub mod game;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::HighScore;
pub use settings::{AssetTheme, Settings};

/// Game configuration constants
pub mod consts {
    /// Playing field dimensions
    pub const FIELD_WIDTH: f32 = 360.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Bird sprite size (408/228 = 17/12 aspect)
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;
    /// Bird spawn point
    pub const BIRD_START_X: f32 = FIELD_WIDTH / 8.0;
    pub const BIRD_START_Y: f32 = FIELD_HEIGHT / 2.0;

    /// Pipe sprite size (384/3072 = 1/8 aspect)
    pub const PIPE_WIDTH: f32 = 64.0;
    pub const PIPE_HEIGHT: f32 = 512.0;
    /// Pipes enter at the right edge of the field
    pub const PIPE_START_X: f32 = FIELD_WIDTH;
    /// Vertical gap between a top and bottom pipe
    pub const OPENING_SPACE: f32 = FIELD_HEIGHT / 4.0;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.4;
    /// Velocity assigned on flap (units/tick, negative is up)
    pub const FLAP_VELOCITY: f32 = -6.0;
    /// Horizontal pipe speed (units/tick)
    pub const PIPE_VELOCITY_X: f32 = -2.0;

    /// Score awarded per pipe (two pipes per pair)
    pub const SCORE_PER_PIPE: f32 = 0.5;

    /// Seconds between pipe pair spawns
    pub const SPAWN_INTERVAL_SECS: f64 = 1.5;
    /// Longest frame delta fed to the spawn timer (tab in background etc.)
    pub const MAX_FRAME_DT: f64 = 0.1;
}
