//! Game state and core simulation types
//!
//! All state that must be persisted for snapshots/determinism lives here.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Rect};
use crate::consts::*;
use crate::highscores::HighScore;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird is flying, pipes are scrolling
    #[default]
    Playing,
    /// Bird hit a pipe or fell out of the field; waits for a flap to restart
    GameOver,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Bird cleared a single pipe (half a pair)
    PipePassed { score: f64 },
    /// The best score went up and should be persisted
    NewHighScore { high_score: f64 },
    /// Run ended this tick
    GameOver { score: f64 },
}

/// The player's bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_START_X, BIRD_START_Y),
            size: Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
            vel_y: 0.0,
        }
    }
}

impl Bird {
    /// Apply gravity and move, clamping at the top of the field
    ///
    /// The velocity is left untouched at the clamp, so a bird pinned to the
    /// ceiling keeps its upward velocity until gravity cancels it.
    pub fn integrate(&mut self, gravity: f32) {
        self.vel_y += gravity;
        self.pos.y = (self.pos.y + self.vel_y).max(0.0);
    }

    /// Instant upward velocity, overriding whatever gravity accumulated
    pub fn flap(&mut self) {
        self.vel_y = FLAP_VELOCITY;
    }

    /// Back to the spawn point (velocity is set by the following flap)
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(BIRD_START_X, BIRD_START_Y);
    }

    /// Fallen below the bottom of the field
    pub fn is_out_of_field(&self, field_height: f32) -> bool {
        self.pos.y > field_height
    }
}

impl Bounds for Bird {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Which half of a pipe pair (selects the sprite only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeKind {
    Top,
    Bottom,
}

/// A single pipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    pub kind: PipeKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Already counted toward the score
    pub passed: bool,
}

impl Pipe {
    pub fn new(kind: PipeKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, y),
            size: Vec2::new(PIPE_WIDTH, PIPE_HEIGHT),
            passed: false,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully past the left edge of the field
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.pos.x < -PIPE_WIDTH
    }
}

impl Bounds for Pipe {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap placement RNG
    pub rng: Pcg32,
    /// Simulation tick counter (frozen while game over)
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Live pipes in spawn order, which is also ascending x
    pub pipes: VecDeque<Pipe>,
    /// Current run score (0.5 per pipe)
    pub score: f64,
    /// Best score across runs
    pub high_score: HighScore,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Playing,
            bird: Bird::default(),
            pipes: VecDeque::new(),
            score: 0.0,
            high_score: HighScore::default(),
        }
    }

    /// Create a game state that starts from a previously stored best score
    pub fn with_high_score(seed: u64, high_score: HighScore) -> Self {
        Self {
            high_score,
            ..Self::new(seed)
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Start a fresh run, keeping the best score and RNG stream
    pub fn reset(&mut self) {
        self.bird.respawn();
        self.pipes.clear();
        self.score = 0.0;
        self.phase = GamePhase::Playing;
    }

    /// Flap the bird; restarts first if the run is over
    ///
    /// Returns true if the flap restarted the game.
    pub fn flap(&mut self) -> bool {
        let restarted = self.is_game_over();
        if restarted {
            self.reset();
        }
        self.bird.flap();
        restarted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_spawns_bird() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bird.pos, Vec2::new(45.0, 320.0));
        assert_eq!(state.bird.size, Vec2::new(34.0, 24.0));
        assert_eq!(state.bird.vel_y, 0.0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0.0);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut state = GameState::new(1);
        state.bird.vel_y = 9.2;
        assert!(!state.flap());
        assert_eq!(state.bird.vel_y, FLAP_VELOCITY);
        // Position is not touched by the flap itself
        assert_eq!(state.bird.pos.y, BIRD_START_Y);
    }

    #[test]
    fn test_flap_while_game_over_resets() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.score = 7.5;
        state.bird.pos.y = 700.0;
        state.pipes.push_back(Pipe::new(PipeKind::Top, 100.0, -200.0));
        state.pipes.push_back(Pipe::new(PipeKind::Bottom, 100.0, 472.0));
        state.high_score.record_pass(7.5);

        assert!(state.flap());
        assert_eq!(state.score, 0.0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bird.pos, Vec2::new(BIRD_START_X, BIRD_START_Y));
        assert_eq!(state.bird.vel_y, FLAP_VELOCITY);
        // Best survives the reset
        assert_eq!(state.high_score.best(), 7.5);
    }

    #[test]
    fn test_integrate_clamps_at_ceiling_without_zeroing_velocity() {
        let mut bird = Bird::default();
        bird.pos.y = 2.0;
        bird.vel_y = -6.0;
        bird.integrate(GRAVITY);
        assert_eq!(bird.pos.y, 0.0);
        assert!((bird.vel_y - (-5.6)).abs() < 1e-6);
    }

    #[test]
    fn test_pipe_offscreen_threshold() {
        let mut pipe = Pipe::new(PipeKind::Top, -PIPE_WIDTH, 0.0);
        assert!(!pipe.is_offscreen());
        pipe.pos.x -= 0.5;
        assert!(pipe.is_offscreen());
    }
}
