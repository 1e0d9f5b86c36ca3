//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (pipes in spawn order)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geometry::{Bounds, Rect, overlaps};
pub use spawn::{pipe_pair, spawn_pipes};
pub use state::{Bird, GameEvent, GamePhase, GameState, Pipe, PipeKind};
pub use tick::tick;
