//! Pipe pair generation
//!
//! Every spawn places a top and bottom pipe at the right edge of the field
//! with a randomized gap height.

use rand::Rng;

use super::state::{GameState, Pipe, PipeKind};
use crate::consts::*;

/// Build a top/bottom pipe pair for a random draw `r` in `[0, 1)`
///
/// The top pipe's y ends up in `[-PIPE_HEIGHT * 3/4, -PIPE_HEIGHT / 4)`, so its
/// lower end (and thus the gap) sits between a quarter and three quarters of a
/// pipe below the top of the field.
pub fn pipe_pair(r: f32) -> [Pipe; 2] {
    let top_y = -PIPE_HEIGHT / 4.0 - r * (PIPE_HEIGHT / 2.0);
    let bottom_y = top_y + PIPE_HEIGHT + OPENING_SPACE;
    [
        Pipe::new(PipeKind::Top, PIPE_START_X, top_y),
        Pipe::new(PipeKind::Bottom, PIPE_START_X, bottom_y),
    ]
}

/// Append a new pipe pair to the live sequence
///
/// Does nothing once the run is over; the skipped spawn is not queued.
/// Returns true if a pair was added.
pub fn spawn_pipes(state: &mut GameState) -> bool {
    if state.is_game_over() {
        return false;
    }

    let r: f32 = state.rng.random();
    let [top, bottom] = pipe_pair(r);
    log::trace!("Spawning pipes: gap top at {:.1}", top.pos.y + PIPE_HEIGHT);
    state.pipes.push_back(top);
    state.pipes.push_back(bottom);
    true
}
