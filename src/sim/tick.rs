//! Per-frame simulation tick
//!
//! Core game loop step that advances the simulation deterministically.

use super::geometry::overlaps;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Advance the game state by one frame
///
/// Does nothing while the game is over. Falling out of the field ends the run
/// but the rest of the tick (pipe movement, scoring, collisions, pruning) still
/// runs, so a pipe passed on the same frame still counts.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.is_game_over() {
        return events;
    }

    state.time_ticks += 1;

    // Bird movement
    state.bird.integrate(GRAVITY);
    if state.bird.is_out_of_field(FIELD_HEIGHT) {
        state.phase = GamePhase::GameOver;
    }

    // Pipe movement and scoring
    let bird_x = state.bird.pos.x;
    for pipe in state.pipes.iter_mut() {
        pipe.pos.x += PIPE_VELOCITY_X;

        if !pipe.passed && bird_x > pipe.right() {
            pipe.passed = true;
            state.score += f64::from(SCORE_PER_PIPE);
            events.push(GameEvent::PipePassed { score: state.score });

            if state.high_score.record_pass(state.score) {
                events.push(GameEvent::NewHighScore {
                    high_score: state.high_score.best(),
                });
            }
        }
    }

    // Collisions
    if state.pipes.iter().any(|pipe| overlaps(&state.bird, pipe)) {
        state.phase = GamePhase::GameOver;
    }

    // Drop pipes that scrolled off the left edge (front is always leftmost)
    while state.pipes.front().is_some_and(|p| p.is_offscreen()) {
        state.pipes.pop_front();
    }

    if state.is_game_over() {
        log::info!("Game over with score {}", state.score);
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}
