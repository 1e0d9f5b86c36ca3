//! Game loop driver
//!
//! Owns the simulation state and its collaborators. The platform calls
//! `frame` once per display refresh and `push_input` from its event handlers;
//! everything else happens inside `frame`, one writer at a time.

use std::collections::VecDeque;

use crate::highscores::HighScore;
use crate::input::{Action, InputEvent, map_input};
use crate::persistence::ScalarStore;
use crate::platform::{ScoreDisplay, format_high_score, format_score};
use crate::renderer::Renderer;
use crate::scheduler::Scheduler;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, spawn_pipes, tick};

/// Game instance holding all state
pub struct Game<R, D, S> {
    state: GameState,
    scheduler: Scheduler,
    inputs: VecDeque<InputEvent>,
    settings: Settings,
    renderer: R,
    display: D,
    store: S,
}

impl<R, D, S> Game<R, D, S>
where
    R: Renderer,
    D: ScoreDisplay,
    S: ScalarStore,
{
    /// Start a session, picking up the stored best score
    ///
    /// The renderer is expected to already use `settings.theme`.
    pub fn new(seed: u64, settings: Settings, renderer: R, mut display: D, store: S) -> Self {
        let high_score = HighScore::load(&store);
        display.show_high_score(&format_high_score(high_score.best()));

        Self {
            state: GameState::with_high_score(seed, high_score),
            scheduler: Scheduler::new(),
            inputs: VecDeque::new(),
            settings,
            renderer,
            display,
            store,
        }
    }

    /// Swap in a different scheduler (e.g. a custom spawn cadence)
    pub fn with_scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Queue an input event for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.inputs.push_back(event);
    }

    /// Run one display frame at `time_ms`
    ///
    /// Order: queued input, due pipe spawns, one simulation step, output.
    pub fn frame(&mut self, time_ms: f64) -> Vec<GameEvent> {
        while let Some(event) = self.inputs.pop_front() {
            if let Some(action) = map_input(&event) {
                self.apply(action);
            }
        }

        let work = self.scheduler.frame(time_ms);
        for _ in 0..work.spawns {
            spawn_pipes(&mut self.state);
        }

        let events = tick(&mut self.state);
        for event in &events {
            self.handle_event(event);
        }

        self.renderer.draw(&self.state);
        events
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Flap => {
                log::debug!("Bird flying!");
                if self.state.flap() {
                    log::info!("Game restarted");
                    self.display.show_score(&format_score(self.state.score));
                }
            }
        }
    }

    fn handle_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::PipePassed { score } => {
                self.display.show_score(&format_score(score));
            }
            GameEvent::NewHighScore { high_score } => {
                self.display.show_high_score(&format_high_score(high_score));
                if let Err(e) = self.state.high_score.save(&mut self.store) {
                    log::warn!("Failed to save high score: {}", e);
                }
            }
            GameEvent::GameOver { .. } => {}
        }
    }

    /// Flip the sprite theme and persist the choice
    pub fn toggle_theme(&mut self) {
        self.settings.toggle_theme();
        self.settings.save();
        self.renderer.set_theme(self.settings.theme);
        // Redraw right away so a paused (game over) screen picks up the change
        self.renderer.draw(&self.state);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::persistence::MemoryStore;
    use crate::renderer::Headless;
    use crate::settings::AssetTheme;
    use crate::sim::{GamePhase, Pipe, PipeKind};

    #[derive(Default)]
    struct RecordingDisplay {
        scores: Vec<String>,
        high_scores: Vec<String>,
    }

    impl ScoreDisplay for RecordingDisplay {
        fn show_score(&mut self, text: &str) {
            self.scores.push(text.to_string());
        }

        fn show_high_score(&mut self, text: &str) {
            self.high_scores.push(text.to_string());
        }
    }

    type TestGame = Game<Headless, RecordingDisplay, MemoryStore>;

    fn new_game(store: MemoryStore) -> TestGame {
        Game::new(
            7,
            Settings::default(),
            Headless::default(),
            RecordingDisplay::default(),
            store,
        )
    }

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[test]
    fn test_startup_shows_stored_high_score() {
        let game = new_game(MemoryStore::with_value(4.5));
        assert_eq!(game.state().high_score.best(), 4.5);
        assert_eq!(game.display().high_scores, ["High Score => 4.5"]);
    }

    #[test]
    fn test_frame_steps_and_renders() {
        let mut game = new_game(MemoryStore::new());
        game.frame(0.0);
        assert_eq!(game.state().time_ticks, 1);
        assert_eq!(game.renderer().frames, 1);
    }

    #[test]
    fn test_flap_input_is_applied_before_step() {
        let mut game = new_game(MemoryStore::new());
        game.push_input(InputEvent::KeyDown("Space".into()));
        game.frame(0.0);
        let bird = &game.state().bird;
        assert!((bird.vel_y - (-5.6)).abs() < 1e-4);
        assert!((bird.pos.y - 314.4).abs() < 1e-3);
    }

    #[test]
    fn test_ignored_input_does_nothing() {
        let mut game = new_game(MemoryStore::new());
        game.push_input(InputEvent::TouchEnd);
        game.push_input(InputEvent::KeyDown("KeyQ".into()));
        game.frame(0.0);
        assert!((game.state().bird.vel_y - GRAVITY).abs() < 1e-6);
    }

    #[test]
    fn test_pipes_spawn_on_wall_clock_cadence() {
        let mut game = new_game(MemoryStore::new());
        let mut t = 0.0;
        // Keep the bird in the air while time passes
        while t < 1600.0 {
            if game.state().bird.vel_y > 3.0 {
                game.push_input(InputEvent::TouchStart);
            }
            game.frame(t);
            t += FRAME_MS;
        }
        assert_eq!(game.state().pipes.len(), 2);
        assert_eq!(game.state().pipes[0].kind, PipeKind::Top);
        assert_eq!(game.state().pipes[1].kind, PipeKind::Bottom);
    }

    #[test]
    fn test_spawn_skipped_while_game_over() {
        let mut game = new_game(MemoryStore::new());
        game.state_mut().phase = GamePhase::GameOver;
        let mut t = 0.0;
        while t < 5000.0 {
            game.frame(t);
            t += FRAME_MS;
        }
        assert!(game.state().pipes.is_empty());
        assert!(game.renderer().game_over_frames > 0);
    }

    #[test]
    fn test_passing_pipes_updates_display_and_store() {
        let mut game = new_game(MemoryStore::with_value(0.5));
        let state = game.state_mut();
        state.bird.pos.x = 200.0;
        state.pipes.push_back(Pipe::new(PipeKind::Top, 100.0, -400.0));
        state.pipes.push_back(Pipe::new(PipeKind::Bottom, 100.0, 600.0));

        game.frame(0.0);

        assert_eq!(
            game.display().scores,
            ["Current Score => 0.5", "Current Score => 1"]
        );
        assert_eq!(
            game.display().high_scores,
            ["High Score => 0.5", "High Score => 1"]
        );
        assert_eq!(game.store().get().unwrap(), Some(1.0));
    }

    #[test]
    fn test_flap_after_game_over_restarts() {
        let mut game = new_game(MemoryStore::new());
        {
            let state = game.state_mut();
            state.phase = GamePhase::GameOver;
            state.score = 7.5;
            state.pipes.push_back(Pipe::new(PipeKind::Top, 100.0, -400.0));
        }
        game.push_input(InputEvent::KeyDown("ArrowUp".into()));
        game.frame(0.0);

        let state = game.state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0.0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird.pos.x, BIRD_START_X);
        assert_eq!(game.display().scores, ["Current Score => 0"]);
    }

    #[test]
    fn test_custom_spawn_cadence() {
        let mut game =
            new_game(MemoryStore::new()).with_scheduler(Scheduler::with_spawn_interval(0.05));
        game.frame(0.0);
        game.frame(50.0);
        game.frame(100.0);
        assert_eq!(game.state().pipes.len(), 4);
    }

    #[test]
    fn test_toggle_theme() {
        let mut game = new_game(MemoryStore::new());
        game.toggle_theme();
        assert_eq!(game.settings().theme, AssetTheme::Light);
        assert_eq!(game.renderer().frames, 1);
    }
}
