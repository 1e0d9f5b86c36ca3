//! Flappy Bird entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use flappy_bird::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use flappy_bird::input::InputEvent;
    use flappy_bird::persistence::LocalStorageStore;
    use flappy_bird::platform::dom::DomScoreDisplay;
    use flappy_bird::renderer::CanvasRenderer;
    use flappy_bird::{Game, Settings};

    type WebGame = Game<CanvasRenderer, DomScoreDisplay, LocalStorageStore>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Bird starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("board")
            .expect("no board canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let renderer = CanvasRenderer::new(ctx, settings.theme);
        let display = DomScoreDisplay::new(document);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            settings,
            renderer,
            display,
            LocalStorageStore::high_score(),
        )));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_theme_toggle(game.clone());
        request_animation_frame(game);

        log::info!("Flappy Bird running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<WebGame>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().push_input(InputEvent::KeyDown(event.code()));
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (flap)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                log::debug!("Touch start detected");
                game.borrow_mut().push_input(InputEvent::TouchStart);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end (only suppress the browser default)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                log::debug!("Touch end detected");
                game.borrow_mut().push_input(InputEvent::TouchEnd);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_theme_toggle(game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("darkModeToggle") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().toggle_theme();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<WebGame>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Bird (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the playable web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12345);
    headless::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Seeded session flown by a simple autopilot
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use flappy_bird::Game;
    use flappy_bird::consts::*;
    use flappy_bird::input::InputEvent;
    use flappy_bird::persistence::MemoryStore;
    use flappy_bird::platform::LogDisplay;
    use flappy_bird::renderer::Headless;
    use flappy_bird::settings::Settings;
    use flappy_bird::sim::{GameState, PipeKind};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 120;

    /// Flap when falling past the lower edge of the next gap
    fn should_flap(state: &GameState) -> bool {
        let bird = &state.bird;
        let gap_bottom = state
            .pipes
            .iter()
            .find(|p| p.kind == PipeKind::Bottom && p.right() >= bird.pos.x)
            .map(|p| p.pos.y)
            .unwrap_or(FIELD_HEIGHT * 0.6);
        bird.vel_y >= 0.0 && bird.pos.y + bird.size.y > gap_bottom - 24.0
    }

    pub fn run(seed: u64) {
        let mut game = Game::new(
            seed,
            Settings::default(),
            Headless::default(),
            LogDisplay,
            MemoryStore::new(),
        );

        let mut frames = 0;
        while frames < MAX_FRAMES && !game.state().is_game_over() {
            if should_flap(game.state()) {
                game.push_input(InputEvent::KeyDown("Space".to_string()));
            }
            game.frame(frames as f64 * FRAME_MS);
            frames += 1;
        }

        let state = game.state();
        log::info!(
            "Headless run finished after {} frames: score {}, best {}, {}",
            frames,
            state.score,
            state.high_score.best(),
            if state.is_game_over() { "crashed" } else { "survived" }
        );
    }
}
