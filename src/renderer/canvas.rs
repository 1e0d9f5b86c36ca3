//! 2D canvas renderer (browser only)
//!
//! Draws the bird and pipe sprites with `CanvasRenderingContext2d`. Images
//! that are still loading or failed to load are simply not drawn.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{GAME_OVER_TEXT, Renderer};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::settings::{AssetSet, AssetTheme};
use crate::sim::{GameState, PipeKind};

/// Loaded sprites for one theme
struct Sprites {
    bird: Option<HtmlImageElement>,
    top_pipe: Option<HtmlImageElement>,
    bottom_pipe: Option<HtmlImageElement>,
}

impl Sprites {
    fn load(assets: AssetSet) -> Self {
        Self {
            bird: load_image(assets.bird),
            top_pipe: load_image(assets.top_pipe),
            bottom_pipe: load_image(assets.bottom_pipe),
        }
    }
}

fn load_image(src: &str) -> Option<HtmlImageElement> {
    match HtmlImageElement::new() {
        Ok(img) => {
            img.set_src(src);
            Some(img)
        }
        Err(e) => {
            log::warn!("Failed to create image for {}: {:?}", src, e);
            None
        }
    }
}

/// Renderer backed by a canvas 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, theme: AssetTheme) -> Self {
        Self {
            ctx,
            sprites: Sprites::load(theme.assets()),
        }
    }

    fn draw_sprite(&self, img: Option<&HtmlImageElement>, x: f32, y: f32, w: f32, h: f32) {
        let Some(img) = img else { return };
        // Not loaded yet or broken
        if !img.complete() || img.natural_width() == 0 {
            return;
        }
        let result: Result<(), JsValue> = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                img, x as f64, y as f64, w as f64, h as f64,
            );
        if let Err(e) = result {
            log::warn!("Render error: {:?}", e);
        }
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, state: &GameState) {
        self.ctx
            .clear_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);

        let bird = &state.bird;
        self.draw_sprite(
            self.sprites.bird.as_ref(),
            bird.pos.x,
            bird.pos.y,
            bird.size.x,
            bird.size.y,
        );

        for pipe in &state.pipes {
            let img = match pipe.kind {
                PipeKind::Top => self.sprites.top_pipe.as_ref(),
                PipeKind::Bottom => self.sprites.bottom_pipe.as_ref(),
            };
            self.draw_sprite(img, pipe.pos.x, pipe.pos.y, pipe.size.x, pipe.size.y);
        }

        if state.is_game_over() {
            self.ctx.set_fill_style_str("white");
            self.ctx.set_font("45px sans-serif");
            self.ctx.fill_text(GAME_OVER_TEXT, 50.0, 50.0).ok();
        }
    }

    fn set_theme(&mut self, theme: AssetTheme) {
        log::info!("Switching to {} theme", theme.as_str());
        self.sprites = Sprites::load(theme.assets());
    }
}
