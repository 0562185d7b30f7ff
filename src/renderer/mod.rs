//! SDL2 canvas rendering
//!
//! One frame = clear, two paddles and the ball as filled rects, the winner
//! banner while the round is ended, present. The caller holds the shared
//! lock for the whole frame, matching the input poller's write discipline.

use anyhow::{Error, Result};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::surface::Surface;
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

use crate::consts::*;
use crate::sim::{MatchPhase, MatchState};

const BACKGROUND: Color = Color::RGB(0, 0, 0);
const FOREGROUND: Color = Color::RGB(255, 255, 255);

/// Where the winner line lands: a 200x40 box centered on the playfield
fn banner_rect() -> Rect {
    Rect::new(WIDTH as i32 / 2 - 100, HEIGHT as i32 / 2 - 20, 200, 40)
}

pub struct Renderer<'ttf> {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    font: Font<'ttf, 'static>,
    /// Winner line rasterized once per round, on the transition edge
    banner: Option<Surface<'static>>,
}

impl<'ttf> Renderer<'ttf> {
    pub fn new(canvas: Canvas<Window>, font: Font<'ttf, 'static>) -> Self {
        let texture_creator = canvas.texture_creator();
        Self {
            canvas,
            texture_creator,
            font,
            banner: None,
        }
    }

    /// Draw and present one frame from the current state.
    ///
    /// Takes the state mutably for the one renderer-owned flag:
    /// `winner_announced` is set when the banner text is rasterized so the
    /// TTF work happens exactly once per round.
    pub fn draw_frame(&mut self, state: &mut MatchState) -> Result<()> {
        self.canvas.set_draw_color(BACKGROUND);
        self.canvas.clear();

        self.canvas.set_draw_color(FOREGROUND);
        let left = Rect::new(0, state.paddle_left.y, PADDLE_WIDTH, PADDLE_HEIGHT);
        let right = Rect::new(
            (WIDTH - PADDLE_WIDTH) as i32,
            state.paddle_right.y,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        );
        let ball = Rect::new(
            state.ball.pos.x as i32,
            state.ball.pos.y as i32,
            BALL_SIZE,
            BALL_SIZE,
        );
        for rect in [left, right, ball] {
            self.canvas.fill_rect(rect).map_err(Error::msg)?;
        }

        match state.phase {
            MatchPhase::Ended => self.overlay_banner(state)?,
            MatchPhase::Playing => self.banner = None,
        }

        self.canvas.present();
        Ok(())
    }

    fn overlay_banner(&mut self, state: &mut MatchState) -> Result<()> {
        let Some(winner) = state.winner else {
            return Ok(());
        };

        if !state.winner_announced {
            let text = format!("{} wins!", winner.label());
            self.banner = Some(self.font.render(&text).solid(FOREGROUND)?);
            state.winner_announced = true;
        }

        if let Some(surface) = &self.banner {
            let texture = self.texture_creator.create_texture_from_surface(surface)?;
            self.canvas
                .copy(&texture, None, Some(banner_rect()))
                .map_err(Error::msg)?;
        }
        Ok(())
    }
}
