//! Draw pass.
//!
//! The simulation never touches a screen directly: it describes each frame
//! as fills, strokes and text on a `Canvas`.  No game logic is performed
//! here; this module only translates state into draw calls.

use crate::entities::{GameState, GameStatus, Rect};

/// Colours used by the draw pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Cyan,
    Yellow,
}

const C_PLAYER: Color = Color::Blue;
const C_SHIELD: Color = Color::Cyan;
const C_BULLET: Color = Color::Red;
const C_ENEMY: Color = Color::Green;
const C_POWER_UP: Color = Color::Yellow;
const C_POWER_UP_LABEL: Color = Color::Black;
const C_HUD: Color = Color::White;
const C_GAME_OVER: Color = Color::Red;

const SHIELD_LINE_WIDTH: f64 = 5.0;
const LABEL_FONT_PX: u16 = 12;
const HUD_FONT_PX: u16 = 20;
const GAME_OVER_FONT_PX: u16 = 40;

/// A 2D drawing surface in canvas pixels.
pub trait Canvas {
    type Error;

    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn clear(&mut self) -> Result<(), Self::Error>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error>;
    fn stroke_circle(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        line_width: f64,
        color: Color,
    ) -> Result<(), Self::Error>;
    /// `y` is the text baseline.
    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font_px: u16,
        color: Color,
    ) -> Result<(), Self::Error>;

    /// Push the finished frame out, if the surface buffers.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Countdown label shown on a power-up, e.g. `"9.5s"`.
pub fn countdown_label(remaining_ms: u64) -> String {
    format!("{:.1}s", remaining_ms as f64 / 1000.0)
}

/// Render one complete frame.
pub fn draw_frame<C: Canvas>(canvas: &mut C, state: &GameState) -> Result<(), C::Error> {
    canvas.clear()?;

    let p = &state.player;
    canvas.fill_rect(Rect::new(p.x, p.y, p.width, p.height), C_PLAYER)?;
    if p.shield_active {
        canvas.stroke_circle(
            p.x + p.width / 2.0,
            p.y + p.height / 2.0,
            p.width,
            SHIELD_LINE_WIDTH,
            C_SHIELD,
        )?;
    }

    for b in &p.bullets {
        canvas.fill_rect(Rect::new(b.x, b.y, b.width, b.height), C_BULLET)?;
    }
    for e in &state.enemies {
        canvas.fill_rect(Rect::new(e.x, e.y, e.width, e.height), C_ENEMY)?;
    }
    for pu in &state.power_ups {
        canvas.fill_rect(Rect::new(pu.x, pu.y, pu.width, pu.height), C_POWER_UP)?;
        canvas.fill_text(
            &countdown_label(pu.remaining_ms),
            pu.x + 2.0,
            pu.y + pu.height / 2.0,
            LABEL_FONT_PX,
            C_POWER_UP_LABEL,
        )?;
    }

    draw_hud(canvas, state)?;

    if state.status == GameStatus::GameOver {
        let (x, y) = (canvas.width() / 2.0 - 100.0, canvas.height() / 2.0);
        canvas.fill_text(
            "Game Over",
            x,
            y,
            GAME_OVER_FONT_PX,
            C_GAME_OVER,
        )?;
    }

    canvas.present()
}

fn draw_hud<C: Canvas>(canvas: &mut C, state: &GameState) -> Result<(), C::Error> {
    let lines = [
        format!("Health: {}", state.player.health),
        format!("Score: {}", state.player.score),
        format!("Wave: {}", state.wave),
    ];
    for (i, line) in lines.iter().enumerate() {
        canvas.fill_text(line, 10.0, 30.0 * (i as f64 + 1.0), HUD_FONT_PX, C_HUD)?;
    }
    Ok(())
}
