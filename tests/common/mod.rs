//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::convert::Infallible;

use rand::rngs::StdRng;
use rand::SeedableRng;

use survival_shooter::compute::init_state;
use survival_shooter::config::GameConfig;
use survival_shooter::entities::{Bullet, Enemy, GameState, PowerUp, PowerUpKind, Rect};
use survival_shooter::render::{Canvas, Color};

/// 800x600 state with spawn timers pushed far out so tests only see the
/// entities they place themselves.
pub fn make_state() -> GameState {
    let config = GameConfig {
        enemy_spawn_interval_ms: 1_000_000,
        power_up_spawn_interval_ms: 1_000_000,
        ..GameConfig::default()
    };
    init_state(&config)
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn enemy_at(x: f64, y: f64, health: i32) -> Enemy {
    Enemy {
        x,
        y,
        width: 50.0,
        height: 50.0,
        speed: 0.0,
        health,
    }
}

pub fn bullet_at(x: f64, y: f64) -> Bullet {
    Bullet {
        x,
        y,
        width: 10.0,
        height: 10.0,
        speed: 0.0,
    }
}

pub fn power_up_at(x: f64, y: f64, kind: PowerUpKind, spawn_time_ms: u64) -> PowerUp {
    PowerUp {
        x,
        y,
        width: 30.0,
        height: 30.0,
        kind,
        spawn_time_ms,
        lifetime_ms: 10_000,
        remaining_ms: 10_000,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Rect(Rect, Color),
    Circle { cx: f64, cy: f64, radius: f64, color: Color },
    Text { text: String, x: f64, y: f64, font_px: u16, color: Color },
    Present,
}

/// Canvas that remembers every call instead of drawing.
#[derive(Default)]
pub struct RecordingCanvas {
    pub width: f64,
    pub height: f64,
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rects_of(&self, color: Color) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect(r, col) if *col == color => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    type Error = Infallible;

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Rect(rect, color));
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        _line_width: f64,
        color: Color,
    ) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Circle { cx, cy, radius, color });
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font_px: u16,
        color: Color,
    ) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            font_px,
            color,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Present);
        Ok(())
    }
}
