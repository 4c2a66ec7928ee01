//! Terminal rendering — all terminal I/O lives here.
//!
//! `TerminalCanvas` maps the game's pixel canvas onto terminal cells and
//! queues crossterm commands for each draw call.  The two bottom rows hold
//! the controls panel.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use survival_shooter::entities::Rect;
use survival_shooter::game_loop::ControlPanel;
use survival_shooter::render::{self, Canvas};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HINT: Color = Color::DarkGrey;

fn terminal_color(color: render::Color) -> Color {
    match color {
        render::Color::Black => Color::Black,
        render::Color::White => Color::White,
        render::Color::Red => Color::Red,
        render::Color::Green => Color::Green,
        render::Color::Blue => Color::Blue,
        render::Color::Cyan => Color::Cyan,
        render::Color::Yellow => Color::Yellow,
    }
}

/// Rows reserved under the play area for the controls panel.
const PANEL_ROWS: u16 = 2;

/// Points sampled along a circle outline.
const CIRCLE_SAMPLES: usize = 48;

pub struct TerminalCanvas<W: Write> {
    out: W,
    /// Logical canvas size in pixels.
    width: f64,
    height: f64,
    cols: u16,
    rows: u16,
    secondary_controls_visible: bool,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, width: f64, height: f64, cols: u16, rows: u16) -> Self {
        Self {
            out,
            width,
            height,
            cols,
            rows,
            secondary_controls_visible: true,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(PANEL_ROWS).max(1)
    }

    fn to_col(&self, x: f64) -> f64 {
        x * self.cols as f64 / self.width
    }

    fn to_row(&self, y: f64) -> f64 {
        y * self.play_rows() as f64 / self.height
    }

    /// Cell for a pixel, or `None` when it falls outside the play area.
    fn cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let col = self.to_col(x).floor();
        let row = self.to_row(y).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f64 || row >= self.play_rows() as f64 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    fn draw_controls_panel(&mut self) -> std::io::Result<()> {
        let top = self.rows.saturating_sub(PANEL_ROWS);
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(cursor::MoveTo(1, top))?;
        self.out.queue(Print(
            "P1  WASD : Move   SPACE : Shoot   Q : Shield   E : Dash   R : Restart   ESC : Quit",
        ))?;
        if self.secondary_controls_visible {
            self.out.queue(cursor::MoveTo(1, top + 1))?;
            self.out.queue(Print("P2  ← ↑ → ↓ : Move   ENTER : Shoot"))?;
        }
        Ok(())
    }
}

impl<W: Write> ControlPanel for TerminalCanvas<W> {
    fn hide_secondary_player(&mut self) {
        self.secondary_controls_visible = false;
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    type Error = std::io::Error;

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: render::Color) -> std::io::Result<()> {
        let play_rows = self.play_rows() as f64;
        let c0 = self.to_col(rect.x).floor().max(0.0);
        let c1 = self.to_col(rect.x + rect.width).ceil().min(self.cols as f64);
        let r0 = self.to_row(rect.y).floor().max(0.0);
        let r1 = self.to_row(rect.y + rect.height).ceil().min(play_rows);
        if c1 <= c0 || r1 <= r0 {
            return Ok(());
        }

        let span = "█".repeat((c1 - c0) as usize);
        self.out.queue(style::SetForegroundColor(terminal_color(color)))?;
        for row in r0 as u16..r1 as u16 {
            self.out.queue(cursor::MoveTo(c0 as u16, row))?;
            self.out.queue(Print(&span))?;
        }
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        _line_width: f64,
        color: render::Color,
    ) -> std::io::Result<()> {
        self.out.queue(style::SetForegroundColor(terminal_color(color)))?;
        for i in 0..CIRCLE_SAMPLES {
            let theta = i as f64 / CIRCLE_SAMPLES as f64 * std::f64::consts::TAU;
            if let Some((col, row)) = self.cell(cx + radius * theta.cos(), cy + radius * theta.sin()) {
                self.out.queue(cursor::MoveTo(col, row))?;
                self.out.queue(Print("·"))?;
            }
        }
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        _font_px: u16,
        color: render::Color,
    ) -> std::io::Result<()> {
        // Baseline sits on the row below the glyphs.
        let Some((col, row)) = self.cell(x.max(0.0), (y - 1.0).max(0.0)) else {
            return Ok(());
        };
        let room = self.cols.saturating_sub(col) as usize;
        let clipped: String = text.chars().take(room).collect();
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(terminal_color(color)))?;
        self.out.queue(Print(clipped))?;
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.draw_controls_panel()?;
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
