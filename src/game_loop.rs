//! One frame of the game: simulate, then draw.

use rand::Rng;

use crate::compute::{init_state, restart, tick};
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus};
use crate::input::InputState;
use crate::render::{draw_frame, Canvas};

/// What the driver should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule the next frame.
    Continue,
    /// Terminal state reached; stop scheduling frames.
    GameOver,
}

/// The UI element holding the second player's controls, which solo play
/// hides on restart.
pub trait ControlPanel {
    fn hide_secondary_player(&mut self);
}

pub struct GameLoop<R: Rng> {
    state: GameState,
    rng: R,
}

impl<R: Rng> GameLoop<R> {
    pub fn new(config: &GameConfig, rng: R) -> Self {
        Self::with_state(init_state(config), rng)
    }

    pub fn with_state(state: GameState, rng: R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one frame that took `elapsed_ms` and draw the result.
    pub fn frame<C: Canvas>(
        &mut self,
        input: &InputState,
        elapsed_ms: u64,
        canvas: &mut C,
    ) -> Result<FrameOutcome, C::Error> {
        self.state = tick(&self.state, input, elapsed_ms, &mut self.rng);
        draw_frame(canvas, &self.state)?;
        Ok(match self.state.status {
            GameStatus::Playing => FrameOutcome::Continue,
            GameStatus::GameOver => FrameOutcome::GameOver,
        })
    }

    pub fn restart(&mut self, panel: &mut impl ControlPanel) {
        self.state = restart(&self.state);
        panel.hide_secondary_player();
    }
}
