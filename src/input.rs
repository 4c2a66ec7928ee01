//! Key-state snapshot.
//!
//! Key events overwrite the pressed flag for their key; the frame step
//! reads whatever the latest state is.  Names are lowercased on the way in
//! and on lookup so `"W"` and `"w"` are the same key.
//!
//! `HeldKeys` turns raw terminal key events into that snapshot.  Many
//! terminals never send key releases, only repeated presses while a key is
//! down, so a key counts as held only while its last press or repeat is
//! within the hold window.  A release event, when the terminal sends one,
//! drops the key early.

use std::collections::HashMap;

pub const KEY_UP: &str = "w";
pub const KEY_LEFT: &str = "a";
pub const KEY_DOWN: &str = "s";
pub const KEY_RIGHT: &str = "d";
pub const KEY_SHOOT: &str = " ";
pub const KEY_SHIELD: &str = "q";
pub const KEY_DASH: &str = "e";

#[derive(Clone, Debug, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.keys.insert(key.to_lowercase(), true);
    }

    pub fn release(&mut self, key: &str) {
        self.keys.insert(key.to_lowercase(), false);
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.keys
            .get(&key.to_lowercase())
            .copied()
            .unwrap_or(false)
    }

    /// Release every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Press/repeat timestamps per key, expired after a hold window.
#[derive(Clone, Debug)]
pub struct HeldKeys {
    hold_window_ms: u64,
    last_seen_ms: HashMap<String, u64>,
}

impl HeldKeys {
    pub fn new(hold_window_ms: u64) -> Self {
        Self {
            hold_window_ms,
            last_seen_ms: HashMap::new(),
        }
    }

    /// Record a press or an auto-repeat at `now_ms`.
    pub fn press(&mut self, key: &str, now_ms: u64) {
        self.last_seen_ms.insert(key.to_lowercase(), now_ms);
    }

    pub fn release(&mut self, key: &str) {
        self.last_seen_ms.remove(&key.to_lowercase());
    }

    pub fn clear(&mut self) {
        self.last_seen_ms.clear();
    }

    /// Forget keys not seen within the hold window and return the keys
    /// still held at `now_ms`.
    pub fn snapshot(&mut self, now_ms: u64) -> InputState {
        let window = self.hold_window_ms;
        self.last_seen_ms
            .retain(|_, seen| now_ms.saturating_sub(*seen) <= window);
        let mut input = InputState::new();
        for key in self.last_seen_ms.keys() {
            input.press(key);
        }
        input
    }
}
