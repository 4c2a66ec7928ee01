//! Enemy and power-up spawning.
//!
//! Spawns are driven by the frame clock: each `SpawnTimer` accumulates the
//! elapsed time handed to `tick` and fires once per interval crossed.
//! A starved frame can therefore fire several times.

use log::debug;
use rand::Rng;

use crate::consts::{
    ENEMY_BASE_HEALTH, ENEMY_HEALTH_PER_WAVE, ENEMY_SIZE, ENEMY_SPAWN_Y, ENEMY_SPEED_PER_WAVE,
    POWER_UP_SIZE,
};
use crate::entities::{Enemy, PowerUp, PowerUpKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnTimer {
    pub interval_ms: u64,
    pub accumulated_ms: u64,
}

impl SpawnTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            accumulated_ms: 0,
        }
    }

    /// Add `elapsed_ms` and return how many intervals were completed.
    pub fn advance(&mut self, elapsed_ms: u64) -> u64 {
        if self.interval_ms == 0 {
            return 0;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let fires = self.accumulated_ms / self.interval_ms;
        self.accumulated_ms %= self.interval_ms;
        fires
    }
}

/// A new enemy just above the visible area.  Speed and health scale with
/// `wave`.
pub fn spawn_enemy(width: f64, wave: u32, rng: &mut impl Rng) -> Enemy {
    let max_x = (width - ENEMY_SIZE).max(0.0);
    let x = if max_x > 0.0 { rng.gen_range(0.0..max_x) } else { 0.0 };
    let speed = rng.gen_range(1.0..3.0) + wave as f64 * ENEMY_SPEED_PER_WAVE;
    let health = ENEMY_BASE_HEALTH + wave as i32 * ENEMY_HEALTH_PER_WAVE;
    debug!("enemy spawned at x={x:.1} speed={speed:.2} health={health}");
    Enemy {
        x,
        y: ENEMY_SPAWN_Y,
        width: ENEMY_SIZE,
        height: ENEMY_SIZE,
        speed,
        health,
    }
}

/// A new power-up anywhere inside the canvas, of a uniformly random kind.
pub fn spawn_power_up(
    width: f64,
    height: f64,
    now_ms: u64,
    lifetime_ms: u64,
    rng: &mut impl Rng,
) -> PowerUp {
    let max_x = (width - POWER_UP_SIZE).max(0.0);
    let max_y = (height - POWER_UP_SIZE).max(0.0);
    let x = if max_x > 0.0 { rng.gen_range(0.0..max_x) } else { 0.0 };
    let y = if max_y > 0.0 { rng.gen_range(0.0..max_y) } else { 0.0 };
    let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
    debug!("power-up {kind:?} spawned at ({x:.1}, {y:.1})");
    PowerUp {
        x,
        y,
        width: POWER_UP_SIZE,
        height: POWER_UP_SIZE,
        kind,
        spawn_time_ms: now_ms,
        lifetime_ms,
        remaining_ms: lifetime_ms,
    }
}
