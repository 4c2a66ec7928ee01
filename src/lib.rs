//! Survival shooter: dodge and shoot falling enemies, grab timed power-ups.
//!
//! - `entities`: pure data for everything on screen
//! - `compute`: the per-frame simulation step and restart
//! - `spawner`: frame-driven spawn timers and entity factories
//! - `collision`: axis-aligned box overlap
//! - `input`: key-state snapshot read each frame
//! - `render`: draw pass over an abstract `Canvas`
//! - `game_loop`: ties tick and draw together for one frame

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod render;
pub mod spawner;

/// Gameplay constants.
pub mod consts {
    pub const PLAYER_SIZE: f64 = 50.0;
    pub const PLAYER_SPEED: f64 = 5.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Distance of the player's spawn point from the bottom edge.
    pub const PLAYER_BOTTOM_OFFSET: f64 = 100.0;

    pub const BULLET_SIZE: f64 = 10.0;
    pub const BULLET_SPEED: f64 = 6.0;
    pub const SHOT_INTERVAL_MS: u64 = 300;

    pub const DASH_MULTIPLIER: f64 = 3.0;
    pub const DASH_COOLDOWN_MS: i64 = 2000;
    pub const DASH_DURATION_MS: u64 = 300;
    /// Fixed per-frame cooldown decrement, not measured from real delta.
    pub const COOLDOWN_STEP_MS: i64 = 16;

    pub const ENEMY_SIZE: f64 = 50.0;
    pub const ENEMY_SPAWN_Y: f64 = -50.0;
    pub const ENEMY_BASE_HEALTH: i32 = 30;
    pub const ENEMY_HEALTH_PER_WAVE: i32 = 5;
    pub const ENEMY_SPEED_PER_WAVE: f64 = 0.2;
    pub const CONTACT_DAMAGE: i32 = 10;
    pub const BULLET_DAMAGE: i32 = 20;
    pub const KILL_SCORE: u32 = 10;

    pub const POWER_UP_SIZE: f64 = 30.0;
    pub const HEAL_AMOUNT: i32 = 20;
    pub const SPEED_BONUS: f64 = 2.0;
    pub const BULLET_SPEED_BONUS: f64 = 2.0;
}
