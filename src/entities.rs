//! All game entity types — pure data, no logic.

use crate::consts::{BULLET_SIZE, BULLET_SPEED};
use crate::spawner::SpawnTimer;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in canvas pixels (origin top-left, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Heals 20, capped at full health.
    Health,
    /// Forces the shield on until the shield key overwrites it next frame.
    Shield,
    /// Permanent +2 movement speed.
    Speed,
    /// +2 speed for every bullet currently in flight.
    Bullet,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Health,
        PowerUpKind::Shield,
        PowerUpKind::Speed,
        PowerUpKind::Bullet,
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: PowerUpKind,
    /// Game clock reading when the item appeared.
    pub spawn_time_ms: u64,
    /// Total lifetime.
    pub lifetime_ms: u64,
    /// Recomputed every frame from the clock; never increases.
    pub remaining_ms: u64,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Pixels travelled upward per frame.
    pub speed: f64,
}

impl Bullet {
    /// A bullet leaving the top-centre of the player.
    pub fn fired_by(player: &Player) -> Self {
        Bullet {
            x: player.x + player.width / 2.0 - BULLET_SIZE / 2.0,
            y: player.y,
            width: BULLET_SIZE,
            height: BULLET_SIZE,
            speed: BULLET_SPEED,
        }
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Current movement speed in pixels per frame.
    pub speed: f64,
    /// Speed restored when a dash ends.
    pub base_speed: f64,
    pub health: i32,
    pub score: u32,
    pub bullets: Vec<Bullet>,
    pub shield_active: bool,
    /// Counts down by a fixed step each frame; a dash is allowed at <= 0.
    pub dash_cooldown_ms: i64,
    /// Clock reading at which an active dash boost ends.
    pub dash_until_ms: Option<u64>,
    pub last_shot_ms: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Pixels travelled downward per frame.
    pub speed: f64,
    pub health: i32,
}

/// Player stats restored by a restart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerDefaults {
    pub size: f64,
    pub speed: f64,
    pub health: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    /// Difficulty multiplier for newly spawned enemies.
    pub wave: u32,
    /// Milliseconds of game time, the sum of every frame's elapsed time.
    pub clock_ms: u64,
    pub frame: u64,
    pub status: GameStatus,
    pub enemy_timer: SpawnTimer,
    pub power_up_timer: SpawnTimer,
    /// Lifetime given to newly spawned power-ups.
    pub power_up_lifetime_ms: u64,
    pub defaults: PlayerDefaults,
    pub width: f64,
    pub height: f64,
}
