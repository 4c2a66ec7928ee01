//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, the input snapshot and an RNG handle)
//! and returns a brand-new `GameState`.  Side effects are limited to the
//! injected RNG and log output.

use log::{debug, info, trace};
use rand::Rng;

use crate::collision::is_colliding;
use crate::config::GameConfig;
use crate::consts::*;
use crate::entities::{
    Bullet, Enemy, GameState, GameStatus, Player, PlayerDefaults, PowerUp, PowerUpKind,
};
use crate::input::{
    InputState, KEY_DASH, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_SHIELD, KEY_SHOOT, KEY_UP,
};
use crate::spawner::{spawn_enemy, spawn_power_up, SpawnTimer};

// ── Constructors ─────────────────────────────────────────────────────────────

fn fresh_player(defaults: &PlayerDefaults, width: f64, height: f64) -> Player {
    Player {
        x: width / 2.0 - defaults.size / 2.0,
        y: height - PLAYER_BOTTOM_OFFSET,
        width: defaults.size,
        height: defaults.size,
        speed: defaults.speed,
        base_speed: defaults.speed,
        health: defaults.health,
        score: 0,
        bullets: Vec::new(),
        shield_active: false,
        dash_cooldown_ms: 0,
        dash_until_ms: None,
        last_shot_ms: None,
    }
}

/// Build the initial game state for the configured canvas.
pub fn init_state(config: &GameConfig) -> GameState {
    let defaults = PlayerDefaults {
        size: PLAYER_SIZE,
        speed: PLAYER_SPEED,
        health: PLAYER_MAX_HEALTH,
    };
    let (width, height) = (config.canvas_width, config.canvas_height);
    GameState {
        player: fresh_player(&defaults, width, height),
        enemies: Vec::new(),
        power_ups: Vec::new(),
        wave: 1,
        clock_ms: 0,
        frame: 0,
        status: GameStatus::Playing,
        enemy_timer: SpawnTimer::new(config.enemy_spawn_interval_ms),
        power_up_timer: SpawnTimer::new(config.power_up_spawn_interval_ms),
        power_up_lifetime_ms: config.power_up_lifetime_ms,
        defaults,
        width,
        height,
    }
}

/// Reset the player, clear the enemies and drop back to wave 1.
///
/// Power-ups, the clock and the spawn timers carry over.
pub fn restart(state: &GameState) -> GameState {
    info!("restart after frame {} with score {}", state.frame, state.player.score);
    GameState {
        player: fresh_player(&state.defaults, state.width, state.height),
        enemies: Vec::new(),
        wave: 1,
        status: GameStatus::Playing,
        ..state.clone()
    }
}

// ── Player actions ───────────────────────────────────────────────────────────

/// Apply held direction keys, keeping the player fully on the canvas.
pub fn move_player(player: &Player, input: &InputState, width: f64, height: f64) -> Player {
    let max_x = (width - player.width).max(0.0);
    let max_y = (height - player.height).max(0.0);
    let mut x = player.x;
    let mut y = player.y;
    if input.is_down(KEY_LEFT) {
        x -= player.speed;
    }
    if input.is_down(KEY_RIGHT) {
        x += player.speed;
    }
    if input.is_down(KEY_UP) {
        y -= player.speed;
    }
    if input.is_down(KEY_DOWN) {
        y += player.speed;
    }
    Player {
        x: x.clamp(0.0, max_x),
        y: y.clamp(0.0, max_y),
        ..player.clone()
    }
}

/// Whether the fire-rate cap allows a shot at `now_ms`.
pub fn can_shoot(player: &Player, now_ms: u64) -> bool {
    match player.last_shot_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) >= SHOT_INTERVAL_MS,
    }
}

/// Fire from the top-centre if the cap allows, otherwise return the player
/// unchanged.
pub fn player_shoot(player: &Player, now_ms: u64) -> Player {
    if !can_shoot(player, now_ms) {
        return player.clone();
    }
    let mut bullets = player.bullets.clone();
    bullets.push(Bullet::fired_by(player));
    Player {
        bullets,
        last_shot_ms: Some(now_ms),
        ..player.clone()
    }
}

/// Start a dash if the cooldown has run out.
pub fn dash(player: &Player, now_ms: u64) -> Player {
    if player.dash_cooldown_ms > 0 {
        return player.clone();
    }
    debug!("dash at {now_ms}ms");
    Player {
        speed: player.base_speed * DASH_MULTIPLIER,
        dash_cooldown_ms: DASH_COOLDOWN_MS,
        dash_until_ms: Some(now_ms + DASH_DURATION_MS),
        ..player.clone()
    }
}

/// Drop back to base speed once the dash boost has expired.
fn end_dash_if_expired(player: &Player, now_ms: u64) -> Player {
    match player.dash_until_ms {
        Some(until) if now_ms >= until => Player {
            speed: player.base_speed,
            dash_until_ms: None,
            ..player.clone()
        },
        _ => player.clone(),
    }
}

/// Apply a collected power-up.  `Shield` only lasts until the shield key
/// is read again on the next frame.
pub fn apply_power_up(player: &Player, kind: PowerUpKind) -> Player {
    debug!("power-up {kind:?} collected");
    match kind {
        PowerUpKind::Health => Player {
            health: (player.health + HEAL_AMOUNT).min(PLAYER_MAX_HEALTH),
            ..player.clone()
        },
        PowerUpKind::Shield => Player {
            shield_active: true,
            ..player.clone()
        },
        PowerUpKind::Speed => Player {
            speed: player.speed + SPEED_BONUS,
            base_speed: player.base_speed + SPEED_BONUS,
            ..player.clone()
        },
        PowerUpKind::Bullet => Player {
            bullets: player
                .bullets
                .iter()
                .map(|b| Bullet {
                    speed: b.speed + BULLET_SPEED_BONUS,
                    ..b.clone()
                })
                .collect(),
            ..player.clone()
        },
    }
}

/// Remaining lifetime of a power-up at `now_ms`, floored at zero.
pub fn power_up_remaining(power_up: &PowerUp, now_ms: u64) -> u64 {
    let elapsed = now_ms.saturating_sub(power_up.spawn_time_ms);
    power_up.lifetime_ms.saturating_sub(elapsed)
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame that took `elapsed_ms` of wall time.
/// Once the game is over the state is returned unchanged.
pub fn tick(
    state: &GameState,
    input: &InputState,
    elapsed_ms: u64,
    rng: &mut impl Rng,
) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    let frame = state.frame + 1;
    let now = state.clock_ms + elapsed_ms;
    trace!("frame {frame} at {now}ms");

    // ── 1. Spawn timers ──────────────────────────────────────────────────────
    let mut enemy_timer = state.enemy_timer;
    let mut power_up_timer = state.power_up_timer;
    let mut enemies = state.enemies.clone();
    let mut power_ups = state.power_ups.clone();
    for _ in 0..enemy_timer.advance(elapsed_ms) {
        enemies.push(spawn_enemy(state.width, state.wave, rng));
    }
    for _ in 0..power_up_timer.advance(elapsed_ms) {
        power_ups.push(spawn_power_up(
            state.width,
            state.height,
            now,
            state.power_up_lifetime_ms,
            rng,
        ));
    }

    // ── 2. Player input: move, shoot, shield, dash ───────────────────────────
    let mut player = end_dash_if_expired(&state.player, now);
    player = move_player(&player, input, state.width, state.height);
    if input.is_down(KEY_SHOOT) {
        player = player_shoot(&player, now);
    }
    player.shield_active = input.is_down(KEY_SHIELD);
    if input.is_down(KEY_DASH) {
        player = dash(&player, now);
    }
    if player.dash_cooldown_ms > 0 {
        player.dash_cooldown_ms -= COOLDOWN_STEP_MS;
    }

    // ── 3. Move bullets and enemies, discarding anything off screen ──────────
    let bullets: Vec<Bullet> = player
        .bullets
        .iter()
        .map(|b| Bullet {
            y: b.y - b.speed,
            ..b.clone()
        })
        .filter(|b| b.y >= 0.0)
        .collect();

    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .map(|e| Enemy {
            y: e.y + e.speed,
            ..e
        })
        .filter(|e| e.y <= state.height)
        .collect();

    // ── 4. Collision: enemies ↔ player ───────────────────────────────────────
    let mut health = player.health;
    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .filter(|e| {
            if !is_colliding(&player, e) {
                return true;
            }
            if !player.shield_active {
                health = (health - CONTACT_DAMAGE).max(0);
            }
            false
        })
        .collect();

    // ── 5. Collision: bullets ↔ enemies ──────────────────────────────────────
    let mut used_bullets = vec![false; bullets.len()];
    let mut score = player.score;
    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .filter_map(|mut enemy| {
            for (bi, bullet) in bullets.iter().enumerate() {
                if used_bullets[bi] || !is_colliding(bullet, &enemy) {
                    continue;
                }
                used_bullets[bi] = true;
                enemy.health -= BULLET_DAMAGE;
                if enemy.health <= 0 {
                    score += KILL_SCORE;
                    return None;
                }
            }
            Some(enemy)
        })
        .collect();

    let bullets: Vec<Bullet> = bullets
        .into_iter()
        .zip(used_bullets)
        .filter(|(_, used)| !used)
        .map(|(b, _)| b)
        .collect();

    let mut player = Player {
        health,
        score,
        bullets,
        ..player
    };

    // ── 6. Power-ups: expire, then collect ───────────────────────────────────
    let mut collected = Vec::new();
    let power_ups: Vec<PowerUp> = power_ups
        .into_iter()
        .filter_map(|p| {
            let remaining_ms = power_up_remaining(&p, now);
            if remaining_ms == 0 {
                return None;
            }
            if is_colliding(&player, &p) {
                collected.push(p.kind);
                return None;
            }
            Some(PowerUp { remaining_ms, ..p })
        })
        .collect();
    for kind in collected {
        player = apply_power_up(&player, kind);
    }

    // ── 7. Status ────────────────────────────────────────────────────────────
    let status = if player.health <= 0 {
        info!("game over at frame {frame} with score {}", player.score);
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    };

    GameState {
        player,
        enemies,
        power_ups,
        clock_ms: now,
        frame,
        status,
        enemy_timer,
        power_up_timer,
        ..state.clone()
    }
}
