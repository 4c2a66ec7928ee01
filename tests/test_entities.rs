mod common;

use survival_shooter::collision::is_colliding;
use survival_shooter::entities::*;

use common::{bullet_at, enemy_at, make_state, power_up_at};

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(PowerUpKind::ALL.len(), 4);
    assert_ne!(PowerUpKind::Health, PowerUpKind::Shield);

    let kind = PowerUpKind::Bullet;
    assert_eq!(kind.clone(), PowerUpKind::Bullet);
}

#[test]
fn game_state_clone_is_independent() {
    let original = make_state();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.player.score = 999;
    cloned.enemies.push(enemy_at(5.0, 5.0, 35));
    cloned.player.bullets.push(bullet_at(1.0, 1.0));

    assert_eq!(original.player.x, 375.0);
    assert_eq!(original.player.score, 0);
    assert!(original.enemies.is_empty());
    assert!(original.player.bullets.is_empty());
}

// ── collision predicate ───────────────────────────────────────────────────────

#[test]
fn overlapping_boxes_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(is_colliding(&a, &b));
}

#[test]
fn touching_edges_do_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!is_colliding(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!is_colliding(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(!is_colliding(&a, &Rect::new(-10.0, 0.0, 10.0, 10.0)));
}

#[test]
fn contained_box_collides() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
    assert!(is_colliding(&outer, &inner));
}

#[test]
fn separated_on_one_axis_only_does_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 50.0, 10.0, 10.0);
    assert!(!is_colliding(&a, &b));
}

#[test]
fn collision_is_symmetric() {
    let coords = [-20.0, -5.0, 0.0, 3.0, 9.5, 10.0, 25.0];
    let sizes = [1.0, 10.0, 30.0];
    let mut boxes = Vec::new();
    for &x in &coords {
        for &y in &coords {
            for &w in &sizes {
                boxes.push(Rect::new(x, y, w, w * 0.5 + 1.0));
            }
        }
    }
    for a in &boxes {
        for b in &boxes {
            assert_eq!(is_colliding(a, b), is_colliding(b, a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn entities_collide_through_their_bounds() {
    let s = make_state();
    let enemy = enemy_at(s.player.x + 40.0, s.player.y + 40.0, 35);
    let bullet = bullet_at(enemy.x + 45.0, enemy.y);
    let pickup = power_up_at(s.player.x - 29.0, s.player.y, PowerUpKind::Shield, 0);
    assert!(is_colliding(&s.player, &enemy));
    assert!(is_colliding(&bullet, &enemy));
    assert!(is_colliding(&s.player, &pickup));
    assert!(!is_colliding(&bullet, &s.player));
}
