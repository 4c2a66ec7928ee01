mod common;

use survival_shooter::entities::*;
use survival_shooter::render::{countdown_label, draw_frame, Color};

use common::{bullet_at, enemy_at, make_state, power_up_at, DrawCall, RecordingCanvas};

fn render(state: &GameState) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new(state.width, state.height);
    draw_frame(&mut canvas, state).unwrap();
    canvas
}

#[test]
fn frame_starts_with_clear_and_ends_with_present() {
    let canvas = render(&make_state());
    assert_eq!(canvas.calls.first(), Some(&DrawCall::Clear));
    assert_eq!(canvas.calls.last(), Some(&DrawCall::Present));
}

#[test]
fn draws_player_bullets_enemies_and_power_ups() {
    let mut s = make_state();
    s.player.bullets = vec![bullet_at(10.0, 20.0)];
    s.enemies = vec![enemy_at(100.0, 100.0, 35), enemy_at(200.0, 100.0, 35)];
    s.power_ups = vec![power_up_at(300.0, 300.0, PowerUpKind::Health, 0)];
    let canvas = render(&s);

    assert_eq!(
        canvas.rects_of(Color::Blue),
        vec![Rect::new(375.0, 500.0, 50.0, 50.0)]
    );
    assert_eq!(canvas.rects_of(Color::Red), vec![Rect::new(10.0, 20.0, 10.0, 10.0)]);
    assert_eq!(canvas.rects_of(Color::Green).len(), 2);
    assert_eq!(
        canvas.rects_of(Color::Yellow),
        vec![Rect::new(300.0, 300.0, 30.0, 30.0)]
    );
}

#[test]
fn shield_ring_only_when_active() {
    let mut s = make_state();
    let no_ring = render(&s);
    assert!(!no_ring
        .calls
        .iter()
        .any(|c| matches!(c, DrawCall::Circle { .. })));

    s.player.shield_active = true;
    let canvas = render(&s);
    assert!(canvas.calls.contains(&DrawCall::Circle {
        cx: 400.0,
        cy: 525.0,
        radius: 50.0,
        color: Color::Cyan,
    }));
}

#[test]
fn power_up_shows_countdown_in_seconds() {
    let mut s = make_state();
    let mut p = power_up_at(300.0, 300.0, PowerUpKind::Speed, 0);
    p.remaining_ms = 7_460;
    s.power_ups = vec![p];
    let canvas = render(&s);
    assert!(canvas.calls.contains(&DrawCall::Text {
        text: "7.5s".to_string(),
        x: 302.0,
        y: 315.0,
        font_px: 12,
        color: Color::Black,
    }));
}

#[test]
fn countdown_label_has_one_decimal() {
    assert_eq!(countdown_label(10_000), "10.0s");
    assert_eq!(countdown_label(1_234), "1.2s");
    assert_eq!(countdown_label(0), "0.0s");
}

#[test]
fn hud_shows_health_score_and_wave() {
    let mut s = make_state();
    s.player.health = 70;
    s.player.score = 40;
    let canvas = render(&s);
    let texts = canvas.texts();
    assert!(texts.contains(&"Health: 70"));
    assert!(texts.contains(&"Score: 40"));
    assert!(texts.contains(&"Wave: 1"));
    assert!(!texts.contains(&"Game Over"));
}

#[test]
fn game_over_banner_is_centred() {
    let mut s = make_state();
    s.player.health = 0;
    s.status = GameStatus::GameOver;
    let canvas = render(&s);
    assert!(canvas.calls.contains(&DrawCall::Text {
        text: "Game Over".to_string(),
        x: 300.0,
        y: 300.0,
        font_px: 40,
        color: Color::Red,
    }));
}
