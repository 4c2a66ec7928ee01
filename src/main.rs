mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use display::TerminalCanvas;
use survival_shooter::config::GameConfig;
use survival_shooter::error::GameError;
use survival_shooter::game_loop::{FrameOutcome, GameLoop};
use survival_shooter::input::HeldKeys;

const CONFIG_ENV: &str = "SURVIVAL_SHOOTER_CONFIG";

/// A key is considered "held" if its last press/repeat event arrived within
/// this window.  Covers terminals that don't emit key-release events: the
/// OS key-repeat rate is >= 15 Hz, so the window is refreshed before it
/// lapses while a key is down.
const HOLD_WINDOW_MS: u64 = 130;

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config() -> Result<GameConfig, GameError> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());
    match path {
        // First run with a named file: write the defaults out to edit later.
        Some(path) if !Path::new(&path).exists() => {
            let config = GameConfig::default();
            config.save(&path)?;
            Ok(config)
        }
        Some(path) => Ok(GameConfig::load(path)?),
        None => Ok(GameConfig::default()),
    }
}

/// Log to a file: stderr shares the screen with the game.
fn init_logging(config: &GameConfig) -> Result<(), GameError> {
    let file = File::create(&config.log_file)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Lowercase key name the game understands, if any.
fn key_name(code: &KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(c) => Some(c.to_lowercase().to_string()),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input model: every press or repeat stamps its key, and a key stays held
/// while its stamp is younger than `HOLD_WINDOW_MS`.  Terminals that report
/// releases just drop the key sooner.
fn game_loop<W: Write>(
    canvas: &mut TerminalCanvas<W>,
    game: &mut GameLoop<impl rand::Rng>,
    rx: &mpsc::Receiver<Event>,
    frame_budget: Duration,
) -> Result<(), GameError> {
    let mut held = HeldKeys::new(HOLD_WINDOW_MS);
    let mut running = true;
    let started = Instant::now();
    let mut last_frame = started;

    loop {
        let frame_start = Instant::now();
        let now_ms = frame_start.duration_since(started).as_millis() as u64;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
                    match code {
                        KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if !running && kind == KeyEventKind::Press =>
                        {
                            game.restart(canvas);
                            held.clear();
                            running = true;
                            last_frame = Instant::now();
                            continue;
                        }
                        _ => {}
                    }
                    let Some(name) = key_name(&code) else { continue };
                    match kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => held.press(&name, now_ms),
                        KeyEventKind::Release => held.release(&name),
                    }
                }
                Event::Resize(cols, rows) => canvas.resize(cols, rows),
                _ => {}
            }
        }

        let input = held.snapshot(now_ms);

        // ── Simulate and draw; a finished game stops scheduling frames ───────
        if running {
            let elapsed = frame_start.duration_since(last_frame).as_millis() as u64;
            last_frame = frame_start;
            if game.frame(&input, elapsed, canvas)? == FrameOutcome::GameOver {
                running = false;
            }
        }

        let spent = frame_start.elapsed();
        if spent < frame_budget {
            thread::sleep(frame_budget - spent);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let config = load_config()?;
    init_logging(&config)?;
    info!("starting with {config:?}");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events where the terminal speaks
    // the kitty keyboard protocol.  Everyone else relies on the hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if keyboard_enhanced {
        out.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    } else {
        warn!("terminal does not report key releases; using hold window");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
) -> Result<(), GameError> {
    let (cols, rows) = terminal::size()?;
    let mut canvas = TerminalCanvas::new(out, config.canvas_width, config.canvas_height, cols, rows);
    let mut game = GameLoop::new(config, thread_rng());
    // Survival is a solo mode: start from a restart like every later round.
    game.restart(&mut canvas);

    game_loop(
        &mut canvas,
        &mut game,
        rx,
        Duration::from_millis(config.frame_ms),
    )
}
