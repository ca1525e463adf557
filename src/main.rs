use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use space_shooter::audio::{Audio, Cue};
use space_shooter::compute::{advance, init_state, player_shoot, quit, spawn_wave_if_cleared};
use space_shooter::config::GameConfig;
use space_shooter::display::{self, viewport::Viewport, Backdrop};
use space_shooter::entities::{GameState, RunState};
use space_shooter::input::{Action, HeldKeys};

const LOG_FILE: &str = "space_shooter.log";

/// Everything built once at startup and shared by reference with the loop.
struct Assets {
    config: GameConfig,
    backdrop: Backdrop,
    audio: Audio,
}

impl Assets {
    fn load() -> Result<Self> {
        let config = GameConfig::from_env().context("loading game config")?;
        let backdrop = Backdrop::generate(&config, &mut thread_rng());
        let audio = Audio::new(config.sound);
        Ok(Assets { config, backdrop, audio })
    }
}

/// The terminal is in raw mode while the game runs, so the log goes to a file.
fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One tick: input, wave spawn, render, then movement and collisions.
fn game_loop<W: Write>(
    out: &mut W,
    assets: &Assets,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<GameState> {
    let cfg = &assets.config;
    let frame_time = cfg.frame_duration();
    let mut state = init_state(cfg);
    let mut keys = HeldKeys::new();

    while state.status == RunState::Running {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match keys.record(&key, state.frame) {
                Some(Action::Quit) => state = quit(&state),
                Some(Action::Fire) => {
                    let before = state.bullets.len();
                    state = player_shoot(&state, cfg);
                    if state.bullets.len() > before {
                        assets.audio.play(out, Cue::Fire)?;
                    }
                }
                None => {}
            }
        }
        if state.status == RunState::Stopped {
            break;
        }

        state = spawn_wave_if_cleared(&state, cfg);

        let (cols, rows) = terminal::size()?;
        let view = Viewport::new(cols, rows, cfg.width, cfg.height);
        display::render(out, &view, cfg, &assets.backdrop, &state)?;

        let hits_before = state.hits;
        state = advance(&state, cfg, keys.controls(state.frame));
        if state.hits > hits_before {
            assets.audio.play(out, Cue::EnemyDown)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }

    Ok(state)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging()?;
    let assets = Assets::load()?;
    log::info!("starting with {:?}", assets.config);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

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

    let result = game_loop(&mut out, &assets, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let state = result.context("terminal I/O failed")?;
    log::info!(
        "stopped at level {} with {} hits and {} lives",
        state.level,
        state.hits,
        state.lives
    );
    Ok(())
}
