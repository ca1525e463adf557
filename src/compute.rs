/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (plus the `GameConfig` it runs under) and returns a brand-new
/// `GameState`.  Removal from the entity lists is always mark-then-filter so
/// no element is skipped or processed twice.

use crate::config::GameConfig;
use crate::entities::{Bullet, Enemy, GameState, Rect, RunState, Ship};
use crate::input::Controls;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the session state at process start.  No wave exists yet; the first
/// tick spawns it.
pub fn init_state(cfg: &GameConfig) -> GameState {
    GameState {
        ship: Ship {
            rect: Rect::new(
                cfg.width / 2 - cfg.ship_width / 2,
                cfg.ship_start_y,
                cfg.ship_width,
                cfg.ship_height,
            ),
        },
        bullets: Vec::new(),
        enemies: Vec::new(),
        level: 0,
        wave: 0,
        enemy_speed: cfg.enemy_speed,
        lives: cfg.lives,
        hits: 0,
        status: RunState::Running,
        frame: 0,
    }
}

// ── Input-driven transitions ─────────────────────────────────────────────────

pub fn quit(state: &GameState) -> GameState {
    GameState {
        status: RunState::Stopped,
        ..state.clone()
    }
}

/// Fire a bullet from the ship's nose.  Rejected silently at the cap.
pub fn player_shoot(state: &GameState, cfg: &GameConfig) -> GameState {
    if state.bullets.len() >= cfg.max_bullets {
        return state.clone();
    }
    let ship = &state.ship.rect;
    let bullet = Bullet {
        rect: Rect::new(
            ship.x + (ship.w - cfg.bullet_width) / 2,
            ship.y - cfg.bullet_height,
            cfg.bullet_width,
            cfg.bullet_height,
        ),
    };
    let mut bullets = state.bullets.clone();
    bullets.push(bullet);
    GameState {
        bullets,
        ..state.clone()
    }
}

// ── Wave spawning ────────────────────────────────────────────────────────────

/// Next (wave size, enemy speed) pair: the wave grows by `wave_step` until it
/// reaches `wave_cap`, after which the speed grows instead.
pub fn next_wave(wave: u32, speed: i32, cfg: &GameConfig) -> (u32, i32) {
    if wave < cfg.wave_cap {
        ((wave + cfg.wave_step).min(cfg.wave_cap), speed)
    } else {
        (wave, speed + cfg.speed_step)
    }
}

/// Fixed layout: left to right, wrapping to a new row when the field is full.
pub fn wave_layout(count: u32, cfg: &GameConfig) -> Vec<Enemy> {
    let columns = cfg.layout_columns();
    (0..count as i32)
        .map(|i| Enemy {
            rect: Rect::new(
                cfg.layout_left + cfg.layout_spacing * (i % columns),
                cfg.layout_top + cfg.layout_row_spacing * (i / columns),
                cfg.enemy_width,
                cfg.enemy_height,
            ),
        })
        .collect()
}

pub fn spawn_wave_if_cleared(state: &GameState, cfg: &GameConfig) -> GameState {
    if !state.enemies.is_empty() {
        return state.clone();
    }
    let level = state.level + 1;
    let (wave, enemy_speed) = next_wave(state.wave, state.enemy_speed, cfg);
    log::info!("level {level}: wave of {wave} at speed {enemy_speed}");
    GameState {
        enemies: wave_layout(wave, cfg),
        level,
        wave,
        enemy_speed,
        ..state.clone()
    }
}

// ── Per-tick movement and collisions ─────────────────────────────────────────

/// Sweep every enemy right.  An enemy that would cross the right edge wraps
/// to the left edge one step lower; one touching the ship is removed and
/// costs a life.  Enemies that have sunk below the field are discarded.
pub fn move_enemies(state: &GameState, cfg: &GameConfig) -> GameState {
    let speed = state.enemy_speed;
    let ship = state.ship.rect;
    let mut lives = state.lives;

    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .filter_map(|e| {
            let mut rect = e.rect;
            if rect.x + speed > cfg.width - rect.w {
                rect.x = 0;
                rect.y += cfg.enemy_drop;
            } else if rect.overlaps(&ship) {
                lives -= 1;
                return None;
            } else {
                rect.x += speed;
            }
            if rect.y >= cfg.height {
                log::debug!("enemy left the field at x={}", rect.x);
                return None;
            }
            Some(Enemy { rect })
        })
        .collect();

    GameState {
        enemies,
        lives,
        ..state.clone()
    }
}

pub fn move_bullets(state: &GameState, cfg: &GameConfig) -> GameState {
    let bullets = state
        .bullets
        .iter()
        .map(|b| Bullet {
            rect: Rect {
                y: b.rect.y - cfg.bullet_speed,
                ..b.rect
            },
        })
        .collect();
    GameState {
        bullets,
        ..state.clone()
    }
}

/// Resolve bullet ↔ enemy and enemy ↔ ship contacts.
///
/// A bullet above the field is dropped before it can hit anything.  Each
/// bullet destroys at most one enemy and each enemy dies at most once.
pub fn resolve_collisions(state: &GameState) -> GameState {
    let mut spent_bullets: Vec<usize> = Vec::new();
    let mut killed_enemies: Vec<usize> = Vec::new();
    let mut rammed_enemies: Vec<usize> = Vec::new();

    for (bi, bullet) in state.bullets.iter().enumerate() {
        if bullet.rect.y < 0 {
            spent_bullets.push(bi);
            continue;
        }
        let target = state
            .enemies
            .iter()
            .enumerate()
            .find(|(ei, e)| !killed_enemies.contains(ei) && bullet.rect.overlaps(&e.rect));
        if let Some((ei, _)) = target {
            killed_enemies.push(ei);
            spent_bullets.push(bi);
        }
    }

    for (ei, enemy) in state.enemies.iter().enumerate() {
        if !killed_enemies.contains(&ei) && enemy.rect.overlaps(&state.ship.rect) {
            rammed_enemies.push(ei);
        }
    }

    let bullets = state
        .bullets
        .iter()
        .enumerate()
        .filter(|(i, _)| !spent_bullets.contains(i))
        .map(|(_, b)| b.clone())
        .collect();

    let enemies = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(i, _)| !killed_enemies.contains(i) && !rammed_enemies.contains(i))
        .map(|(_, e)| e.clone())
        .collect();

    GameState {
        bullets,
        enemies,
        hits: state.hits + killed_enemies.len() as u32,
        lives: state.lives - rammed_enemies.len() as i32,
        ..state.clone()
    }
}

/// Apply held direction keys, keeping the ship between the border line and
/// the field edges.
pub fn move_ship(state: &GameState, cfg: &GameConfig, controls: Controls) -> GameState {
    let mut rect = state.ship.rect;
    if controls.up {
        rect.y -= cfg.ship_speed;
    }
    if controls.down {
        rect.y += cfg.ship_speed;
    }
    if controls.left {
        rect.x -= cfg.ship_speed;
    }
    if controls.right {
        rect.x += cfg.ship_speed;
    }
    rect.x = rect.x.clamp(0, cfg.width - rect.w);
    rect.y = rect.y.clamp(cfg.border_y(), cfg.height - rect.h);
    GameState {
        ship: Ship { rect },
        ..state.clone()
    }
}

/// Everything after rendering: enemies, bullets, collisions, then the ship.
pub fn advance(state: &GameState, cfg: &GameConfig, controls: Controls) -> GameState {
    let state = move_enemies(state, cfg);
    let state = move_bullets(&state, cfg);
    let state = resolve_collisions(&state);
    let state = move_ship(&state, cfg, controls);
    GameState {
        frame: state.frame + 1,
        ..state
    }
}
