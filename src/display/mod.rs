/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{GameState, Rect};
use viewport::{CellRect, Viewport};

pub mod viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WALL: Color = Color::DarkBlue;
const C_BORDER_LINE: Color = Color::DarkGrey;
const C_STAR: Color = Color::Grey;
const C_HUD: Color = Color::White;
const C_SHIP: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

// ── Backdrop ──────────────────────────────────────────────────────────────────

/// Static starfield drawn behind everything, generated once at startup.
#[derive(Clone, Debug)]
pub struct Backdrop {
    /// Star positions in field pixels.
    pub stars: Vec<(i32, i32)>,
}

impl Backdrop {
    pub fn generate(cfg: &GameConfig, rng: &mut impl Rng) -> Self {
        let stars = (0..cfg.stars)
            .map(|_| (rng.gen_range(0..cfg.width), rng.gen_range(0..cfg.height)))
            .collect();
        Backdrop { stars }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    view: &Viewport,
    cfg: &GameConfig,
    backdrop: &Backdrop,
    state: &GameState,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_walls(out, view)?;
    draw_backdrop(out, view, cfg, backdrop)?;

    fill(out, view, &state.ship.rect, C_SHIP, '█')?;
    for bullet in &state.bullets {
        fill(out, view, &bullet.rect, C_BULLET, '|')?;
    }
    for enemy in &state.enemies {
        fill(out, view, &enemy.rect, C_ENEMY, '▼')?;
    }

    draw_hud(out, view, state)?;
    draw_controls_hint(out, view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.term_height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Frame ─────────────────────────────────────────────────────────────────────

fn draw_walls<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.term_width as usize;
    let h = view.term_height;

    out.queue(style::SetForegroundColor(C_WALL))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.term_width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_backdrop<W: Write>(
    out: &mut W,
    view: &Viewport,
    cfg: &GameConfig,
    backdrop: &Backdrop,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    for &(x, y) in &backdrop.stars {
        if let Some((col, row)) = view.point(x, y) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print('·'))?;
        }
    }

    // Dashed line the ship cannot cross
    if let Some((_, row)) = view.point(0, cfg.border_y()) {
        out.queue(style::SetForegroundColor(C_BORDER_LINE))?;
        out.queue(cursor::MoveTo(1, row))?;
        out.queue(Print("╌".repeat(view.inner_cols() as usize)))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Paint the cells an entity covers with a single glyph.
fn fill<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    color: Color,
    glyph: char,
) -> std::io::Result<()> {
    let Some(CellRect { col, row, cols, rows }) = view.rect(rect) else {
        return Ok(());
    };
    let line: String = std::iter::repeat(glyph).take(cols as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for r in row..row + rows {
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

/// Level and hits on the left, lives on the right.
pub fn hud_text(state: &GameState) -> (String, String) {
    (
        format!("LEVEL: {}  HITS: {}", state.level, state.hits),
        format!("LIVES: {}", state.lives),
    )
}

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    let (left, right) = hud_text(state);
    out.queue(style::SetForegroundColor(C_HUD))?;

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(&left))?;

    let rx = view
        .term_width
        .saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&right))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.term_height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("ARROWS / WASD : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}
