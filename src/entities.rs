/// All game entity types — pure data, no game rules.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in logical field pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// ── Ship, bullets, enemies ────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
}

// ── Session state ─────────────────────────────────────────────────────────────

/// The entire session.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub ship: Ship,
    /// Insertion-ordered; only membership matters.
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Incremented once per wave spawned.
    pub level: u32,
    /// Size of the most recently spawned wave.
    pub wave: u32,
    /// Horizontal enemy speed in pixels per tick.
    pub enemy_speed: i32,
    /// Signed: nothing ends the session when lives run out.
    pub lives: i32,
    /// Enemies destroyed by bullets.
    pub hits: u32,
    pub status: RunState,
    pub frame: u64,
}
