/// Keyboard state tracking.
///
/// Instead of acting on each key event individually, `HeldKeys` records the
/// frame number of the last press/repeat event for every key.  Each frame the
/// loop asks which keys are still "fresh" (within `HOLD_WINDOW` frames) and
/// turns them into a `Controls` snapshot.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events, so keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key counts as held if its last press/repeat arrived within this many
/// frames.  At 60 FPS, 8 frames ≈ 133 ms, shorter than any OS repeat interval.
pub const HOLD_WINDOW: u64 = 8;

/// Direction keys currently held, sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// One-shot actions produced by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Fire,
    Quit,
}

#[derive(Debug, Default)]
pub struct HeldKeys {
    last_seen: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event seen during `frame`, returning the one-shot action
    /// it triggers, if any.
    pub fn record(&mut self, event: &KeyEvent, frame: u64) -> Option<Action> {
        match event.kind {
            KeyEventKind::Press => {
                self.last_seen.insert(event.code, frame);
                action_for(event)
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(event.code, frame);
                None
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&event.code);
                None
            }
        }
    }

    pub fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(k, frame))
    }

    pub fn controls(&self, frame: u64) -> Controls {
        Controls {
            up: self.any_held(&[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame),
            down: self.any_held(&[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame),
            left: self.any_held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame),
            right: self.any_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame),
        }
    }
}

fn action_for(event: &KeyEvent) -> Option<Action> {
    match event.code {
        KeyCode::Char(' ') => Some(Action::Fire),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        _ => None,
    }
}
