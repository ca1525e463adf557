use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use space_shooter::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
}

#[test]
fn space_press_fires() {
    let mut keys = HeldKeys::new();
    assert_eq!(keys.record(&press(KeyCode::Char(' ')), 0), Some(Action::Fire));
}

#[test]
fn space_repeat_does_not_fire() {
    let mut keys = HeldKeys::new();
    let ev = with_kind(KeyCode::Char(' '), KeyEventKind::Repeat);
    assert_eq!(keys.record(&ev, 0), None);
}

#[test]
fn quit_keys() {
    let mut keys = HeldKeys::new();
    assert_eq!(keys.record(&press(KeyCode::Char('q')), 0), Some(Action::Quit));
    assert_eq!(keys.record(&press(KeyCode::Esc), 0), Some(Action::Quit));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(keys.record(&ctrl_c, 0), Some(Action::Quit));
    assert_eq!(keys.record(&press(KeyCode::Char('c')), 0), None);
}

#[test]
fn arrows_and_wasd_map_to_directions() {
    let mut keys = HeldKeys::new();
    keys.record(&press(KeyCode::Left), 10);
    keys.record(&press(KeyCode::Char('w')), 10);
    let c = keys.controls(10);
    assert_eq!(c, Controls { up: true, down: false, left: true, right: false });
}

#[test]
fn held_key_expires_after_window() {
    let mut keys = HeldKeys::new();
    keys.record(&press(KeyCode::Right), 5);
    assert!(keys.is_held(&KeyCode::Right, 5 + HOLD_WINDOW));
    assert!(!keys.is_held(&KeyCode::Right, 6 + HOLD_WINDOW));
}

#[test]
fn repeat_refreshes_hold() {
    let mut keys = HeldKeys::new();
    keys.record(&press(KeyCode::Down), 0);
    keys.record(&with_kind(KeyCode::Down, KeyEventKind::Repeat), HOLD_WINDOW);
    assert!(keys.controls(2 * HOLD_WINDOW).down);
}

#[test]
fn release_clears_immediately() {
    let mut keys = HeldKeys::new();
    keys.record(&press(KeyCode::Char('a')), 0);
    keys.record(&with_kind(KeyCode::Char('a'), KeyEventKind::Release), 1);
    assert!(!keys.controls(1).left);
}
