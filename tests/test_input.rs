use catch_game::input::*;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
}

fn repeat(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

#[test]
fn nothing_held_initially() {
    let keys = KeyTracker::new();
    assert_eq!(keys.held(1), HeldKeys::default());
}

#[test]
fn press_holds_until_release() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Left), 1);
    assert!(keys.held(1).left);
    assert!(!keys.held(1).right);

    keys.handle(release(KeyCode::Left), 2);
    assert!(!keys.held(2).left);
}

#[test]
fn press_expires_without_repeats() {
    // Classic terminals never send releases
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Right), 10);
    assert!(keys.held(10 + HOLD_WINDOW).right);
    assert!(!keys.held(11 + HOLD_WINDOW).right);
}

#[test]
fn repeat_refreshes_hold() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Right), 10);
    keys.handle(repeat(KeyCode::Right), 15);
    assert!(keys.held(15 + HOLD_WINDOW).right);
}

#[test]
fn letter_aliases_and_both_directions() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Char('a')), 1);
    keys.handle(press(KeyCode::Char('D')), 1);
    assert_eq!(keys.held(1), HeldKeys { left: true, right: true });
}

#[test]
fn commands_on_press_only() {
    let mut keys = KeyTracker::new();
    assert_eq!(keys.handle(press(KeyCode::Char('q')), 1), Some(Command::Quit));
    assert_eq!(keys.handle(press(KeyCode::Esc), 1), Some(Command::Quit));
    assert_eq!(keys.handle(press(KeyCode::Char('r')), 1), Some(Command::Restart));
    assert_eq!(keys.handle(press(KeyCode::Char('p')), 1), Some(Command::TogglePause));
    assert_eq!(keys.handle(press(KeyCode::Char(' ')), 1), Some(Command::TogglePause));
    assert_eq!(keys.handle(repeat(KeyCode::Char('p')), 2), None);
    assert_eq!(keys.handle(release(KeyCode::Char('r')), 2), None);
    assert_eq!(keys.handle(press(KeyCode::Left), 3), None);
}

#[test]
fn ctrl_c_quits() {
    let mut keys = KeyTracker::new();
    let ev = KeyEvent::new_with_kind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
    assert_eq!(keys.handle(ev, 1), Some(Command::Quit));
    assert_eq!(keys.handle(press(KeyCode::Char('c')), 1), None);
}

#[test]
fn clear_drops_held_keys() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Left), 1);
    keys.clear();
    assert!(!keys.held(1).left);
}
