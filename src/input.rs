//! Keyboard handling: edge-triggered key events in, a level-triggered
//! held-key snapshot out.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol etc.): proper
//!   `Press` / `Repeat` / `Release` events, so keys are dropped on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows up as
//!   repeated presses).  Keys expire after `HOLD_WINDOW` frames of silence,
//!   which is shorter than the OS repeat interval.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key counts as held if its last press/repeat arrived within this many
/// frames.  8 frames @ 60 FPS ≈ 133 ms, above the OS repeat interval.
pub const HOLD_WINDOW: u64 = 8;

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// Direction keys sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// One-shot actions triggered on key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    TogglePause,
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event observed during `frame`, returning the command it
    /// triggers, if any.  Only presses trigger commands.
    pub fn handle(&mut self, event: KeyEvent, frame: u64) -> Option<Command> {
        match event.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(event.code, frame);
                command_for(event.code, event.modifiers)
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, frame);
                None
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
                None
            }
        }
    }

    /// Snapshot of the direction keys as of `frame`.
    pub fn held(&self, frame: u64) -> HeldKeys {
        HeldKeys {
            left: self.any_held(&LEFT_KEYS, frame),
            right: self.any_held(&RIGHT_KEYS, frame),
        }
    }

    /// Forget every held key (e.g. after a restart).
    pub fn clear(&mut self) {
        self.key_frame.clear();
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|key| self.is_held(key, frame))
    }

    fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => Some(Command::TogglePause),
        _ => None,
    }
}
