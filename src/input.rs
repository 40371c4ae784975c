//! Input handling: maps terminal key events onto game inputs.

use crate::game::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the loop should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(GameInput),
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent) -> KeyAction {
    // Only presses count; release/repeat events arrive on some platforms
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up => KeyAction::Game(GameInput::Jump),
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Game(GameInput::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}
