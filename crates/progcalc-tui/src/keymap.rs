//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ToggleKind,
    PrevField,
    NextField,
    Increase,
    Decrease,
    ToggleDetails,
    ToggleAbout,
    Reset,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab | KeyCode::Char('k') => KeyAction::ToggleKind,
        KeyCode::Left | KeyCode::BackTab => KeyAction::PrevField,
        KeyCode::Right => KeyAction::NextField,
        KeyCode::Up | KeyCode::Char('+') => KeyAction::Increase,
        KeyCode::Down | KeyCode::Char('-') => KeyAction::Decrease,
        KeyCode::Char('d') => KeyAction::ToggleDetails,
        KeyCode::Char('a') => KeyAction::ToggleAbout,
        KeyCode::Char('r') => KeyAction::Reset,
        KeyCode::Char('[') => KeyAction::ScrollUp,
        KeyCode::Char(']') => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}
