//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TuiMessage {
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Terminal resize event carrying the new height in rows.
    Resize { height: u16 },
    /// Tick event for periodic redraws.
    Tick,
    /// Quit the application.
    Quit,
}
