//! # progcalc-tui
//!
//! Interactive sequence explorer using ratatui with Elm architecture.

pub mod chart;
pub mod footer;
pub mod formulas;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod styles;
pub mod table;

pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::{Field, TuiApp};
