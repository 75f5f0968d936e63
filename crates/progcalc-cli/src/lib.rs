//! # progcalc-cli
//!
//! CLI presentation: formulas, term tables, Braille plots, and shell
//! completion.

pub mod chart;
pub mod completion;
pub mod explain;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIResultPresenter, PresenterOptions, ResultPresenter};
