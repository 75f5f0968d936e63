//! progcalc library: application logic for the sequence explorer.

pub mod app;
pub mod config;
pub mod errors;
