//! Cross-crate integration test package for progcalc.
//!
//! The tests live in `tests/`; this library is intentionally empty.
