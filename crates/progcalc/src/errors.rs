//! Error handling and exit codes.

use std::error::Error as _;

use progcalc_core::constants::exit_codes;
use progcalc_core::SequenceError;

/// Application-level validation errors raised before the engine runs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `--terms` is negative or not a whole number.
    #[error("invalid term count `{0}`: number of terms must be a positive integer")]
    InvalidTermCount(String),

    /// The requested term count exceeds the display ceiling.
    #[error("number of terms {requested} exceeds the maximum of {max}")]
    TermLimit { requested: u64, max: u64 },

    /// The terminal UI failed.
    #[error("TUI error: {0}")]
    Tui(#[from] std::io::Error),
}

/// Map an error to the process exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if let Some(seq) = err.downcast_ref::<SequenceError>() {
        return match seq {
            SequenceError::InvalidTermCount(_) => exit_codes::ERROR_CONFIG,
            SequenceError::Domain(_) => exit_codes::ERROR_DOMAIN,
        };
    }
    match err.downcast_ref::<AppError>() {
        Some(AppError::TermLimit { .. } | AppError::InvalidTermCount(_)) => {
            exit_codes::ERROR_CONFIG
        }
        Some(AppError::Tui(_)) | None => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for a command-line parsing failure.
///
/// A malformed term count maps to the same code as the engine's term count
/// check; everything else keeps clap's code (0 for help and version).
pub fn parse_error_code(err: &clap::Error) -> i32 {
    match err.source().and_then(|e| e.downcast_ref::<AppError>()) {
        Some(AppError::InvalidTermCount(_)) => exit_codes::ERROR_CONFIG,
        _ => err.exit_code(),
    }
}
