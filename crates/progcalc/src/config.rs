//! Application configuration from CLI flags and environment.

use clap::Parser;

use crate::errors::AppError;

use progcalc_cli::PresenterOptions;
use progcalc_core::constants::{
    DEFAULT_FIRST_TERM, DEFAULT_MAX_TERMS, DEFAULT_STEP, DEFAULT_TERM_COUNT,
};
use progcalc_core::{SequenceKind, SequenceRequest};

/// progcalc: explore arithmetic and geometric sequences.
#[derive(Parser, Debug)]
#[command(name = "progcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Sequence kind: arithmetic or geometric.
    #[arg(short, long, default_value = "arithmetic", env = "PROGCALC_KIND")]
    pub kind: SequenceKind,

    /// First term (a₁).
    #[arg(
        short = 'a',
        long,
        default_value_t = DEFAULT_FIRST_TERM,
        env = "PROGCALC_FIRST_TERM",
        value_parser = parse_finite,
        allow_negative_numbers = true
    )]
    pub first_term: f64,

    /// Common difference (arithmetic) or common ratio (geometric).
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_STEP,
        env = "PROGCALC_STEP",
        value_parser = parse_finite,
        allow_negative_numbers = true
    )]
    pub step: f64,

    /// Number of terms (n).
    #[arg(
        short = 'n',
        long = "terms",
        default_value_t = DEFAULT_TERM_COUNT,
        env = "PROGCALC_TERMS",
        value_parser = parse_term_count,
        allow_negative_numbers = true
    )]
    pub terms: u64,

    /// Largest accepted number of terms.
    #[arg(long, default_value_t = DEFAULT_MAX_TERMS, env = "PROGCALC_MAX_TERMS")]
    pub max_terms: u64,

    /// Always show the term detail table.
    #[arg(short, long)]
    pub details: bool,

    /// Skip the plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Show background notes about the sequence kind.
    #[arg(long)]
    pub about: bool,

    /// Quiet mode (only the terms and the sum).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the request and result as JSON.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Launch the interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// The computation request described by the flags.
    #[must_use]
    pub fn request(&self) -> SequenceRequest {
        SequenceRequest::new(self.kind, self.first_term, self.step, self.terms)
    }

    /// Presenter options described by the flags.
    #[must_use]
    pub fn presenter_options(&self) -> PresenterOptions {
        PresenterOptions {
            quiet: self.quiet,
            json: self.json,
            details: self.details,
            no_plot: self.no_plot,
            about: self.about,
        }
    }
}

/// Parse a finite real number.
fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("`{s}` must be a finite number"))
    }
}

/// Parse a whole, non-negative term count. Zero is passed through so the
/// engine reports it.
fn parse_term_count(s: &str) -> Result<u64, AppError> {
    s.trim()
        .parse()
        .map_err(|_| AppError::InvalidTermCount(s.to_string()))
}
