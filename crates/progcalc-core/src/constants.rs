//! Default parameters and display limits.

/// Default first term (a₁).
pub const DEFAULT_FIRST_TERM: f64 = 1.0;

/// Default step (common difference or common ratio).
pub const DEFAULT_STEP: f64 = 2.0;

/// Default number of terms.
pub const DEFAULT_TERM_COUNT: u64 = 10;

/// Default display ceiling on the term count.
///
/// The engine accepts any positive count; this bound only keeps rendering
/// manageable and is enforced by the presentation layer.
pub const DEFAULT_MAX_TERMS: u64 = 100;

/// Largest term count for which the per-term detail table is shown.
pub const DETAIL_TABLE_LIMIT: u64 = 20;

/// Largest term count for which plot points get value labels.
pub const ANNOTATION_TERM_LIMIT: u64 = 20;

/// Labels are dropped once any term reaches this magnitude.
pub const ANNOTATION_MAGNITUDE_LIMIT: f64 = 1000.0;

/// Significant digits used when formatting terms and sums.
pub const DISPLAY_PRECISION: usize = 6;

/// Significant digits used for plot annotations.
pub const ANNOTATION_PRECISION: usize = 3;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A term could not be evaluated over the reals.
    pub const ERROR_DOMAIN: i32 = 2;
    /// Invalid parameters (term count out of range, bad flag values).
    pub const ERROR_CONFIG: i32 = 4;
}
