//! # progcalc-core
//!
//! Core library for progcalc: arithmetic and geometric sequence generation
//! with closed-form partial sums. Every operation is a pure function of its
//! inputs.

pub mod constants;
pub mod engine;
pub mod iterator;
pub mod kind;
pub mod request;

// Re-exports
pub use constants::{exit_codes, DEFAULT_MAX_TERMS, DETAIL_TABLE_LIMIT};
pub use engine::{compute, compute_sum, generate_terms, SequenceError};
pub use iterator::Terms;
pub use kind::{ParseKindError, SequenceKind};
pub use request::{SequenceRequest, SequenceResult};

/// Compute the terms and sum of a progression in one call.
///
/// This is a convenience wrapper around [`compute`] for simple use cases.
///
/// # Example
/// ```
/// use progcalc_core::{sequence, SequenceKind};
/// let result = sequence(SequenceKind::Arithmetic, 1.0, 2.0, 10).unwrap();
/// assert_eq!(result.terms[9], 19.0);
/// assert_eq!(result.sum, 100.0);
/// ```
pub fn sequence(
    kind: SequenceKind,
    first_term: f64,
    step: f64,
    term_count: u64,
) -> Result<SequenceResult, SequenceError> {
    compute(&SequenceRequest::new(kind, first_term, step, term_count))
}
