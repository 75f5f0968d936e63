//! Sequence engine: term generation and closed-form summation.
//!
//! `generate_terms` and `compute_sum` are independent pure evaluations of
//! the same parameters. `compute` runs both for a [`SequenceRequest`].

use tracing::debug;

use crate::iterator::Terms;
use crate::kind::SequenceKind;
use crate::request::{SequenceRequest, SequenceResult};

/// Error type for sequence computations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SequenceError {
    /// The term count was below 1.
    #[error("invalid term count {0}: number of terms must be a positive integer")]
    InvalidTermCount(u64),

    /// A value could not be evaluated over the reals.
    #[error("domain error: {0}")]
    Domain(String),
}

fn validate(first_term: f64, step: f64, term_count: u64) -> Result<(), SequenceError> {
    if term_count == 0 {
        return Err(SequenceError::InvalidTermCount(term_count));
    }
    if !first_term.is_finite() {
        return Err(SequenceError::Domain(format!(
            "first term must be a finite real number, got {first_term}"
        )));
    }
    if !step.is_finite() {
        return Err(SequenceError::Domain(format!(
            "step must be a finite real number, got {step}"
        )));
    }
    Ok(())
}

/// Produce the first `term_count` terms in position order.
///
/// Overflow to infinity is reported as a value; a term that is not a real
/// number fails with [`SequenceError::Domain`].
pub fn generate_terms(
    kind: SequenceKind,
    first_term: f64,
    step: f64,
    term_count: u64,
) -> Result<Vec<f64>, SequenceError> {
    validate(first_term, step, term_count)?;

    Terms::new(kind, first_term, step, term_count)
        .map(|(position, value)| {
            if value.is_nan() {
                Err(SequenceError::Domain(format!(
                    "{kind} term {position} with first term {first_term} and {} {step} is not a real number",
                    kind.step_symbol()
                )))
            } else {
                Ok(value)
            }
        })
        .collect()
}

/// Closed-form sum of the first `term_count` terms.
pub fn compute_sum(
    kind: SequenceKind,
    first_term: f64,
    step: f64,
    term_count: u64,
) -> Result<f64, SequenceError> {
    validate(first_term, step, term_count)?;

    let sum = kind.closed_form_sum(first_term, step, term_count);
    if sum.is_nan() {
        return Err(SequenceError::Domain(format!(
            "sum of {term_count} {kind} terms is not a real number"
        )));
    }
    Ok(sum)
}

/// Evaluate a full request.
pub fn compute(request: &SequenceRequest) -> Result<SequenceResult, SequenceError> {
    debug!(
        kind = %request.kind,
        first_term = request.first_term,
        step = request.step,
        term_count = request.term_count,
        "computing sequence"
    );

    let terms = generate_terms(
        request.kind,
        request.first_term,
        request.step,
        request.term_count,
    )?;
    let sum = compute_sum(
        request.kind,
        request.first_term,
        request.step,
        request.term_count,
    )?;

    debug!(len = terms.len(), sum, "sequence computed");
    Ok(SequenceResult { terms, sum })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tol = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn arithmetic_odd_numbers() {
        let terms = generate_terms(SequenceKind::Arithmetic, 1.0, 2.0, 10).unwrap();
        assert_eq!(terms, [1.0, 3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 17.0, 19.0]);
        let sum = compute_sum(SequenceKind::Arithmetic, 1.0, 2.0, 10).unwrap();
        assert_close(sum, 100.0);
    }

    #[test]
    fn arithmetic_zero_difference() {
        let terms = generate_terms(SequenceKind::Arithmetic, 5.0, 0.0, 4).unwrap();
        assert_eq!(terms, [5.0; 4]);
        assert_close(
            compute_sum(SequenceKind::Arithmetic, 5.0, 0.0, 4).unwrap(),
            20.0,
        );
    }

    #[test]
    fn geometric_powers_of_two() {
        let terms = generate_terms(SequenceKind::Geometric, 1.0, 2.0, 5).unwrap();
        assert_eq!(terms, [1.0, 2.0, 4.0, 8.0, 16.0]);
        assert_close(
            compute_sum(SequenceKind::Geometric, 1.0, 2.0, 5).unwrap(),
            31.0,
        );
    }

    #[test]
    fn geometric_unit_ratio_is_exact() {
        let terms = generate_terms(SequenceKind::Geometric, 3.0, 1.0, 6).unwrap();
        assert_eq!(terms, [3.0; 6]);
        let sum = compute_sum(SequenceKind::Geometric, 3.0, 1.0, 6).unwrap();
        assert!((sum - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn geometric_alternating_sign() {
        let terms = generate_terms(SequenceKind::Geometric, 2.0, -1.0, 4).unwrap();
        assert_eq!(terms, [2.0, -2.0, 2.0, -2.0]);
        assert_close(
            compute_sum(SequenceKind::Geometric, 2.0, -1.0, 4).unwrap(),
            0.0,
        );
    }

    #[test]
    fn geometric_zero_ratio() {
        let terms = generate_terms(SequenceKind::Geometric, 4.0, 0.0, 3).unwrap();
        assert_eq!(terms, [4.0, 0.0, 0.0]);
        assert_close(
            compute_sum(SequenceKind::Geometric, 4.0, 0.0, 3).unwrap(),
            4.0,
        );
    }

    #[test]
    fn single_term_both_kinds() {
        for kind in SequenceKind::ALL {
            assert_eq!(generate_terms(kind, -2.5, 7.0, 1).unwrap(), [-2.5]);
            assert_close(compute_sum(kind, -2.5, 7.0, 1).unwrap(), -2.5);
        }
    }

    #[test]
    fn zero_term_count_rejected() {
        for kind in SequenceKind::ALL {
            assert_eq!(
                generate_terms(kind, 1.0, 2.0, 0),
                Err(SequenceError::InvalidTermCount(0))
            );
            assert_eq!(
                compute_sum(kind, 1.0, 2.0, 0),
                Err(SequenceError::InvalidTermCount(0))
            );
        }
    }

    #[test]
    fn non_finite_inputs_rejected() {
        assert!(matches!(
            generate_terms(SequenceKind::Geometric, f64::NAN, 2.0, 3),
            Err(SequenceError::Domain(_))
        ));
        assert!(matches!(
            compute_sum(SequenceKind::Arithmetic, 1.0, f64::INFINITY, 3),
            Err(SequenceError::Domain(_))
        ));
    }

    #[test]
    fn overflow_is_a_value_not_an_error() {
        let terms = generate_terms(SequenceKind::Geometric, 1.0, 1e200, 3).unwrap();
        assert!(terms[2].is_infinite());
        let sum = compute_sum(SequenceKind::Geometric, 1.0, 1e200, 3).unwrap();
        assert!(sum.is_infinite());
    }

    #[test]
    fn arithmetic_sum_cancelling_overflow_is_domain_error() {
        let err = compute_sum(SequenceKind::Arithmetic, f64::MAX, -f64::MAX, 4).unwrap_err();
        assert!(matches!(err, SequenceError::Domain(_)));
    }

    #[test]
    fn ratio_near_one_uses_general_formula() {
        let sum = compute_sum(SequenceKind::Geometric, 1.0, 1.0 + 1e-15, 10).unwrap();
        assert!(sum.is_finite());
        assert!((sum - 10.0).abs() < 0.1);
    }

    #[test]
    fn compute_is_idempotent() {
        let req = SequenceRequest::geometric(1.5, -0.5, 12);
        let a = compute(&req).unwrap();
        let b = compute(&req).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            SequenceError::InvalidTermCount(0).to_string(),
            "invalid term count 0: number of terms must be a positive integer"
        );
        assert_eq!(
            SequenceError::Domain("x".into()).to_string(),
            "domain error: x"
        );
    }
}
