//! Request and result values exchanged with the presentation layer.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FIRST_TERM, DEFAULT_STEP, DEFAULT_TERM_COUNT};
use crate::kind::SequenceKind;

/// Parameters of one computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceRequest {
    /// Which formula family applies.
    pub kind: SequenceKind,
    /// First term (a₁).
    pub first_term: f64,
    /// Common difference (arithmetic) or common ratio (geometric).
    pub step: f64,
    /// Number of terms to produce.
    pub term_count: u64,
}

impl Default for SequenceRequest {
    fn default() -> Self {
        Self {
            kind: SequenceKind::default(),
            first_term: DEFAULT_FIRST_TERM,
            step: DEFAULT_STEP,
            term_count: DEFAULT_TERM_COUNT,
        }
    }
}

impl SequenceRequest {
    #[must_use]
    pub fn new(kind: SequenceKind, first_term: f64, step: f64, term_count: u64) -> Self {
        Self {
            kind,
            first_term,
            step,
            term_count,
        }
    }

    /// Arithmetic request shorthand.
    #[must_use]
    pub fn arithmetic(first_term: f64, difference: f64, term_count: u64) -> Self {
        Self::new(SequenceKind::Arithmetic, first_term, difference, term_count)
    }

    /// Geometric request shorthand.
    #[must_use]
    pub fn geometric(first_term: f64, ratio: f64, term_count: u64) -> Self {
        Self::new(SequenceKind::Geometric, first_term, ratio, term_count)
    }
}

/// Terms and closed-form sum produced for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceResult {
    /// Terms in position order; `terms[0]` is position 1.
    pub terms: Vec<f64>,
    /// Closed-form partial sum.
    pub sum: f64,
}

impl SequenceResult {
    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Largest absolute term value, or 0 for an empty result.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.terms.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Smallest and largest finite term values; overflowed terms are skipped.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.terms
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// `(position, value)` pairs for plotting, positions starting at 1.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i + 1) as f64, v))
            .collect()
    }
}
