//! Bounded lazy iterator over the terms of a progression.

use crate::kind::SequenceKind;

/// Lazy iterator over positions `1..=term_count`.
///
/// Yields `(position, value)` pairs. Every term is evaluated directly from
/// its closed form, so iterating from either end gives identical values.
///
/// # Example
/// ```
/// use progcalc_core::{SequenceKind, Terms};
/// let terms: Vec<f64> = Terms::new(SequenceKind::Geometric, 1.0, 2.0, 5)
///     .map(|(_, v)| v)
///     .collect();
/// assert_eq!(terms, [1.0, 2.0, 4.0, 8.0, 16.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Terms {
    kind: SequenceKind,
    first_term: f64,
    step: f64,
    /// Next position yielded from the front.
    front: u64,
    /// Last position not yet yielded from the back (inclusive).
    back: u64,
}

impl Terms {
    /// Iterate over the first `term_count` terms. A zero count yields nothing.
    #[must_use]
    pub fn new(kind: SequenceKind, first_term: f64, step: f64, term_count: u64) -> Self {
        Self {
            kind,
            first_term,
            step,
            front: 1,
            back: term_count,
        }
    }

    fn remaining(&self) -> u64 {
        if self.front > self.back {
            0
        } else {
            self.back - self.front + 1
        }
    }
}

impl Iterator for Terms {
    type Item = (u64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let position = self.front;
        self.front += 1;
        Some((
            position,
            self.kind.term(self.first_term, self.step, position),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = u64::try_from(n).unwrap_or(u64::MAX);
        self.front = self.front.saturating_add(skip);
        self.next()
    }
}

impl DoubleEndedIterator for Terms {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let position = self.back;
        self.back -= 1;
        Some((
            position,
            self.kind.term(self.first_term, self.step, position),
        ))
    }
}

impl ExactSizeIterator for Terms {}

impl std::iter::FusedIterator for Terms {}
