//! Sequence kinds and their term/sum formulas.
//!
//! `SequenceKind` is the single dispatch point between the arithmetic and
//! geometric formulas. The functions here are raw evaluations: validation
//! and NaN policy live in [`crate::engine`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two supported progression kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    /// Constant difference between consecutive terms.
    #[default]
    Arithmetic,
    /// Constant ratio between consecutive terms.
    Geometric,
}

/// Error returned when a sequence kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sequence kind: {0} (expected arithmetic or geometric)")]
pub struct ParseKindError(pub String);

impl SequenceKind {
    /// All kinds, in display order.
    pub const ALL: [SequenceKind; 2] = [SequenceKind::Arithmetic, SequenceKind::Geometric];

    /// Human-readable name of the step parameter.
    #[must_use]
    pub fn step_name(self) -> &'static str {
        match self {
            Self::Arithmetic => "Common Difference",
            Self::Geometric => "Common Ratio",
        }
    }

    /// Conventional symbol of the step parameter.
    #[must_use]
    pub fn step_symbol(self) -> &'static str {
        match self {
            Self::Arithmetic => "d",
            Self::Geometric => "r",
        }
    }

    /// The other kind.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Arithmetic => Self::Geometric,
            Self::Geometric => Self::Arithmetic,
        }
    }

    /// Evaluate the term at 1-based `position`.
    ///
    /// A zero first term short-circuits so that an overflowing power does
    /// not turn `0 * inf` into NaN.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn term(self, first_term: f64, step: f64, position: u64) -> f64 {
        let offset = position.saturating_sub(1) as f64;
        match self {
            Self::Arithmetic => first_term + offset * step,
            Self::Geometric => {
                if first_term == 0.0 {
                    return first_term;
                }
                first_term * step.powf(offset)
            }
        }
    }

    /// Evaluate the closed-form sum of the first `term_count` terms.
    ///
    /// The geometric ratio is compared against 1 exactly: the general
    /// formula has a removable singularity there, and ratios merely close
    /// to 1 go through the general formula.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub(crate) fn closed_form_sum(self, first_term: f64, step: f64, term_count: u64) -> f64 {
        let n = term_count as f64;
        match self {
            Self::Arithmetic => (n / 2.0) * (2.0 * first_term + (n - 1.0) * step),
            Self::Geometric => {
                if step == 1.0 {
                    n * first_term
                } else if first_term == 0.0 {
                    0.0
                } else {
                    first_term * (1.0 - step.powf(n)) / (1.0 - step)
                }
            }
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arithmetic => f.write_str("Arithmetic"),
            Self::Geometric => f.write_str("Geometric"),
        }
    }
}

impl FromStr for SequenceKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arithmetic" | "arith" | "a" => Ok(Self::Arithmetic),
            "geometric" | "geo" | "g" => Ok(Self::Geometric),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("arithmetic".parse(), Ok(SequenceKind::Arithmetic));
        assert_eq!("Geometric".parse(), Ok(SequenceKind::Geometric));
        assert_eq!(" g ".parse(), Ok(SequenceKind::Geometric));
        assert_eq!("A".parse(), Ok(SequenceKind::Arithmetic));
    }

    #[test]
    fn parse_unknown_kind() {
        let err = "harmonic".parse::<SequenceKind>().unwrap_err();
        assert!(err.to_string().contains("harmonic"));
    }

    #[test]
    fn display_and_serde_names() {
        assert_eq!(SequenceKind::Arithmetic.to_string(), "Arithmetic");
        assert_eq!(
            serde_json::to_string(&SequenceKind::Geometric).unwrap(),
            "\"geometric\""
        );
    }

    #[test]
    fn toggled_flips_kind() {
        assert_eq!(SequenceKind::Arithmetic.toggled(), SequenceKind::Geometric);
        assert_eq!(SequenceKind::Geometric.toggled(), SequenceKind::Arithmetic);
    }

    #[test]
    fn step_metadata() {
        assert_eq!(SequenceKind::Arithmetic.step_symbol(), "d");
        assert_eq!(SequenceKind::Geometric.step_symbol(), "r");
        assert_eq!(SequenceKind::Geometric.step_name(), "Common Ratio");
    }

    #[test]
    fn geometric_zero_ratio_uses_zero_pow_zero() {
        let kind = SequenceKind::Geometric;
        assert_eq!(kind.term(7.0, 0.0, 1), 7.0);
        assert_eq!(kind.term(7.0, 0.0, 2), 0.0);
    }

    #[test]
    fn geometric_zero_first_term_survives_overflow() {
        let kind = SequenceKind::Geometric;
        assert_eq!(kind.term(0.0, 1e300, 5), 0.0);
        assert_eq!(kind.closed_form_sum(0.0, 1e300, 5), 0.0);
    }

    #[test]
    fn geometric_unit_ratio_branch() {
        assert_eq!(SequenceKind::Geometric.closed_form_sum(3.0, 1.0, 6), 18.0);
    }
}
