//! Educational text: formulas, per-term calculations and background notes.

use serde::Serialize;

use progcalc_core::constants::DISPLAY_PRECISION;
use progcalc_core::{SequenceKind, SequenceRequest, SequenceResult};

use crate::output::{format_g, format_param};

/// One row of the term detail table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermDetail {
    /// 1-based position.
    pub position: u64,
    /// Substituted formula, e.g. `1.0 + (3-1)×2.0 = 5`.
    pub calculation: String,
    /// Formatted term value.
    pub value: String,
}

/// General term formula.
#[must_use]
pub fn term_formula(kind: SequenceKind) -> &'static str {
    match kind {
        SequenceKind::Arithmetic => "aₙ = a₁ + (n-1)d",
        SequenceKind::Geometric => "aₙ = a₁ × r^(n-1)",
    }
}

/// Partial sum formula; the geometric form depends on whether r = 1.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn sum_formula(kind: SequenceKind, step: f64) -> &'static str {
    match kind {
        SequenceKind::Arithmetic => "Sₙ = n/2 × [2a₁ + (n-1)d]",
        SequenceKind::Geometric if step == 1.0 => "Sₙ = n × a₁  (when r = 1)",
        SequenceKind::Geometric => "Sₙ = a₁ × (1 - rⁿ) / (1 - r)  (when r ≠ 1)",
    }
}

/// Legend explaining the symbols of the term formula.
#[must_use]
pub fn formula_legend(request: &SequenceRequest) -> Vec<String> {
    let kind = request.kind;
    vec![
        format!("a₁ = {} (first term)", format_param(request.first_term)),
        format!(
            "{} = {} ({})",
            kind.step_symbol(),
            format_param(request.step),
            kind.step_name().to_lowercase()
        ),
        "n = term position".to_string(),
    ]
}

/// Calculation string for one term.
#[must_use]
pub fn calculation(request: &SequenceRequest, position: u64, value: f64) -> String {
    let a = format_param(request.first_term);
    let step = format_param(request.step);
    let v = format_g(value, DISPLAY_PRECISION);
    match request.kind {
        SequenceKind::Arithmetic => format!("{a} + ({position}-1)×{step} = {v}"),
        SequenceKind::Geometric => format!("{a} × {step}^({position}-1) = {v}"),
    }
}

/// Build the term detail rows for a computed sequence.
#[must_use]
pub fn term_details(request: &SequenceRequest, result: &SequenceResult) -> Vec<TermDetail> {
    (1u64..)
        .zip(&result.terms)
        .map(|(position, &value)| TermDetail {
            position,
            calculation: calculation(request, position, value),
            value: format_g(value, DISPLAY_PRECISION),
        })
        .collect()
}

/// Title used for plots.
#[must_use]
pub fn plot_title(request: &SequenceRequest) -> String {
    format!(
        "{} Sequence: a₁={}, {}={}",
        request.kind,
        format_param(request.first_term),
        request.kind.step_symbol(),
        format_param(request.step)
    )
}

/// Background notes for a sequence kind: definition, key properties and
/// real-life examples.
#[must_use]
pub fn about(kind: SequenceKind) -> &'static str {
    match kind {
        SequenceKind::Arithmetic => ABOUT_ARITHMETIC,
        SequenceKind::Geometric => ABOUT_GEOMETRIC,
    }
}

const ABOUT_ARITHMETIC: &str = "\
About Arithmetic Sequences

An arithmetic sequence is a sequence of numbers where each term after the
first is obtained by adding a constant value (the common difference) to the
previous term.

Key Properties:
  - The difference between consecutive terms is constant
  - The general term is aₙ = a₁ + (n-1)d
  - The sum of the first n terms is Sₙ = n/2 × [2a₁ + (n-1)d]

Examples in Real Life:
  - Saving money regularly (e.g., $50 each month)
  - Temperature changes at regular intervals
  - Seating arrangements in theaters";

const ABOUT_GEOMETRIC: &str = "\
About Geometric Sequences

A geometric sequence is a sequence of numbers where each term after the
first is obtained by multiplying the previous term by a constant value (the
common ratio).

Key Properties:
  - The ratio between consecutive terms is constant
  - The general term is aₙ = a₁ × r^(n-1)
  - The sum of the first n terms is Sₙ = a₁ × (1-rⁿ)/(1-r) when r ≠ 1
  - When r = 1, the sum is simply Sₙ = n × a₁

Examples in Real Life:
  - Population growth (doubling every generation)
  - Compound interest in banking
  - Radioactive decay (half-life)
  - Viral spread patterns";

#[cfg(test)]
mod tests {
    use super::*;
    use progcalc_core::compute;

    #[test]
    fn arithmetic_calculation_string() {
        let req = SequenceRequest::arithmetic(1.0, 2.0, 10);
        assert_eq!(calculation(&req, 3, 5.0), "1.0 + (3-1)×2.0 = 5");
    }

    #[test]
    fn geometric_calculation_string() {
        let req = SequenceRequest::geometric(3.0, 0.5, 4);
        assert_eq!(calculation(&req, 4, 0.375), "3.0 × 0.5^(4-1) = 0.375");
    }

    #[test]
    fn term_details_cover_every_term() {
        let req = SequenceRequest::geometric(1.0, 2.0, 5);
        let result = compute(&req).unwrap();
        let rows = term_details(&req, &result);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[4].position, 5);
        assert_eq!(rows[4].value, "16");
        assert!(rows[4].calculation.ends_with("= 16"));
    }

    #[test]
    fn sum_formula_unit_ratio_branch() {
        assert!(sum_formula(SequenceKind::Geometric, 1.0).contains("r = 1"));
        assert!(sum_formula(SequenceKind::Geometric, 2.0).contains("r ≠ 1"));
        assert!(sum_formula(SequenceKind::Arithmetic, 1.0).contains("n/2"));
    }

    #[test]
    fn legend_names_step_parameter() {
        let legend = formula_legend(&SequenceRequest::geometric(1.0, 3.0, 2));
        assert_eq!(legend[1], "r = 3.0 (common ratio)");
    }

    #[test]
    fn plot_title_mentions_parameters() {
        let title = plot_title(&SequenceRequest::arithmetic(1.0, 2.0, 3));
        assert_eq!(title, "Arithmetic Sequence: a₁=1.0, d=2.0");
    }

    #[test]
    fn about_text_per_kind() {
        assert!(about(SequenceKind::Arithmetic).contains("common difference"));
        assert!(about(SequenceKind::Geometric).contains("r = 1"));
    }
}
