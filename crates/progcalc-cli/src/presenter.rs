//! CLI result presenter.

use std::fmt::Write as _;

use serde::Serialize;

use progcalc_core::constants::{DETAIL_TABLE_LIMIT, DISPLAY_PRECISION};
use progcalc_core::{SequenceRequest, SequenceResult};

use crate::chart::{render_plot, PlotSize};
use crate::explain::{
    about, formula_legend, plot_title, sum_formula, term_details, term_formula, TermDetail,
};
use crate::output::{format_g, format_number, format_param, format_terms};
use crate::ui::{header, metric, print_error};

/// Trait for presenting computed sequences to the user.
pub trait ResultPresenter {
    /// Present a computed sequence.
    fn present_result(&self, request: &SequenceRequest, result: &SequenceResult);

    /// Present an error; no partial result is shown.
    fn present_error(&self, error: &str);
}

/// Which sections the CLI presenter renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenterOptions {
    /// Only the terms and the sum.
    pub quiet: bool,
    /// Machine-readable JSON instead of text.
    pub json: bool,
    /// Show the term table regardless of the term count.
    pub details: bool,
    /// Skip the plot.
    pub no_plot: bool,
    /// Append the background notes for the sequence kind.
    pub about: bool,
}

/// JSON document emitted by `--json`.
///
/// JSON has no infinity, so overflowed terms and sums serialize as `null`
/// in `terms` and `sum`. The `_text` fields carry the same values in `%g`
/// form (`"inf"`, `"-inf"`) and are always present.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub request: &'a SequenceRequest,
    pub terms: &'a [f64],
    pub terms_text: Vec<String>,
    pub sum: f64,
    pub sum_text: String,
    pub details: Vec<TermDetail>,
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    options: PresenterOptions,
    plot_size: PlotSize,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(options: PresenterOptions) -> Self {
        Self {
            options,
            plot_size: PlotSize::default(),
        }
    }

    /// Override the plot size.
    #[must_use]
    pub fn with_plot_size(mut self, plot_size: PlotSize) -> Self {
        self.plot_size = plot_size;
        self
    }

    fn show_table(&self, request: &SequenceRequest) -> bool {
        self.options.details || request.term_count <= DETAIL_TABLE_LIMIT
    }

    /// Render the JSON report.
    pub fn render_json(
        &self,
        request: &SequenceRequest,
        result: &SequenceResult,
    ) -> serde_json::Result<String> {
        let report = JsonReport {
            request,
            terms: &result.terms,
            terms_text: result
                .terms
                .iter()
                .map(|&t| format_g(t, DISPLAY_PRECISION))
                .collect(),
            sum: result.sum,
            sum_text: format_g(result.sum, DISPLAY_PRECISION),
            details: term_details(request, result),
        };
        serde_json::to_string_pretty(&report)
    }

    /// Render the text report.
    #[must_use]
    pub fn render(&self, request: &SequenceRequest, result: &SequenceResult) -> String {
        let sum = format_g(result.sum, DISPLAY_PRECISION);
        let terms = format_terms(&result.terms, DISPLAY_PRECISION);

        if self.options.quiet {
            return format!("{terms}\n{sum}\n");
        }

        let kind = request.kind;
        let n = request.term_count;
        let mut out = String::new();

        let _ = writeln!(out, "{}", header("Formulas"));
        let _ = writeln!(out, "General Term:  {}", term_formula(kind));
        for line in formula_legend(request) {
            let _ = writeln!(out, "  - {line}");
        }
        let _ = writeln!(out, "Sum of First n Terms:  {}", sum_formula(kind, request.step));
        let _ = writeln!(out, "  For n = {} terms: S({n}) = {sum}", format_number(n));
        out.push('\n');

        let _ = writeln!(out, "{}", header("Sequence Terms"));
        let _ = writeln!(out, "Terms: {terms}");
        out.push('\n');

        if self.show_table(request) {
            let _ = writeln!(out, "{}", header("Term Details"));
            out.push_str(&render_table(&term_details(request, result)));
            out.push('\n');
        }

        if !self.options.no_plot {
            let _ = writeln!(out, "{}", header("Visualization"));
            out.push_str(&render_plot(&plot_title(request), result, self.plot_size));
            out.push('\n');
        }

        let _ = writeln!(out, "{}", header("Mathematical Insights"));
        let _ = writeln!(
            out,
            "{}",
            metric("First Term", &format_param(request.first_term))
        );
        let _ = writeln!(
            out,
            "{}",
            metric(kind.step_name(), &format_param(request.step))
        );
        let _ = writeln!(out, "{}", metric("Sum of All Terms", &sum));

        if self.options.about {
            out.push('\n');
            let _ = writeln!(out, "{}", about(kind));
        }

        out
    }
}

/// Render term detail rows as an aligned three-column table.
#[must_use]
pub fn render_table(rows: &[TermDetail]) -> String {
    const HEADERS: [&str; 3] = ["Position (n)", "Calculation", "Value (aₙ)"];

    let width = |s: &str| s.chars().count();
    let mut widths = HEADERS.map(width);
    for row in rows {
        widths[0] = widths[0].max(width(&row.position.to_string()));
        widths[1] = widths[1].max(width(&row.calculation));
        widths[2] = widths[2].max(width(&row.value));
    }

    let pad = |s: &str, w: usize| format!("{s}{}", " ".repeat(w.saturating_sub(width(s))));
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} | {} | {}",
        pad(HEADERS[0], widths[0]),
        pad(HEADERS[1], widths[1]),
        pad(HEADERS[2], widths[2])
    );
    let _ = writeln!(
        out,
        "{}-+-{}-+-{}",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>w0$} | {} | {}",
            row.position,
            pad(&row.calculation, widths[1]),
            pad(&row.value, widths[2]),
            w0 = widths[0]
        );
    }
    out
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, request: &SequenceRequest, result: &SequenceResult) {
        tracing::debug!(terms = result.len(), json = self.options.json, "presenting result");
        if self.options.json {
            match self.render_json(request, result) {
                Ok(json) => println!("{json}"),
                Err(e) => self.present_error(&format!("failed to encode JSON: {e}")),
            }
            return;
        }
        print!("{}", self.render(request, result));
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
