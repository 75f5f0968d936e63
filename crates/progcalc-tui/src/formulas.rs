//! Formulas, insights and background notes panels.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use progcalc_cli::explain::{about, formula_legend, sum_formula, term_formula};
use progcalc_cli::output::{format_g, format_param};
use progcalc_core::constants::DISPLAY_PRECISION;
use progcalc_core::{SequenceRequest, SequenceResult};

use crate::styles::ColorTheme;

/// Build the formulas and insights text.
#[must_use]
pub fn formula_lines(request: &SequenceRequest, result: &SequenceResult) -> Vec<Line<'static>> {
    let theme = ColorTheme::default();
    let kind = request.kind;
    let n = request.term_count;
    let sum = format_g(result.sum, DISPLAY_PRECISION);

    let mut lines = vec![
        Line::from(Span::styled("General Term", theme.header_style())),
        Line::from(format!("  {}", term_formula(kind))),
    ];
    lines.extend(
        formula_legend(request)
            .into_iter()
            .map(|l| Line::from(Span::styled(format!("    {l}"), theme.muted_style()))),
    );
    lines.push(Line::from(Span::styled(
        "Sum of First n Terms",
        theme.header_style(),
    )));
    lines.push(Line::from(format!("  {}", sum_formula(kind, request.step))));
    lines.push(Line::from(format!("  S({n}) = {sum}")));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Insights", theme.header_style())));
    lines.push(Line::from(format!(
        "  First Term: {}",
        format_param(request.first_term)
    )));
    lines.push(Line::from(format!(
        "  {}: {}",
        kind.step_name(),
        format_param(request.step)
    )));
    lines.push(Line::from(format!("  Sum of All Terms: {sum}")));
    lines
}

/// Render the formulas and insights panel.
pub fn render_formulas(
    frame: &mut Frame,
    area: Rect,
    request: &SequenceRequest,
    result: &SequenceResult,
) {
    let paragraph = Paragraph::new(formula_lines(request, result))
        .block(Block::default().borders(Borders::ALL).title(" Formulas "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the background notes for the current kind.
pub fn render_about(frame: &mut Frame, area: Rect, request: &SequenceRequest) {
    let lines: Vec<Line> = about(request.kind).lines().map(Line::from).collect();
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" About "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render an error in place of the result panels.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let theme = ColorTheme::default();
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(message.to_string(), theme.error_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Adjust the parameters to recompute.",
            theme.muted_style(),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Error "))
    .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
