//! Sequence line chart widget.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use progcalc_cli::chart::should_annotate;
use progcalc_cli::explain::plot_title;
use progcalc_cli::output::format_g;
use progcalc_core::constants::{ANNOTATION_PRECISION, DISPLAY_PRECISION};
use progcalc_core::{SequenceRequest, SequenceResult};

use crate::styles::ColorTheme;

/// Axis bounds with padding; degenerate ranges are widened by one unit.
#[must_use]
pub fn axis_bounds(lo: f64, hi: f64) -> [f64; 2] {
    if (hi - lo).abs() < f64::EPSILON {
        [lo - 1.0, hi + 1.0]
    } else {
        let pad = (hi - lo) * 0.05;
        [lo - pad, hi + pad]
    }
}

/// Render the term value against position as a line chart.
#[allow(clippy::cast_precision_loss)]
pub fn render_sequence_chart(
    frame: &mut Frame,
    area: Rect,
    request: &SequenceRequest,
    result: &SequenceResult,
) {
    let theme = ColorTheme::default();
    if area.width < 12 || area.height < 6 {
        // Too small for axes, show the frame only
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", request.kind));
        frame.render_widget(block, area);
        return;
    }

    let points: Vec<(f64, f64)> = result
        .points()
        .into_iter()
        .filter(|(_, y)| y.is_finite())
        .collect();

    let (lo, hi) = result.bounds().unwrap_or((0.0, 0.0));
    let y_bounds = axis_bounds(lo, hi);
    let n = result.len().max(1) as f64;
    let x_bounds = if n <= 1.0 { [0.5, 1.5] } else { [1.0, n] };

    let series_name = format!("{} Sequence", request.kind);
    let series = Dataset::default()
        .name(series_name)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme.series_style(request.kind))
        .data(&points);
    let markers = Dataset::default()
        .marker(Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(theme.series_style(request.kind).add_modifier(Modifier::BOLD))
        .data(&points);

    let x_labels = vec![
        Span::raw("1"),
        Span::raw(format_g((x_bounds[0] + x_bounds[1]) / 2.0, 3)),
        Span::raw(result.len().to_string()),
    ];
    let y_labels = vec![
        Span::raw(format_g(lo, DISPLAY_PRECISION)),
        Span::raw(format_g((lo + hi) / 2.0, DISPLAY_PRECISION)),
        Span::raw(format_g(hi, DISPLAY_PRECISION)),
    ];

    let mut title = format!(" {} ", plot_title(request));
    if should_annotate(result) {
        let labels: Vec<String> = result
            .terms
            .iter()
            .map(|&v| format_g(v, ANNOTATION_PRECISION))
            .collect();
        title.push_str(&format!("[{}] ", labels.join(", ")));
    }

    let chart = Chart::new(vec![series, markers])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, theme.header_style())),
        )
        .x_axis(
            Axis::default()
                .title("Term Position (n)")
                .style(Style::default().fg(theme.muted))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Term Value (aₙ)")
                .style(Style::default().fg(theme.muted))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
