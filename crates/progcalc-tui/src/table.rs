//! Term detail table widget.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Row, Table};
use ratatui::Frame;

use progcalc_cli::explain::TermDetail;

use crate::styles::ColorTheme;

/// Render the per-term calculation table, starting at row `offset`.
pub fn render_term_table(frame: &mut Frame, area: Rect, rows: &[TermDetail], offset: usize) {
    let theme = ColorTheme::default();
    let offset = offset.min(rows.len().saturating_sub(1));

    let header = Row::new(vec!["n", "Calculation", "Value (aₙ)"]).style(theme.header_style());
    let body = rows.iter().skip(offset).map(|row| {
        Row::new(vec![
            row.position.to_string(),
            row.calculation.clone(),
            row.value.clone(),
        ])
        .style(theme.text_style())
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(12),
    ];
    let title = format!(" Term Details ({} terms) ", rows.len());
    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}
