//! TUI header panel with the editable parameters.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use progcalc_cli::output::format_param;
use progcalc_core::SequenceRequest;

use crate::model::Field;
use crate::styles::ColorTheme;

/// Render the header panel; the selected field is highlighted.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    request: &SequenceRequest,
    selected: Field,
    max_terms: u64,
) {
    let theme = ColorTheme::default();
    let field = |f: Field, text: String| {
        if f == selected {
            Span::styled(text, theme.selected_style())
        } else {
            Span::styled(text, theme.text_style())
        }
    };

    let text = vec![Line::from(vec![
        Span::styled(format!("{} ", request.kind), theme.header_style()),
        Span::styled("| ", theme.muted_style()),
        field(
            Field::FirstTerm,
            format!("a₁ = {}", format_param(request.first_term)),
        ),
        Span::styled(" | ", theme.muted_style()),
        field(
            Field::Step,
            format!(
                "{} = {}",
                request.kind.step_symbol(),
                format_param(request.step)
            ),
        ),
        Span::styled(" | ", theme.muted_style()),
        field(Field::TermCount, format!("n = {}", request.term_count)),
        Span::styled(format!(" (max {max_terms})"), theme.muted_style()),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" Sequence Explorer ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
