//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let text = vec![Line::from(vec![
        key("q"),
        Span::raw(": quit | "),
        key("tab"),
        Span::raw(": kind | "),
        key("←/→"),
        Span::raw(": field | "),
        key("↑/↓"),
        Span::raw(": adjust | "),
        key("d"),
        Span::raw(": details | "),
        key("a"),
        Span::raw(": about | "),
        key("[/]"),
        Span::raw(": scroll | "),
        key("r"),
        Span::raw(": reset"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_footer_contains_all_shortcuts() {
        let backend = TestBackend::new(120, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area);
            })
            .unwrap();

        // Row 1 (after the border) holds the key hints
        let content: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        for hint in ["quit", "kind", "field", "adjust", "details", "about", "scroll", "reset"] {
            assert!(content.contains(hint), "missing {hint}");
        }
    }

    #[test]
    fn render_footer_small_area() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area);
            })
            .unwrap();
    }
}
