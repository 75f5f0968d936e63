//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

use progcalc_core::SequenceKind;

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub arithmetic: Color,
    pub geometric: Color,
    pub error: Color,
    pub highlight: Color,
    pub text: Color,
    pub muted: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            arithmetic: Color::Blue,
            geometric: Color::Red,
            error: Color::Red,
            highlight: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for the selected input field.
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Get the style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Line color for a sequence kind: blue arithmetic, red geometric.
    #[must_use]
    pub fn series_style(&self, kind: SequenceKind) -> Style {
        match kind {
            SequenceKind::Arithmetic => Style::default().fg(self.arithmetic),
            SequenceKind::Geometric => Style::default().fg(self.geometric),
        }
    }
}
