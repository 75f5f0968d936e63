//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A styled section header.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// A highlighted `label: value` line.
#[must_use]
pub fn metric(label: &str, value: &str) -> String {
    if is_color_disabled() {
        format!("{label}: {value}")
    } else {
        format!("{}: {}", style(label).dim(), style(value).bold())
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_text() {
        assert!(header("Formulas").contains("Formulas"));
    }

    #[test]
    fn metric_contains_label_and_value() {
        let line = metric("First Term", "1.0");
        assert!(line.contains("First Term"));
        assert!(line.contains("1.0"));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("Something went wrong");
        print_error("");
    }

    #[test]
    fn header_with_unicode() {
        assert!(header("Sₙ \u{2192} aₙ").contains("aₙ"));
    }
}
