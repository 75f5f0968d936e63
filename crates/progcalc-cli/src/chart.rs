//! Braille line plot of term value against position.

use progcalc_core::constants::{
    ANNOTATION_MAGNITUDE_LIMIT, ANNOTATION_PRECISION, ANNOTATION_TERM_LIMIT, DISPLAY_PRECISION,
};
use progcalc_core::SequenceResult;

use crate::output::format_g;

/// Braille character base offset (Unicode block U+2800).
const BRAILLE_BASE: u32 = 0x2800;

/// Braille dot bits for the four rows of a cell, bottom row first.
/// Each Braille character has 2 columns x 4 rows = 8 dots.
const BRAILLE_LEFT: [u32; 4] = [0x40, 0x04, 0x02, 0x01];
const BRAILLE_RIGHT: [u32; 4] = [0x80, 0x20, 0x10, 0x08];

/// Plot dimensions in character cells.
#[derive(Debug, Clone, Copy)]
pub struct PlotSize {
    pub width: usize,
    pub height: usize,
}

impl Default for PlotSize {
    fn default() -> Self {
        Self {
            width: 60,
            height: 12,
        }
    }
}

/// Whether plot points should carry value labels.
#[must_use]
pub fn should_annotate(result: &SequenceResult) -> bool {
    result.len() as u64 <= ANNOTATION_TERM_LIMIT && result.max_abs() < ANNOTATION_MAGNITUDE_LIMIT
}

/// Map a value into `0..=span`; non-finite values have no position.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn scale(value: f64, min: f64, range: f64, span: usize) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let t = ((value - min) / range).clamp(0.0, 1.0);
    Some((t * span as f64).round() as usize)
}

/// Rasterise the terms into Braille-encoded lines, consecutive points
/// joined by straight segments.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
#[must_use]
pub fn braille_lines(result: &SequenceResult, size: PlotSize) -> Vec<String> {
    if result.is_empty() || size.width == 0 || size.height == 0 {
        return Vec::new();
    }

    let dot_w = size.width * 2;
    let dot_h = size.height * 4;
    let (min, max) = result.bounds().unwrap_or((0.0, 0.0));
    let range = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };
    // A flat series sits in the middle of the plot.
    let flat_offset = if (max - min).abs() < f64::EPSILON {
        (dot_h - 1) / 2
    } else {
        0
    };

    let n = result.len();
    let dots: Vec<Option<(usize, usize)>> = result
        .terms
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if n == 1 {
                dot_w / 2
            } else {
                ((i as f64) * (dot_w - 1) as f64 / (n - 1) as f64).round() as usize
            };
            scale(v, min, range, dot_h - 1).map(|y| (x, y + flat_offset))
        })
        .collect();

    let mut grid = vec![vec![false; dot_w]; dot_h];
    let mut plot = |x: usize, y: usize| {
        if x < dot_w && y < dot_h {
            grid[y][x] = true;
        }
    };

    for (i, dot) in dots.iter().enumerate() {
        let Some((x0, y0)) = *dot else { continue };
        plot(x0, y0);
        let Some(Some((x1, y1))) = dots.get(i + 1) else {
            continue;
        };
        let dx = *x1 as isize - x0 as isize;
        let dy = *y1 as isize - y0 as isize;
        let steps = dx.abs().max(dy.abs()).max(1);
        for s in 1..=steps {
            let x = x0 as isize + dx * s / steps;
            let y = y0 as isize + dy * s / steps;
            plot(x as usize, y as usize);
        }
    }

    (0..size.height)
        .map(|row_from_top| {
            let base_y = (size.height - 1 - row_from_top) * 4;
            (0..size.width)
                .map(|cx| {
                    let mut code = BRAILLE_BASE;
                    for k in 0..4 {
                        let row = &grid[base_y + k];
                        if row[cx * 2] {
                            code |= BRAILLE_LEFT[k];
                        }
                        if row[cx * 2 + 1] {
                            code |= BRAILLE_RIGHT[k];
                        }
                    }
                    char::from_u32(code).unwrap_or(' ')
                })
                .collect()
        })
        .collect()
}

/// Render a titled plot with a labelled y axis and position ticks.
#[must_use]
pub fn render_plot(title: &str, result: &SequenceResult, size: PlotSize) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    let lines = braille_lines(result, size);
    if lines.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let (min, max) = result.bounds().unwrap_or((0.0, 0.0));
    let top = format_g(max, DISPLAY_PRECISION);
    let bottom = format_g(min, DISPLAY_PRECISION);
    let label_w = top.chars().count().max(bottom.chars().count());

    for (i, line) in lines.iter().enumerate() {
        let label = if i == 0 {
            top.as_str()
        } else if i == lines.len() - 1 {
            bottom.as_str()
        } else {
            ""
        };
        out.push_str(&format!("{label:>label_w$} ┤{line}\n"));
    }

    out.push_str(&format!("{:>label_w$} └{}\n", "", "─".repeat(size.width)));
    let last = result.len().to_string();
    let gap = size.width.saturating_sub(1 + last.len());
    out.push_str(&format!("{:>label_w$}  1{}{last}\n", "", " ".repeat(gap)));
    out.push_str(&format!(
        "{:>label_w$}  Term Position (n) vs Term Value (aₙ)\n",
        ""
    ));

    if should_annotate(result) {
        let labels: Vec<String> = result
            .terms
            .iter()
            .enumerate()
            .map(|(i, &v)| format!("({}, {})", i + 1, format_g(v, ANNOTATION_PRECISION)))
            .collect();
        out.push_str(&format!("Points: {}\n", labels.join(" ")));
    }

    out
}
