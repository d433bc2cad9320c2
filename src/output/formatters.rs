//! Formatting utilities for terminal output

use crate::blanks::{Segment, line_segments};

/// Format a gap label for terminal display
///
/// Blanks are numbered from 1 on screen; the wire format stays zero-based.
#[must_use]
pub fn gap_label(id: u32) -> String {
    format!("[___{}___]", id + 1)
}

/// Render one quiz line for the terminal
///
/// Placeholders become numbered gap labels so the prompts "Blank 1", "Blank 2"
/// have something to point at.
#[must_use]
pub fn display_line(line: &str) -> String {
    line_segments(line)
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => (*text).to_string(),
            Segment::Gap(id) => gap_label(*id),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a correct-out-of-total score as a bar
#[must_use]
pub fn score_bar(correct: usize, total: usize, width: usize) -> String {
    create_progress_bar(correct as f64, total as f64, width)
}
