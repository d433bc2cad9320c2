//! Quiz text rendering
//!
//! Replaces selected tokens with `_____N_____` placeholders, where N is the
//! blank id. The padded-digit shape is the one piece of wire grammar players'
//! clients parse, so both directions live here: rendering placeholders into
//! lyric text and splitting a rendered line back into segments.

use crate::core::Blank;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::fmt;
use std::ops::Range;

/// Underscore run flanking each side of a blank id
pub const PLACEHOLDER_PAD: &str = "_____";

/// The placeholder shape: five underscores, a decimal id, five underscores
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{5}([0-9]+)_{5}").unwrap());

/// Errors from rendering quiz text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The source text already contains a placeholder-shaped run
    MarkerCollision { line_index: usize },
    /// A blank references a line past the end of the text
    LineOutOfBounds { line_index: usize },
    /// A blank's span does not fit on its line
    SpanOutOfBounds {
        line_index: usize,
        position: usize,
        length: usize,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarkerCollision { line_index } => {
                write!(f, "line {line_index} already contains a blank placeholder")
            }
            Self::LineOutOfBounds { line_index } => {
                write!(f, "blank references line {line_index}, past the end of the text")
            }
            Self::SpanOutOfBounds {
                line_index,
                position,
                length,
            } => {
                write!(
                    f,
                    "blank span {position}..{} does not fit on line {line_index}",
                    position + length
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Format the placeholder for a blank id
///
/// # Examples
/// ```
/// use blankverse::blanks::placeholder;
///
/// assert_eq!(placeholder(7), "_____7_____");
/// ```
#[must_use]
pub fn placeholder(id: u32) -> String {
    format!("{PLACEHOLDER_PAD}{id}{PLACEHOLDER_PAD}")
}

/// Render lyric text with the selected blanks replaced by placeholders
///
/// Line structure is preserved exactly: every line of the input appears in
/// the output at the same index, with blanked spans swapped for placeholders.
/// Within a line, replacement runs right to left so earlier character offsets
/// stay valid as the line grows.
///
/// # Errors
/// Returns `EncodeError::MarkerCollision` if the source text already contains
/// a placeholder-shaped run, and `LineOutOfBounds`/`SpanOutOfBounds` if a
/// blank does not fit the text it claims to come from.
pub fn render_quiz_text(text: &str, blanks: &[Blank]) -> Result<String, EncodeError> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();

    // A pre-existing placeholder-shaped run would decode as a phantom blank.
    for (line_index, line) in lines.iter().enumerate() {
        if PLACEHOLDER_RE.is_match(line) {
            return Err(EncodeError::MarkerCollision { line_index });
        }
    }

    let mut by_line: FxHashMap<usize, Vec<&Blank>> = FxHashMap::default();
    for blank in blanks {
        by_line.entry(blank.line_index()).or_default().push(blank);
    }

    for (line_index, mut group) in by_line {
        let line = lines
            .get_mut(line_index)
            .ok_or(EncodeError::LineOutOfBounds { line_index })?;

        group.sort_unstable_by_key(|b| Reverse(b.position()));
        for blank in group {
            let range = char_span(line, blank.position(), blank.length()).ok_or(
                EncodeError::SpanOutOfBounds {
                    line_index,
                    position: blank.position(),
                    length: blank.length(),
                },
            )?;
            line.replace_range(range, &placeholder(blank.id()));
        }
    }

    Ok(lines.join("\n"))
}

/// One piece of a rendered quiz line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal lyric text
    Text(&'a str),
    /// A placeholder, carrying its blank id
    Gap(u32),
}

/// Split a rendered quiz line into literal text and gaps
///
/// Digit runs too long to be a real id are left as literal text; the encoder
/// never produces them.
#[must_use]
pub fn line_segments(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in PLACEHOLDER_RE.captures_iter(line) {
        let whole = caps.get(0).expect("group 0 is the whole match");
        if let Ok(id) = caps[1].parse::<u32>() {
            if whole.start() > cursor {
                segments.push(Segment::Text(&line[cursor..whole.start()]));
            }
            segments.push(Segment::Gap(id));
            cursor = whole.end();
        }
    }

    if cursor < line.len() {
        segments.push(Segment::Text(&line[cursor..]));
    }

    segments
}

/// Convert a character span to a byte range within `line`
///
/// Returns `None` if the span runs past the end of the line.
fn char_span(line: &str, position: usize, length: usize) -> Option<Range<usize>> {
    let mut offsets = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()));

    let start = offsets.by_ref().nth(position)?;
    let end = if length == 0 {
        start
    } else {
        offsets.nth(length - 1)?
    };
    Some(start..end)
}
