//! Lyric loading utilities
//!
//! Reads lyric text files and derives display metadata from their paths.

use std::fs;
use std::io;
use std::path::Path;

/// Load lyric text from a file
///
/// Line endings are normalized to `\n` so line indexes match what the
/// tokenizer and encoder will report.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use blankverse::lyrics::loader::load_from_file;
///
/// let text = load_from_file("lyrics/amazing_grace.txt").unwrap();
/// println!("Loaded {} lines", text.lines().count());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(content.replace("\r\n", "\n"))
}

/// Derive a display title from a lyrics file path
///
/// Uses the file stem with separators spaced out and each word capitalized.
/// Returns `None` when the path has no usable stem.
#[must_use]
pub fn title_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let title = stem
        .split(['_', '-', ' '])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() { None } else { Some(title) }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
