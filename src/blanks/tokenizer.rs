//! Lyric tokenizer
//!
//! Scans raw lyric text and produces the candidate tokens a quiz can blank
//! out. Skips structural lines (section markers like `[Chorus]`), then filters
//! out words too short or too common to make interesting blanks.

use crate::core::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Words never offered as blanks, compared case-insensitively
pub const STOPWORDS: [&str; 12] = [
    "the", "and", "but", "for", "with", "from", "that", "this", "have", "has", "was", "were",
];

/// Minimum word length, in characters, for a candidate
pub const MIN_WORD_LEN: usize = 3;

/// A word is a maximal run of word characters, apostrophes, and hyphens
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[\w'-]+\b").unwrap());

/// A whole line of the form `[...]`, ignoring surrounding whitespace
static SECTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[[^\]]*\]$").unwrap());

static STOPSET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Check whether a line is a section marker such as `[Verse 1]` or `[Chorus]`
///
/// Markers carry no lyric content and never yield candidates, but they still
/// occupy a line index.
#[must_use]
pub fn is_section_marker(line: &str) -> bool {
    SECTION_RE.is_match(line.trim())
}

/// Check whether a word is on the stoplist
#[must_use]
pub fn is_stopword(word: &str) -> bool {
    STOPSET.contains(word.to_lowercase().as_str())
}

/// Extract every candidate token from lyric text
///
/// Lines are split on `\n` and indexed from zero; blank, whitespace-only, and
/// section-marker lines are skipped but keep their index. Within a line, each
/// maximal word run becomes a candidate unless it is shorter than
/// [`MIN_WORD_LEN`] or on the stoplist. Tokens come back in reading order with
/// character offsets into their line.
///
/// # Examples
/// ```
/// use blankverse::blanks::extract_words;
///
/// let tokens = extract_words("[Chorus]\nLove is love\n");
/// let words: Vec<&str> = tokens.iter().map(|t| t.word()).collect();
/// assert_eq!(words, ["Love", "love"]);
/// assert_eq!(tokens[0].line_index(), 1);
/// ```
#[must_use]
pub fn extract_words(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (line_index, line) in text.split('\n').enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || SECTION_RE.is_match(trimmed) {
            continue;
        }

        for hit in WORD_RE.find_iter(line) {
            let word = hit.as_str();
            if word.chars().count() < MIN_WORD_LEN || is_stopword(word) {
                continue;
            }
            // The regex reports byte offsets; token positions are character offsets.
            let position = line[..hit.start()].chars().count();
            tokens.push(Token::new(word, line_index, position));
        }
    }

    tokens
}
