//! Answer normalization
//!
//! Typed answers arrive with whatever punctuation the player's keyboard
//! produced. Smart quotes and long dashes fold to their ASCII forms before
//! comparison so "don't" typed with U+2019 still counts.

/// Normalize an answer for comparison
///
/// Trims surrounding whitespace, lowercases, then folds apostrophe and dash
/// variants to `'` and `-`. Applying it twice changes nothing.
///
/// # Examples
/// ```
/// use blankverse::grading::normalize;
///
/// assert_eq!(normalize("  Don\u{2019}t  "), "don't");
/// assert_eq!(normalize("say\u{2013}so"), "say-so");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase().chars().map(fold_char).collect()
}

/// Check whether two answers match after normalization
#[must_use]
pub fn answers_equal(given: &str, expected: &str) -> bool {
    normalize(given) == normalize(expected)
}

const fn fold_char(c: char) -> char {
    match c {
        // right single quote, modifier letter apostrophe, acute accent
        '\u{2019}' | '\u{02BC}' | '\u{00B4}' => '\'',
        // en dash, em dash, minus sign
        '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
        _ => c,
    }
}
