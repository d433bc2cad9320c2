//! Lyric sources
//!
//! Provides the embedded demo lyrics plus file loading utilities.

mod embedded;
pub mod loader;

pub use embedded::{DEMO_ARTIST, DEMO_LYRICS, DEMO_TITLE};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blanks::{extract_words, is_section_marker};

    #[test]
    fn demo_lyrics_have_plenty_of_candidates() {
        let tokens = extract_words(DEMO_LYRICS);
        assert!(tokens.len() >= 20, "only {} candidates", tokens.len());
    }

    #[test]
    fn demo_lyrics_use_section_markers() {
        let markers = DEMO_LYRICS
            .lines()
            .filter(|line| is_section_marker(line))
            .count();
        assert_eq!(markers, 2);
    }

    #[test]
    fn demo_repeats_its_title_word() {
        // "grace" appears throughout, which keeps the frequent strategy interesting.
        let tokens = extract_words(DEMO_LYRICS);
        let graces = tokens.iter().filter(|t| t.folded() == "grace").count();
        assert!(graces >= 4);
    }

    #[test]
    fn demo_metadata_present() {
        assert!(!DEMO_TITLE.is_empty());
        assert!(!DEMO_ARTIST.is_empty());
    }
}
