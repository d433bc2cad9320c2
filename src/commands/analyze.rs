//! Lyrics analysis command
//!
//! Reports what the tokenizer finds in a lyrics file: how many lines carry
//! content, which words repeat, and how many blanks each difficulty would
//! produce. Useful before generating, to judge whether a lyric makes a
//! playable quiz.

use crate::blanks::{Difficulty, extract_words, is_section_marker};
use rustc_hash::{FxHashMap, FxHashSet};

/// How many entries the repeated and longest tables keep
const TABLE_LIMIT: usize = 8;

/// Result of analyzing lyric text
pub struct LyricsAnalysis {
    pub total_lines: usize,
    pub lyric_lines: usize,
    pub marker_lines: usize,
    pub candidates: usize,
    pub unique_forms: usize,
    /// Case-folded forms appearing more than once, most frequent first
    pub top_repeated: Vec<(String, usize)>,
    /// Longest distinct words with their character lengths
    pub longest: Vec<(String, usize)>,
    /// Blank counts each difficulty would request
    pub difficulty_blanks: [(Difficulty, usize); 3],
}

/// Analyze lyric text
#[must_use]
pub fn analyze_lyrics(text: &str) -> LyricsAnalysis {
    let tokens = extract_words(text);

    let mut total_lines = 0;
    let mut lyric_lines = 0;
    let mut marker_lines = 0;
    for line in text.lines() {
        total_lines += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_section_marker(trimmed) {
            marker_lines += 1;
        } else {
            lyric_lines += 1;
        }
    }

    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for token in &tokens {
        *counts.entry(token.folded()).or_insert(0) += 1;
    }
    let unique_forms = counts.len();

    let mut top_repeated: Vec<(String, usize)> = counts
        .iter()
        .filter(|&(_, &count)| count > 1)
        .map(|(form, &count)| (form.clone(), count))
        .collect();
    top_repeated.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_repeated.truncate(TABLE_LIMIT);

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut longest: Vec<(String, usize)> = Vec::new();
    for token in &tokens {
        if seen.insert(token.folded()) {
            longest.push((token.word().to_string(), token.length()));
        }
    }
    longest.sort_by(|a, b| b.1.cmp(&a.1));
    longest.truncate(TABLE_LIMIT);

    let candidates = tokens.len();
    let difficulty_blanks = Difficulty::ALL.map(|d| (d, d.blank_count(candidates)));

    LyricsAnalysis {
        total_lines,
        lyric_lines,
        marker_lines,
        candidates,
        unique_forms,
        top_repeated,
        longest,
        difficulty_blanks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::DEMO_LYRICS;

    #[test]
    fn demo_analysis_counts() {
        let analysis = analyze_lyrics(DEMO_LYRICS);
        assert_eq!(analysis.marker_lines, 2);
        assert_eq!(analysis.lyric_lines, 8);
        assert_eq!(analysis.candidates, 31);
        assert_eq!(analysis.unique_forms, 26);
    }

    #[test]
    fn demo_analysis_top_repeated() {
        let analysis = analyze_lyrics(DEMO_LYRICS);
        assert_eq!(analysis.top_repeated[0], ("grace".to_string(), 4));
        // Every listed form really repeats
        assert!(analysis.top_repeated.iter().all(|&(_, count)| count > 1));
    }

    #[test]
    fn demo_analysis_longest_words() {
        let analysis = analyze_lyrics(DEMO_LYRICS);
        assert_eq!(analysis.longest[0].1, 8);
        let top: Vec<&str> = analysis.longest[..3].iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(top, ["relieved", "precious", "believed"]);
    }

    #[test]
    fn demo_analysis_difficulty_table() {
        let analysis = analyze_lyrics(DEMO_LYRICS);
        // 31 candidates: floor gives 3/6/10, easy raised to the minimum of 5
        assert_eq!(analysis.difficulty_blanks[0], (Difficulty::Easy, 5));
        assert_eq!(analysis.difficulty_blanks[1], (Difficulty::Medium, 6));
        assert_eq!(analysis.difficulty_blanks[2], (Difficulty::Hard, 10));
    }

    #[test]
    fn empty_text_analysis() {
        let analysis = analyze_lyrics("");
        assert_eq!(analysis.candidates, 0);
        assert_eq!(analysis.lyric_lines, 0);
        assert!(analysis.top_repeated.is_empty());
        assert!(analysis.longest.is_empty());
        assert_eq!(analysis.difficulty_blanks[2], (Difficulty::Hard, 0));
    }

    #[test]
    fn repeated_table_sorted_by_count_then_name() {
        let analysis = analyze_lyrics("echo echo echo\nriver river\nstone stone\n");
        assert_eq!(
            analysis.top_repeated,
            [
                ("echo".to_string(), 3),
                ("river".to_string(), 2),
                ("stone".to_string(), 2),
            ]
        );
    }
}
