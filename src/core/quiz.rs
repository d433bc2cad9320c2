//! Quiz record types
//!
//! A finished quiz is a single record pairing the blanked text with its answer
//! key. The two halves reference each other through blank ids, so they must
//! travel together; persistence and grading both work off this record.

use crate::core::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which selection strategy produced a quiz
///
/// Serialized in lowercase to match the stored quiz format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Random,
    Important,
    Frequent,
}

impl StrategyKind {
    /// Get the lowercase name used in stored quizzes and on the CLI
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Important => "important",
            Self::Frequent => "frequent",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selected token plus its assigned blank id
///
/// Ids are assigned after selection, in reading order: blanks are sorted by
/// (line, position) and numbered 0, 1, 2, ... with no gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blank {
    token: Token,
    id: u32,
}

impl Blank {
    #[must_use]
    pub const fn new(token: Token, id: u32) -> Self {
        Self { token, id }
    }

    /// Get the blank id embedded in the placeholder
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Get the underlying token
    #[inline]
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Get the hidden word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        self.token.word()
    }

    /// Get the zero-based source line
    #[inline]
    #[must_use]
    pub const fn line_index(&self) -> usize {
        self.token.line_index()
    }

    /// Get the character offset within the source line
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.token.position()
    }

    /// Get the hidden word's length in characters
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.token.length()
    }
}

/// One answer key item
///
/// `line_index` and `position` describe where the word sat in the original
/// lyrics. Lookups go through `id` alone; the location fields are carried for
/// consumers that want to highlight or reconstruct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntry {
    pub id: u32,
    pub answer: String,
    pub line_index: usize,
    pub position: usize,
}

impl AnswerEntry {
    #[must_use]
    pub fn from_blank(blank: &Blank) -> Self {
        Self {
            id: blank.id(),
            answer: blank.word().to_string(),
            line_index: blank.line_index(),
            position: blank.position(),
        }
    }
}

/// A complete playable quiz: blanked text plus answer key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    pub strategy: StrategyKind,
    pub quiz_text: String,
    pub answers: Vec<AnswerEntry>,
}

impl Quiz {
    /// Get the number of blanks in this quiz
    #[inline]
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.answers.len()
    }

    /// Look up an answer key item by blank id
    #[must_use]
    pub fn answer_for(&self, id: u32) -> Option<&AnswerEntry> {
        self.answers.iter().find(|entry| entry.id == id)
    }

    /// Get a display heading, falling back to a generic label
    #[must_use]
    pub fn heading(&self) -> String {
        match (&self.title, &self.artist) {
            (Some(title), Some(artist)) => format!("{title} - {artist}"),
            (Some(title), None) => title.clone(),
            (None, Some(artist)) => format!("Untitled - {artist}"),
            (None, None) => "Lyric Quiz".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Quiz {
        Quiz {
            title: Some("Amazing Grace".to_string()),
            artist: Some("John Newton".to_string()),
            strategy: StrategyKind::Important,
            quiz_text: "_____0_____ grace how sweet the sound".to_string(),
            answers: vec![AnswerEntry {
                id: 0,
                answer: "Amazing".to_string(),
                line_index: 0,
                position: 0,
            }],
        }
    }

    #[test]
    fn strategy_kind_names() {
        assert_eq!(StrategyKind::Random.as_str(), "random");
        assert_eq!(StrategyKind::Important.as_str(), "important");
        assert_eq!(StrategyKind::Frequent.as_str(), "frequent");
        assert_eq!(format!("{}", StrategyKind::Frequent), "frequent");
    }

    #[test]
    fn strategy_kind_default_is_random() {
        assert_eq!(StrategyKind::default(), StrategyKind::Random);
    }

    #[test]
    fn blank_exposes_token_fields() {
        let blank = Blank::new(Token::new("sound", 0, 28), 1);
        assert_eq!(blank.id(), 1);
        assert_eq!(blank.word(), "sound");
        assert_eq!(blank.line_index(), 0);
        assert_eq!(blank.position(), 28);
        assert_eq!(blank.length(), 5);
    }

    #[test]
    fn answer_entry_from_blank() {
        let blank = Blank::new(Token::new("wretch", 1, 13), 3);
        let entry = AnswerEntry::from_blank(&blank);
        assert_eq!(entry.id, 3);
        assert_eq!(entry.answer, "wretch");
        assert_eq!(entry.line_index, 1);
        assert_eq!(entry.position, 13);
    }

    #[test]
    fn quiz_answer_lookup_by_id() {
        let quiz = sample_quiz();
        assert_eq!(quiz.blank_count(), 1);
        assert_eq!(quiz.answer_for(0).map(|e| e.answer.as_str()), Some("Amazing"));
        assert!(quiz.answer_for(7).is_none());
    }

    #[test]
    fn quiz_serializes_camel_case() {
        let json = serde_json::to_string(&sample_quiz()).unwrap();
        assert!(json.contains("\"quizText\""));
        assert!(json.contains("\"lineIndex\""));
        assert!(json.contains("\"strategy\":\"important\""));
        assert!(!json.contains("\"quiz_text\""));
    }

    #[test]
    fn quiz_round_trips_through_json() {
        let quiz = sample_quiz();
        let json = serde_json::to_string(&quiz).unwrap();
        let back: Quiz = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quiz);
    }

    #[test]
    fn quiz_optional_metadata_omitted() {
        let mut quiz = sample_quiz();
        quiz.title = None;
        quiz.artist = None;
        let json = serde_json::to_string(&quiz).unwrap();
        assert!(!json.contains("title"));
        assert!(!json.contains("artist"));
        assert_eq!(quiz.heading(), "Lyric Quiz");
    }

    #[test]
    fn quiz_heading_formats() {
        let quiz = sample_quiz();
        assert_eq!(quiz.heading(), "Amazing Grace - John Newton");
    }
}
