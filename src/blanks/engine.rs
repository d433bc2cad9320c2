//! Quiz assembly
//!
//! Ties the pipeline together: tokenize the lyrics, pick blanks, render the
//! placeholder text, and pair it with its answer key in one record. The
//! difficulty-to-count mapping lives here too, one layer above selection.

use crate::blanks::{
    EncodeError, StrategyType, extract_words, render_quiz_text, select_blanks,
};
use crate::core::{AnswerEntry, Quiz};
use std::fmt;

/// Fewest blanks a difficulty-derived quiz will ask for
///
/// Applied before capping, so tiny lyrics still cap at their candidate count.
pub const MIN_BLANKS: usize = 5;

/// Player-facing difficulty levels
///
/// Each maps to the share of candidate words that get blanked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Get the fraction of candidates blanked at this difficulty
    #[must_use]
    pub const fn ratio(self) -> f64 {
        match self {
            Self::Easy => 0.10,
            Self::Medium => 0.20,
            Self::Hard => 0.35,
        }
    }

    /// Map a candidate count to a blank count
    ///
    /// Takes the floor of `candidates * ratio`, raises it to [`MIN_BLANKS`],
    /// then caps at the candidate count.
    #[must_use]
    pub fn blank_count(self, candidates: usize) -> usize {
        ((candidates as f64 * self.ratio()) as usize)
            .max(MIN_BLANKS)
            .min(candidates)
    }

    /// Parse a difficulty name, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Get the lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many blanks a quiz should have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankTarget {
    /// An exact number, clamped to the candidate count during selection
    Count(usize),
    /// A difficulty ratio applied to the candidate count
    Ratio(Difficulty),
}

impl BlankTarget {
    /// Resolve the target against the number of candidates found
    #[must_use]
    pub fn resolve(self, candidates: usize) -> usize {
        match self {
            Self::Count(count) => count,
            Self::Ratio(difficulty) => difficulty.blank_count(candidates),
        }
    }
}

/// Builder for assembling a quiz from raw lyric text
///
/// # Examples
/// ```
/// use blankverse::blanks::{BlankTarget, QuizBuilder, StrategyType};
///
/// let lyrics = "Amazing grace how sweet the sound\nThat saved a wretch like me\n";
/// let quiz = QuizBuilder::new(StrategyType::from_name("important"))
///     .title("Amazing Grace")
///     .build(lyrics, BlankTarget::Count(3))
///     .unwrap();
/// assert_eq!(quiz.blank_count(), 3);
/// ```
pub struct QuizBuilder {
    strategy: StrategyType,
    title: Option<String>,
    artist: Option<String>,
}

impl QuizBuilder {
    #[must_use]
    pub fn new(strategy: StrategyType) -> Self {
        Self {
            strategy,
            title: None,
            artist: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Build the quiz record
    ///
    /// Lyrics with no candidates produce a quiz whose text is unchanged and
    /// whose answer key is empty; that is a valid, if unplayable, record.
    ///
    /// # Errors
    /// Returns `EncodeError` if the lyrics already contain placeholder-shaped
    /// runs. See [`render_quiz_text`].
    pub fn build(mut self, text: &str, target: BlankTarget) -> Result<Quiz, EncodeError> {
        let tokens = extract_words(text);
        let count = target.resolve(tokens.len());
        let blanks = select_blanks(&tokens, count, &mut self.strategy);
        let quiz_text = render_quiz_text(text, &blanks)?;
        let answers = blanks.iter().map(AnswerEntry::from_blank).collect();

        Ok(Quiz {
            title: self.title,
            artist: self.artist,
            strategy: self.strategy.kind(),
            quiz_text,
            answers,
        })
    }
}
