//! Attempt grading
//!
//! Compares a set of typed responses against a quiz's answer key. Responses
//! are keyed by blank id; a blank the player never filled grades as an empty
//! string rather than an error.

use crate::core::Quiz;
use crate::grading::answers_equal;
use rustc_hash::FxHashMap;

/// One graded blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedBlank {
    pub id: u32,
    pub expected: String,
    pub given: String,
    pub correct: bool,
}

/// Outcome of grading one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReport {
    entries: Vec<GradedBlank>,
}

impl GradeReport {
    /// Get the graded blanks in answer key order
    #[must_use]
    pub fn entries(&self) -> &[GradedBlank] {
        &self.entries
    }

    /// Get the number of blanks graded
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Get the number answered correctly
    #[must_use]
    pub fn correct(&self) -> usize {
        self.entries.iter().filter(|e| e.correct).count()
    }

    /// Get the score as a percentage
    ///
    /// A quiz with no blanks grades as 100 percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.entries.is_empty() {
            return 100.0;
        }
        self.correct() as f64 / self.total() as f64 * 100.0
    }

    /// Check whether every blank was answered correctly
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.entries.iter().all(|e| e.correct)
    }
}

/// Grade responses against a quiz's answer key
///
/// The report lists blanks in the same order as the answer key. Extra
/// response ids that match no blank are ignored.
#[must_use]
pub fn grade(quiz: &Quiz, responses: &FxHashMap<u32, String>) -> GradeReport {
    let entries = quiz
        .answers
        .iter()
        .map(|entry| {
            let given = responses.get(&entry.id).cloned().unwrap_or_default();
            let correct = answers_equal(&given, &entry.answer);
            GradedBlank {
                id: entry.id,
                expected: entry.answer.clone(),
                given,
                correct,
            }
        })
        .collect();

    GradeReport { entries }
}
