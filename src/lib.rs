//! Blankverse
//!
//! Fill-in-the-blank lyric quizzes: strategies pick the words worth hiding,
//! an encoder punches the holes, and a grader checks the answers.
//!
//! # Quick Start
//!
//! ```rust
//! use blankverse::blanks::{BlankTarget, QuizBuilder, StrategyType};
//!
//! let lyrics = "Amazing grace how sweet the sound\nThat saved a wretch like me\n";
//!
//! // Hide the two longest words
//! let quiz = QuizBuilder::new(StrategyType::from_name("important"))
//!     .title("Amazing Grace")
//!     .build(lyrics, BlankTarget::Count(2))
//!     .unwrap();
//!
//! assert_eq!(quiz.blank_count(), 2);
//! assert_eq!(quiz.answers[0].answer, "Amazing");
//! assert!(quiz.quiz_text.starts_with("_____0_____ grace"));
//! ```

// Core domain types
pub mod core;

// Tokenizing, blank selection, and placeholder encoding
pub mod blanks;

// Answer normalization and grading
pub mod grading;

// Lyric sources
pub mod lyrics;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
