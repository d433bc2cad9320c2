//! Core domain types for lyric quizzes
//!
//! This module contains the fundamental domain types: candidate tokens, blanks,
//! and the quiz record itself. Everything here is pure data with no I/O.

mod quiz;
mod token;

pub use quiz::{AnswerEntry, Blank, Quiz, StrategyKind};
pub use token::Token;
