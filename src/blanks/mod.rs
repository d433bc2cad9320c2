//! The blanking pipeline
//!
//! This module turns raw lyric text into a playable quiz: tokenize the
//! candidates, pick which ones to hide, and render the placeholder text.

pub mod encoder;
mod engine;
pub mod selector;
pub mod strategy;
pub mod tokenizer;

pub use encoder::{EncodeError, Segment, line_segments, placeholder, render_quiz_text};
pub use engine::{BlankTarget, Difficulty, MIN_BLANKS, QuizBuilder};
pub use selector::select_blanks;
pub use strategy::{FrequentStrategy, ImportantStrategy, RandomStrategy, Strategy, StrategyType};
pub use tokenizer::{MIN_WORD_LEN, STOPWORDS, extract_words, is_section_marker, is_stopword};
