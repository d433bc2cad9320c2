//! Command implementations

pub mod analyze;
pub mod generate;
pub mod simple;

pub use analyze::{LyricsAnalysis, analyze_lyrics};
pub use generate::{GenerateConfig, GeneratedQuiz, run_generate, write_quiz};
pub use simple::run_simple;

use crate::core::Quiz;
use std::fs;
use std::path::Path;

/// Load a stored quiz from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid quiz
/// record.
pub fn load_quiz<P: AsRef<Path>>(path: P) -> Result<Quiz, String> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read quiz file '{}': {e}", path.display()))?;
    serde_json::from_str(&json)
        .map_err(|e| format!("Quiz file '{}' is not a valid quiz: {e}", path.display()))
}
