//! Interactive TUI for playing quizzes
//!
//! A ratatui interface: the lyrics render with live blanks, answers are
//! typed in place, and grading happens on submit.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
