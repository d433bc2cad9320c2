//! TUI application state and logic

use crate::core::Quiz;
use crate::grading::{GradeReport, grade};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Application state
pub struct App {
    pub quiz: Quiz,
    /// Typed answers, indexed like the answer key
    pub answers: Vec<String>,
    /// Index of the blank the cursor is on
    pub active: usize,
    pub input_mode: InputMode,
    pub report: Option<GradeReport>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Answering,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(quiz: Quiz) -> Self {
        let blanks = quiz.blank_count();
        let mut app = Self {
            quiz,
            answers: vec![String::new(); blanks],
            active: 0,
            input_mode: InputMode::Answering,
            report: None,
            messages: Vec::new(),
            should_quit: false,
        };

        if blanks == 0 {
            app.input_mode = InputMode::Finished;
            app.report = Some(grade(&app.quiz, &FxHashMap::default()));
            app.add_message(
                "This quiz has no blanks to fill. Press 'q' to quit.",
                MessageStyle::Error,
            );
        } else {
            app.add_message(
                "Type into the highlighted blank. Enter on the last blank submits.",
                MessageStyle::Info,
            );
            app.add_message(
                "Tab or Down moves forward, Shift+Tab or Up moves back.",
                MessageStyle::Info,
            );
        }

        app
    }

    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.quiz.blank_count()
    }

    /// Count blanks with something typed in them
    #[must_use]
    pub fn filled(&self) -> usize {
        self.answers.iter().filter(|a| !a.trim().is_empty()).count()
    }

    pub fn next_blank(&mut self) {
        if self.blank_count() > 0 {
            self.active = (self.active + 1) % self.blank_count();
        }
    }

    pub fn prev_blank(&mut self) {
        if self.blank_count() > 0 {
            self.active = (self.active + self.blank_count() - 1) % self.blank_count();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(answer) = self.answers.get_mut(self.active) {
            answer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(answer) = self.answers.get_mut(self.active) {
            answer.pop();
        }
    }

    /// Grade the current answers and switch to the finished screen
    pub fn submit(&mut self) {
        if self.input_mode != InputMode::Answering {
            return;
        }

        let responses: FxHashMap<u32, String> = self
            .quiz
            .answers
            .iter()
            .zip(&self.answers)
            .map(|(entry, typed)| (entry.id, typed.clone()))
            .collect();

        let report = grade(&self.quiz, &responses);

        if report.is_perfect() {
            self.add_message("🎉 Perfect score! Every blank is right!", MessageStyle::Success);
        } else {
            self.add_message(
                &format!(
                    "You got {} of {}. Press 'r' to try again.",
                    report.correct(),
                    report.total()
                ),
                MessageStyle::Info,
            );
        }

        self.report = Some(report);
        self.input_mode = InputMode::Finished;
    }

    /// Clear the attempt and start over on the same quiz
    pub fn retry(&mut self) {
        for answer in &mut self.answers {
            answer.clear();
        }
        self.active = 0;
        self.report = None;
        self.input_mode = InputMode::Answering;
        self.add_message("Cleared! Same quiz, fresh attempt.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Answering => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab | KeyCode::Down => app.next_blank(),
                    KeyCode::BackTab | KeyCode::Up => app.prev_blank(),
                    KeyCode::Enter => {
                        if app.active + 1 == app.blank_count() {
                            app.submit();
                        } else {
                            app.next_blank();
                        }
                    }
                    KeyCode::Backspace => app.backspace(),
                    KeyCode::Char(c) => app.push_char(c),
                    _ => {}
                },
                InputMode::Finished => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('r') => app.retry(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blanks::{BlankTarget, QuizBuilder, StrategyType};

    fn hymn_app() -> App {
        let quiz = QuizBuilder::new(StrategyType::from_name("important"))
            .build(
                "Amazing grace how sweet the sound\nThat saved a wretch like me\n",
                BlankTarget::Count(3),
            )
            .unwrap();
        App::new(quiz)
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut app = hymn_app();
        assert_eq!(app.active, 0);
        app.prev_blank();
        assert_eq!(app.active, 2);
        app.next_blank();
        assert_eq!(app.active, 0);
    }

    #[test]
    fn typing_edits_the_active_blank() {
        let mut app = hymn_app();
        app.push_char('A');
        app.push_char('m');
        app.backspace();
        assert_eq!(app.answers[0], "A");
        app.next_blank();
        app.push_char('g');
        assert_eq!(app.answers[1], "g");
        assert_eq!(app.filled(), 2);
    }

    #[test]
    fn submit_grades_and_finishes() {
        let mut app = hymn_app();
        for word in ["Amazing", "grace", "wretch"] {
            for c in word.chars() {
                app.push_char(c);
            }
            app.next_blank();
        }
        app.submit();

        assert_eq!(app.input_mode, InputMode::Finished);
        let report = app.report.as_ref().unwrap();
        assert!(report.is_perfect());
    }

    #[test]
    fn retry_resets_the_attempt() {
        let mut app = hymn_app();
        app.push_char('x');
        app.submit();
        assert_eq!(app.input_mode, InputMode::Finished);

        app.retry();
        assert_eq!(app.input_mode, InputMode::Answering);
        assert!(app.report.is_none());
        assert!(app.answers.iter().all(String::is_empty));
        assert_eq!(app.active, 0);
    }

    #[test]
    fn zero_blank_quiz_starts_finished() {
        let quiz = QuizBuilder::new(StrategyType::from_name("random"))
            .build("a to\n", BlankTarget::Count(5))
            .unwrap();
        let app = App::new(quiz);
        assert_eq!(app.input_mode, InputMode::Finished);
        assert!(app.report.is_some());
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut app = hymn_app();
        app.push_char('\t');
        app.push_char('\u{7}');
        assert_eq!(app.answers[0], "");
    }
}
