//! TUI rendering with ratatui
//!
//! Visualizations for the lyric quiz interface.

use super::app::{App, InputMode, MessageStyle};
use crate::blanks::{Segment, line_segments};
use crate::grading::GradedBlank;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Progress gauge
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0], app);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Lyrics with blanks
            Constraint::Percentage(40), // Answers and messages
        ])
        .split(chunks[1]);

    render_lyrics(f, main_chunks[0], app);

    // Right panel - split vertically
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(7)])
        .split(main_chunks[1]);

    render_answers(f, right_chunks[0], app);
    render_messages(f, right_chunks[1], app);

    // Progress gauge
    render_progress(f, chunks[2], app);

    // Status bar
    render_status_bar(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(format!("🎵 {}", app.quiz.heading()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

/// Render the quiz text, substituting a styled span for each gap
fn render_lyrics(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    for raw in app.quiz.quiz_text.lines() {
        let mut spans: Vec<Span> = Vec::new();
        for segment in line_segments(raw) {
            match segment {
                Segment::Text(text) => spans.push(Span::raw(text.to_string())),
                Segment::Gap(id) => spans.push(gap_span(app, id)),
            }
        }
        lines.push(Line::from(spans));
    }

    let lyrics = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Lyrics "),
        );
    f.render_widget(lyrics, area);
}

/// Style one gap according to the app state
fn gap_span(app: &App, id: u32) -> Span<'static> {
    let index = id as usize;
    let typed = app.answers.get(index).map_or("", String::as_str);

    match app.input_mode {
        InputMode::Answering => {
            let shown = if typed.is_empty() { "______" } else { typed };
            let text = format!(" {}:{} ", id + 1, shown);

            if index == app.active {
                Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else if typed.is_empty() {
                Span::styled(
                    text,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::UNDERLINED),
                )
            } else {
                Span::styled(text, Style::default().fg(Color::Cyan))
            }
        }
        InputMode::Finished => {
            let graded = app
                .report
                .as_ref()
                .and_then(|r| r.entries().iter().find(|g| g.id == id));

            match graded {
                Some(GradedBlank { correct: true, .. }) => Span::styled(
                    format!(" {typed} "),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Some(g) => Span::styled(
                    format!(" {} ", g.expected),
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
                None => Span::raw(format!(" {typed} ")),
            }
        }
    }
}

fn render_answers(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .quiz
        .answers
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let typed = app.answers.get(i).map_or("", String::as_str);
            let marker = if app.input_mode == InputMode::Answering && i == app.active {
                "▶ "
            } else {
                "  "
            };

            let line = if typed.is_empty() {
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(
                        format!("{}. ______", entry.id + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(
                        format!("{}. {}", entry.id + 1, typed),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            };
            ListItem::new(line)
        })
        .collect();

    let answers = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Your Answers "),
    );
    f.render_widget(answers, area);
}

fn render_messages(f: &mut Frame, area: Rect, app: &App) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|m| {
            let style = match m.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(m.text.clone(), style)))
        })
        .collect();

    let messages_list = List::new(messages).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Messages "),
    );
    f.render_widget(messages_list, area);
}

fn render_progress(f: &mut Frame, area: Rect, app: &App) {
    let total = app.blank_count();

    let (label, ratio, color) = match (&app.input_mode, &app.report) {
        (InputMode::Finished, Some(report)) => {
            let color = if report.is_perfect() {
                Color::Green
            } else {
                Color::Yellow
            };
            (
                format!(
                    "Score: {}/{} ({:.0}%)",
                    report.correct(),
                    report.total(),
                    report.percent()
                ),
                report.percent() / 100.0,
                color,
            )
        }
        _ => {
            let filled = app.filled();
            (
                format!("Filled: {filled}/{total}"),
                if total == 0 {
                    0.0
                } else {
                    filled as f64 / total as f64
                },
                Color::Cyan,
            )
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Progress "),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    f.render_widget(gauge, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let help = match app.input_mode {
        InputMode::Answering => {
            "Type to answer | Tab/↓ next | Shift+Tab/↑ prev | Enter advance (last submits) | Esc quit"
        }
        InputMode::Finished => "r retry | q/Esc quit",
    };

    let status = Paragraph::new(help)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
