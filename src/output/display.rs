//! Display functions for command results

use super::formatters::{display_line, gap_label, score_bar};
use crate::commands::{GeneratedQuiz, LyricsAnalysis};
use crate::core::Quiz;
use crate::grading::GradeReport;
use colored::Colorize;

/// Print a quiz's blanked lyrics with display gap labels
pub fn print_quiz(quiz: &Quiz) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", quiz.heading().bright_yellow().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "   Strategy: {}   Blanks: {}\n",
        quiz.strategy.as_str().bright_cyan(),
        quiz.blank_count().to_string().bright_cyan()
    );

    for line in quiz.quiz_text.lines() {
        println!("   {}", display_line(line));
    }
    println!();
}

/// Print a graded attempt, blank by blank
pub fn print_grade_report(report: &GradeReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for entry in report.entries() {
        if entry.correct {
            println!(
                "   {} {} {}",
                "✓".green().bold(),
                gap_label(entry.id),
                entry.expected.green()
            );
        } else {
            let given = if entry.given.trim().is_empty() {
                "(skipped)".bright_black().to_string()
            } else {
                entry.given.red().strikethrough().to_string()
            };
            println!(
                "   {} {} {} {}",
                "✗".red().bold(),
                gap_label(entry.id),
                given,
                entry.expected.green()
            );
        }
    }

    let bar = score_bar(report.correct(), report.total(), 30);
    println!(
        "\n   Score: [{}] {}/{} ({:.0}%)",
        bar.green(),
        report.correct().to_string().bright_yellow().bold(),
        report.total(),
        report.percent()
    );
}

/// Print the summary of a generation run
pub fn print_generate_summary(outcomes: &[GeneratedQuiz]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "QUIZZES GENERATED".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for outcome in outcomes {
        let label = outcome
            .title
            .clone()
            .unwrap_or_else(|| outcome.input.display().to_string());
        println!(
            "   {} {} -> {}",
            "✓".green().bold(),
            label.bright_white(),
            outcome.output.display().to_string().bright_cyan()
        );
        println!(
            "     {} blanks from {} candidates",
            outcome.blanks.to_string().bright_yellow(),
            outcome.candidates
        );
        if outcome.blanks == 0 {
            println!(
                "     {}",
                "⚠ no candidate words; the quiz has nothing to fill in".yellow()
            );
        }
    }
    println!();
}

/// Print a lyrics analysis
pub fn print_analysis(analysis: &LyricsAnalysis, source: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LYRICS ANALYSIS:".bright_cyan().bold(),
        source.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Structure:".bright_cyan().bold());
    println!("   Lines:            {}", analysis.total_lines);
    println!("   Lyric lines:      {}", analysis.lyric_lines);
    println!("   Section markers:  {}", analysis.marker_lines);
    println!(
        "   Candidates:       {}",
        analysis.candidates.to_string().bright_yellow().bold()
    );
    println!("   Distinct words:   {}", analysis.unique_forms);

    if !analysis.top_repeated.is_empty() {
        println!("\n🔁 {}", "Repeated words:".bright_cyan().bold());
        let top = analysis.top_repeated[0].1;
        for (form, count) in &analysis.top_repeated {
            let bar = score_bar(*count, top, 20);
            println!("   {form:<14} {} {count}", bar.green());
        }
    }

    if !analysis.longest.is_empty() {
        println!("\n📏 {}", "Longest words:".bright_cyan().bold());
        for (word, length) in &analysis.longest {
            println!("   {word:<14} {length} chars");
        }
    }

    println!("\n🎯 {}", "Blanks by difficulty:".bright_cyan().bold());
    for (difficulty, blanks) in &analysis.difficulty_blanks {
        println!(
            "   {:<8} {}",
            difficulty.to_string(),
            blanks.to_string().bright_yellow()
        );
    }
    println!();
}
