//! Simple interactive CLI mode
//!
//! Text-based quiz play without TUI. Prints the blanked lyrics once, prompts
//! for each blank in order, then grades the attempt.

use crate::core::Quiz;
use crate::grading::grade;
use crate::output::{print_grade_report, print_quiz};
use rustc_hash::FxHashMap;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(quiz: &Quiz) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Lyric Quiz - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝");

    print_quiz(quiz);

    if quiz.answers.is_empty() {
        println!("This quiz has no blanks to fill. Nothing to play!\n");
        return Ok(());
    }

    println!("Type the missing word for each numbered blank.");
    println!("Commands: 'quit' to give up, 'back' to revisit the previous blank,");
    println!("or press Enter to skip a blank.\n");

    let total = quiz.answers.len();
    let mut responses: FxHashMap<u32, String> = FxHashMap::default();
    let mut index = 0;

    while index < total {
        let entry = &quiz.answers[index];
        let prompt = format!("Blank {} of {total}", index + 1);

        match get_user_input(&prompt)?.as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "back" => {
                if index > 0 {
                    index -= 1;
                    println!("✓ Back to blank {}\n", index + 1);
                } else {
                    println!("Already at the first blank!\n");
                }
            }
            answer => {
                responses.insert(entry.id, answer.to_string());
                index += 1;
            }
        }
    }

    let report = grade(quiz, &responses);
    print_grade_report(&report);

    if report.is_perfect() {
        use colored::Colorize;

        println!("\n{}", "═".repeat(70).bright_cyan());
        println!(
            "{}",
            "    🎉 ✨  P E R F E C T   S C O R E !  ✨ 🎉    "
                .bright_green()
                .bold()
        );
        println!("{}", "═".repeat(70).bright_cyan());
        println!();
    }

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
