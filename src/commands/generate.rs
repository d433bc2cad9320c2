//! Quiz generation command
//!
//! Turns lyric text files into stored quiz JSON, one output per input.
//! Multiple inputs are processed in parallel with a progress bar.

use crate::blanks::{BlankTarget, QuizBuilder, StrategyType, extract_words};
use crate::core::Quiz;
use crate::lyrics::loader;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for a generation run
pub struct GenerateConfig {
    pub inputs: Vec<PathBuf>,
    /// Where outputs go; next to each input when unset
    pub out_dir: Option<PathBuf>,
    pub strategy: String,
    pub seed: Option<u64>,
    pub target: BlankTarget,
    /// Overrides the title derived from the file name
    pub title: Option<String>,
    pub artist: Option<String>,
}

/// Summary of one generated quiz file
#[derive(Debug, Clone)]
pub struct GeneratedQuiz {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: Option<String>,
    pub candidates: usize,
    pub blanks: usize,
}

/// Generate a quiz file for every input
///
/// Summaries come back in input order regardless of which input finished
/// first.
///
/// # Errors
///
/// Returns an error if any input cannot be read, any quiz cannot be rendered,
/// or any output cannot be written.
pub fn run_generate(config: &GenerateConfig) -> Result<Vec<GeneratedQuiz>, String> {
    if config.inputs.is_empty() {
        return Err("No input files given".to_string());
    }

    if config.inputs.len() > 1 && (config.title.is_some() || config.artist.is_some()) {
        return Err("A title or artist override needs a single input file".to_string());
    }

    if let Some(dir) = &config.out_dir {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Cannot create output directory '{}': {e}", dir.display()))?;
    }

    let progress = (config.inputs.len() > 1).then(|| {
        let pb = ProgressBar::new(config.inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    });

    let outcomes: Result<Vec<GeneratedQuiz>, String> = config
        .inputs
        .par_iter()
        .map(|input| {
            let outcome = generate_one(input, config);
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            outcome
        })
        .collect();

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    outcomes
}

fn generate_one(input: &Path, config: &GenerateConfig) -> Result<GeneratedQuiz, String> {
    let text = loader::load_from_file(input)
        .map_err(|e| format!("Cannot read '{}': {e}", input.display()))?;

    let candidates = extract_words(&text).len();

    let strategy = match config.seed {
        Some(seed) => StrategyType::with_seed(&config.strategy, seed),
        None => StrategyType::from_name(&config.strategy),
    };

    let title = config
        .title
        .clone()
        .or_else(|| loader::title_from_path(input));

    let mut builder = QuizBuilder::new(strategy);
    if let Some(title) = &title {
        builder = builder.title(title.clone());
    }
    if let Some(artist) = &config.artist {
        builder = builder.artist(artist.clone());
    }

    let quiz = builder
        .build(&text, config.target)
        .map_err(|e| format!("Cannot render quiz for '{}': {e}", input.display()))?;

    let output = output_path(input, config.out_dir.as_deref());
    write_quiz(&quiz, &output)?;

    Ok(GeneratedQuiz {
        input: input.to_path_buf(),
        output,
        title,
        candidates,
        blanks: quiz.blank_count(),
    })
}

/// Serialize a quiz to pretty JSON on disk
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_quiz(quiz: &Quiz, path: &Path) -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(quiz).map_err(|e| format!("Cannot serialize quiz: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Cannot write '{}': {e}", path.display()))
}

/// Where the quiz for a lyrics file gets written
fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("quiz"));
    let mut name = stem.to_os_string();
    name.push(".quiz.json");

    match out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}
