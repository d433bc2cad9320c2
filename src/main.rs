//! Blankverse - CLI
//!
//! Fill-in-the-blank lyric quizzes with TUI and CLI play modes.
//! Quizzes can be played straight from lyrics or saved as JSON and replayed.

use anyhow::Result;
use blankverse::{
    blanks::{BlankTarget, Difficulty, QuizBuilder, StrategyType},
    commands::{GenerateConfig, analyze_lyrics, load_quiz, run_generate, run_simple},
    core::Quiz,
    lyrics::{DEMO_ARTIST, DEMO_LYRICS, DEMO_TITLE, loader},
    output::{print_analysis, print_generate_summary},
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "blankverse",
    about = "Fill-in-the-blank lyric quizzes: generate, play, and grade",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: random (default), important, frequent
    #[arg(short, long, global = true, default_value = "random")]
    strategy: String,

    /// Fixed seed for the random strategy (reproducible quizzes)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - play a quiz in the terminal)
    Play {
        /// Saved quiz file to play
        #[arg(short, long)]
        quiz: Option<PathBuf>,

        /// Lyrics file to build a fresh quiz from (default: embedded demo)
        #[arg(short, long)]
        lyrics: Option<PathBuf>,

        /// Difficulty: easy, medium, hard
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Exact number of blanks (overrides difficulty)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Simple CLI mode (play a quiz without TUI)
    Simple {
        /// Saved quiz file to play
        #[arg(short, long)]
        quiz: Option<PathBuf>,

        /// Lyrics file to build a fresh quiz from (default: embedded demo)
        #[arg(short, long)]
        lyrics: Option<PathBuf>,

        /// Difficulty: easy, medium, hard
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Exact number of blanks (overrides difficulty)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Generate quiz files from lyrics
    Generate {
        /// Lyrics files to turn into quizzes
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (default: alongside each input)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Difficulty: easy, medium, hard
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Exact number of blanks (overrides difficulty)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Title stored in the quiz (default: derived from the file name)
        #[arg(short, long)]
        title: Option<String>,

        /// Artist stored in the quiz
        #[arg(short, long)]
        artist: Option<String>,
    },

    /// Analyze lyrics: candidates, repeats, blanks per difficulty
    Analyze {
        /// Lyrics file to analyze (default: embedded demo)
        input: Option<PathBuf>,
    },
}

/// Turn the difficulty/count flags into a blank target
///
/// An explicit count wins over the difficulty ratio.
fn resolve_target(difficulty: &str, count: Option<usize>) -> Result<BlankTarget> {
    if let Some(count) = count {
        return Ok(BlankTarget::Count(count));
    }

    Difficulty::from_name(difficulty)
        .map(BlankTarget::Ratio)
        .ok_or_else(|| {
            anyhow::anyhow!("Unknown difficulty '{difficulty}' (expected easy, medium, or hard)")
        })
}

/// Build or load the quiz a play command will run
///
/// Precedence: saved quiz file, then lyrics file, then the embedded demo.
fn resolve_quiz(
    quiz_path: Option<&Path>,
    lyrics_path: Option<&Path>,
    strategy_name: &str,
    seed: Option<u64>,
    target: BlankTarget,
) -> Result<Quiz> {
    if let Some(path) = quiz_path {
        return load_quiz(path).map_err(|e| anyhow::anyhow!(e));
    }

    let strategy = match seed {
        Some(seed) => StrategyType::with_seed(strategy_name, seed),
        None => StrategyType::from_name(strategy_name),
    };

    let quiz = match lyrics_path {
        Some(path) => {
            let text = loader::load_from_file(path)?;
            let mut builder = QuizBuilder::new(strategy);
            if let Some(title) = loader::title_from_path(path) {
                builder = builder.title(title);
            }
            builder.build(&text, target)?
        }
        None => QuizBuilder::new(strategy)
            .title(DEMO_TITLE)
            .artist(DEMO_ARTIST)
            .build(DEMO_LYRICS, target)?,
    };

    Ok(quiz)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        quiz: None,
        lyrics: None,
        difficulty: "medium".to_string(),
        count: None,
    });

    match command {
        Commands::Play {
            quiz,
            lyrics,
            difficulty,
            count,
        } => run_play_command(
            &cli.strategy,
            cli.seed,
            quiz.as_deref(),
            lyrics.as_deref(),
            &difficulty,
            count,
        ),
        Commands::Simple {
            quiz,
            lyrics,
            difficulty,
            count,
        } => run_simple_command(
            &cli.strategy,
            cli.seed,
            quiz.as_deref(),
            lyrics.as_deref(),
            &difficulty,
            count,
        ),
        Commands::Generate {
            inputs,
            out,
            difficulty,
            count,
            title,
            artist,
        } => {
            let config = GenerateConfig {
                inputs,
                out_dir: out,
                strategy: cli.strategy,
                seed: cli.seed,
                target: resolve_target(&difficulty, count)?,
                title,
                artist,
            };
            run_generate_command(&config)
        }
        Commands::Analyze { input } => run_analyze_command(input.as_deref()),
    }
}

fn run_play_command(
    strategy_name: &str,
    seed: Option<u64>,
    quiz_path: Option<&Path>,
    lyrics_path: Option<&Path>,
    difficulty: &str,
    count: Option<usize>,
) -> Result<()> {
    use blankverse::interactive::{App, run_tui};

    let target = resolve_target(difficulty, count)?;
    let quiz = resolve_quiz(quiz_path, lyrics_path, strategy_name, seed, target)?;

    let app = App::new(quiz);
    run_tui(app)
}

fn run_simple_command(
    strategy_name: &str,
    seed: Option<u64>,
    quiz_path: Option<&Path>,
    lyrics_path: Option<&Path>,
    difficulty: &str,
    count: Option<usize>,
) -> Result<()> {
    let target = resolve_target(difficulty, count)?;
    let quiz = resolve_quiz(quiz_path, lyrics_path, strategy_name, seed, target)?;
    run_simple(&quiz).map_err(|e| anyhow::anyhow!(e))
}

fn run_generate_command(config: &GenerateConfig) -> Result<()> {
    let outcomes = run_generate(config).map_err(|e| anyhow::anyhow!(e))?;
    print_generate_summary(&outcomes);
    Ok(())
}

fn run_analyze_command(input: Option<&Path>) -> Result<()> {
    let (text, source) = match input {
        Some(path) => (loader::load_from_file(path)?, path.display().to_string()),
        None => (
            DEMO_LYRICS.to_string(),
            format!("{DEMO_TITLE} (embedded demo)"),
        ),
    };

    let analysis = analyze_lyrics(&text);
    print_analysis(&analysis, &source);
    Ok(())
}
