//! End-to-end tests: lyrics in, playable graded quiz out

use blankverse::blanks::{BlankTarget, Difficulty, QuizBuilder, StrategyType};
use blankverse::commands::{analyze_lyrics, load_quiz, write_quiz};
use blankverse::core::StrategyKind;
use blankverse::grading::grade;
use blankverse::lyrics::{DEMO_ARTIST, DEMO_LYRICS, DEMO_TITLE};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::PathBuf;

const VERSE: &str = "Amazing grace how sweet the sound\nThat saved a wretch like me\n";

fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("blankverse-e2e-{}-{test}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn longest_words_of_a_verse_become_blanks() {
    let quiz = QuizBuilder::new(StrategyType::from_name("important"))
        .build(VERSE, BlankTarget::Count(3))
        .unwrap();

    let words: Vec<&str> = quiz.answers.iter().map(|e| e.answer.as_str()).collect();
    assert_eq!(words, ["Amazing", "grace", "wretch"]);
    assert_eq!(
        quiz.quiz_text,
        "_____0_____ _____1_____ how sweet the sound\nThat saved a _____2_____ like me\n"
    );
}

#[test]
fn demo_difficulties_scale_the_blank_count() {
    for (difficulty, expected) in [
        (Difficulty::Easy, 5),
        (Difficulty::Medium, 6),
        (Difficulty::Hard, 10),
    ] {
        let quiz = QuizBuilder::new(StrategyType::with_seed("random", 11))
            .title(DEMO_TITLE)
            .artist(DEMO_ARTIST)
            .build(DEMO_LYRICS, BlankTarget::Ratio(difficulty))
            .unwrap();

        assert_eq!(quiz.blank_count(), expected, "difficulty {difficulty}");
        // Each placeholder carries two runs of five underscores
        assert_eq!(quiz.quiz_text.matches("_____").count(), expected * 2);

        let ids: Vec<u32> = quiz.answers.iter().map(|e| e.id).collect();
        let want: Vec<u32> = (0..expected as u32).collect();
        assert_eq!(ids, want);
    }
}

#[test]
fn analysis_predicts_what_generation_produces() {
    let analysis = analyze_lyrics(DEMO_LYRICS);
    assert_eq!(analysis.candidates, 31);

    for (difficulty, blanks) in analysis.difficulty_blanks {
        let quiz = QuizBuilder::new(StrategyType::from_name("frequent"))
            .build(DEMO_LYRICS, BlankTarget::Ratio(difficulty))
            .unwrap();
        assert_eq!(quiz.blank_count(), blanks, "difficulty {difficulty}");
    }
}

#[test]
fn stored_quizzes_use_camel_case_wire_names() {
    let quiz = QuizBuilder::new(StrategyType::from_name("important"))
        .title("Amazing Grace")
        .build(VERSE, BlankTarget::Count(2))
        .unwrap();

    let json = serde_json::to_string_pretty(&quiz).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["title"], "Amazing Grace");
    assert_eq!(value["strategy"], "important");
    assert!(value["quizText"].as_str().unwrap().contains("_____0_____"));

    let first = &value["answers"][0];
    assert_eq!(first["id"], 0);
    assert_eq!(first["answer"], "Amazing");
    assert_eq!(first["lineIndex"], 0);
    assert_eq!(first["position"], 0);
}

#[test]
fn saved_quiz_replays_and_grades() {
    let dir = scratch_dir("replay");
    let path = dir.join("verse.quiz.json");

    let quiz = QuizBuilder::new(StrategyType::from_name("important"))
        .build(VERSE, BlankTarget::Count(3))
        .unwrap();
    write_quiz(&quiz, &path).unwrap();

    let loaded = load_quiz(&path).unwrap();
    assert_eq!(loaded, quiz);

    let mut responses = FxHashMap::default();
    responses.insert(0, "amazing".to_string()); // case-insensitive hit
    responses.insert(1, "mercy".to_string()); // miss
    // blank 2 left unanswered

    let report = grade(&loaded, &responses);
    assert_eq!(report.total(), 3);
    assert_eq!(report.correct(), 1);
    assert!(!report.is_perfect());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn curly_quotes_and_long_dashes_still_count() {
    let quiz = QuizBuilder::new(StrategyType::from_name("important"))
        .build("Don't stop the merry-go-round\n", BlankTarget::Count(2))
        .unwrap();

    let words: Vec<&str> = quiz.answers.iter().map(|e| e.answer.as_str()).collect();
    assert_eq!(words, ["Don't", "merry-go-round"]);

    let mut responses = FxHashMap::default();
    responses.insert(0, "don\u{2019}t".to_string());
    responses.insert(1, " MERRY\u{2013}GO\u{2013}ROUND ".to_string());

    assert!(grade(&quiz, &responses).is_perfect());
}

#[test]
fn unanswered_blanks_grade_as_wrong_not_errors() {
    let quiz = QuizBuilder::new(StrategyType::with_seed("random", 3))
        .build(DEMO_LYRICS, BlankTarget::Ratio(Difficulty::Easy))
        .unwrap();

    let report = grade(&quiz, &FxHashMap::default());
    assert_eq!(report.total(), 5);
    assert_eq!(report.correct(), 0);
    for entry in report.entries() {
        assert_eq!(entry.given, "");
        assert!(!entry.correct);
    }
}

#[test]
fn unknown_strategy_name_falls_back_to_random() {
    let quiz = QuizBuilder::new(StrategyType::from_name("telepathic"))
        .build(VERSE, BlankTarget::Count(2))
        .unwrap();

    assert_eq!(quiz.strategy, StrategyKind::Random);
    assert_eq!(quiz.blank_count(), 2);
}

#[test]
fn section_markers_survive_rendering_untouched() {
    let quiz = QuizBuilder::new(StrategyType::from_name("frequent"))
        .build(DEMO_LYRICS, BlankTarget::Count(4))
        .unwrap();

    // "grace" repeats four times, so the frequent strategy hides exactly those
    let words: Vec<&str> = quiz.answers.iter().map(|e| e.answer.as_str()).collect();
    assert!(words.iter().all(|w| w.eq_ignore_ascii_case("grace")));

    assert!(quiz.quiz_text.contains("[Verse 1]"));
    assert!(quiz.quiz_text.contains("[Verse 2]"));
    assert_eq!(quiz.quiz_text.lines().count(), DEMO_LYRICS.lines().count());
}
