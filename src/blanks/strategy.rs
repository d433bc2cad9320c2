//! Blank selection strategies
//!
//! Defines the Strategy trait and concrete implementations. A strategy only
//! decides which tokens to hide; id assignment and ordering happen in the
//! selector.

use crate::core::{StrategyKind, Token};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;

/// A strategy for choosing which candidate tokens become blanks
pub trait Strategy {
    /// Pick up to `count` token indices from `tokens`
    ///
    /// Returned indices are distinct and in range; their order is
    /// strategy-defined and callers re-sort into reading order.
    fn pick(&mut self, tokens: &[Token], count: usize) -> Vec<usize>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Uniform random selection (default)
    Random(RandomStrategy),
    /// Longest words first
    Important(ImportantStrategy),
    /// Most repeated words first
    Frequent(FrequentStrategy),
}

impl Strategy for StrategyType {
    fn pick(&mut self, tokens: &[Token], count: usize) -> Vec<usize> {
        match self {
            Self::Random(s) => s.pick(tokens, count),
            Self::Important(s) => s.pick(tokens, count),
            Self::Frequent(s) => s.pick(tokens, count),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "important", "frequent".
    /// Defaults to random if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "important" => Self::Important(ImportantStrategy),
            "frequent" => Self::Frequent(FrequentStrategy),
            _ => Self::Random(RandomStrategy::new()),
        }
    }

    /// Create strategy from name string with a fixed random seed
    ///
    /// Only the random strategy consumes the seed; the deterministic
    /// strategies ignore it.
    #[must_use]
    pub fn with_seed(name: &str, seed: u64) -> Self {
        match name {
            "important" => Self::Important(ImportantStrategy),
            "frequent" => Self::Frequent(FrequentStrategy),
            _ => Self::Random(RandomStrategy::seeded(seed)),
        }
    }

    /// Get the kind label recorded in generated quizzes
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Random(_) => StrategyKind::Random,
            Self::Important(_) => StrategyKind::Important,
            Self::Frequent(_) => StrategyKind::Frequent,
        }
    }
}

/// Longest-word strategy
///
/// Ranks tokens by length in characters, descending. Ties keep their original
/// reading order, so the sort must stay stable.
pub struct ImportantStrategy;

impl Strategy for ImportantStrategy {
    fn pick(&mut self, tokens: &[Token], count: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..tokens.len()).collect();
        order.sort_by(|&a, &b| tokens[b].length().cmp(&tokens[a].length()));
        order.truncate(count.min(tokens.len()));
        order
    }
}

/// Most-frequent-word strategy
///
/// Ranks tokens by how often their case-folded form appears across the whole
/// lyric. Every occurrence of a repeated word scores the same, so ties again
/// fall back to reading order.
pub struct FrequentStrategy;

impl Strategy for FrequentStrategy {
    fn pick(&mut self, tokens: &[Token], count: usize) -> Vec<usize> {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.folded()).or_insert(0) += 1;
        }
        let freq: Vec<usize> = tokens.iter().map(|t| counts[&t.folded()]).collect();

        let mut order: Vec<usize> = (0..tokens.len()).collect();
        order.sort_by(|&a, &b| freq[b].cmp(&freq[a]));
        order.truncate(count.min(tokens.len()));
        order
    }
}

/// Uniform random strategy
///
/// Shuffles the candidate indices with Fisher-Yates and takes a prefix, so
/// every subset of the requested size is equally likely. Owns its RNG so a
/// seed can make selection reproducible.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a random strategy seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a random strategy with a fixed seed for reproducible quizzes
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn pick(&mut self, tokens: &[Token], count: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..tokens.len()).collect();
        order.shuffle(&mut self.rng);
        order.truncate(count.min(tokens.len()));
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blanks::extract_words;

    fn hymn_tokens() -> Vec<Token> {
        extract_words("Amazing grace how sweet the sound\n")
    }

    fn picked_words(tokens: &[Token], indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| tokens[i].word().to_string())
            .collect()
    }

    #[test]
    fn important_prefers_longer_words() {
        let tokens = hymn_tokens();
        let picks = ImportantStrategy.pick(&tokens, 1);
        assert_eq!(picked_words(&tokens, &picks), ["Amazing"]);
    }

    #[test]
    fn important_breaks_length_ties_by_reading_order() {
        // grace, sweet, and sound all have five characters; grace comes first.
        let tokens = hymn_tokens();
        let picks = ImportantStrategy.pick(&tokens, 3);
        assert_eq!(picked_words(&tokens, &picks), ["Amazing", "grace", "sweet"]);
    }

    #[test]
    fn frequent_counts_case_folded_forms() {
        let tokens = extract_words("Love is love\nsweet love\nsweet song\n");
        let picks = FrequentStrategy.pick(&tokens, 2);
        // "love" appears three times, "sweet" twice; first occurrences win.
        assert_eq!(picked_words(&tokens, &picks), ["Love", "love"]);
    }

    #[test]
    fn frequent_all_unique_falls_back_to_reading_order() {
        let tokens = extract_words("night train rolling home\n");
        let picks = FrequentStrategy.pick(&tokens, 2);
        assert_eq!(picked_words(&tokens, &picks), ["night", "train"]);
    }

    #[test]
    fn random_is_reproducible_with_a_seed() {
        let tokens = hymn_tokens();
        let first = RandomStrategy::seeded(42).pick(&tokens, 3);
        let second = RandomStrategy::seeded(42).pick(&tokens, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn random_full_count_is_a_permutation() {
        let tokens = hymn_tokens();
        let mut picks = RandomStrategy::seeded(7).pick(&tokens, tokens.len());
        picks.sort_unstable();
        let expected: Vec<usize> = (0..tokens.len()).collect();
        assert_eq!(picks, expected);
    }

    #[test]
    fn strategies_clamp_count_to_available_tokens() {
        let tokens = hymn_tokens();
        assert_eq!(ImportantStrategy.pick(&tokens, 100).len(), tokens.len());
        assert_eq!(FrequentStrategy.pick(&tokens, 100).len(), tokens.len());
        assert_eq!(
            RandomStrategy::seeded(1).pick(&tokens, 100).len(),
            tokens.len()
        );
    }

    #[test]
    fn from_name_maps_known_strategies() {
        assert_eq!(
            StrategyType::from_name("important").kind(),
            StrategyKind::Important
        );
        assert_eq!(
            StrategyType::from_name("frequent").kind(),
            StrategyKind::Frequent
        );
        assert_eq!(
            StrategyType::from_name("random").kind(),
            StrategyKind::Random
        );
    }

    #[test]
    fn from_name_falls_back_to_random() {
        assert_eq!(
            StrategyType::from_name("clever").kind(),
            StrategyKind::Random
        );
        assert_eq!(StrategyType::from_name("").kind(), StrategyKind::Random);
    }

    #[test]
    fn with_seed_matches_seeded_random() {
        let tokens = hymn_tokens();
        let via_name = StrategyType::with_seed("random", 9).pick(&tokens, 3);
        let direct = RandomStrategy::seeded(9).pick(&tokens, 3);
        assert_eq!(via_name, direct);
    }
}
