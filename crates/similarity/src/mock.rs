//! Mock oracle for testing

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::oracle::{PartOfSpeech, WordSimilarityOracle};

/// Mock oracle with scripted scores and a call counter.
///
/// Scripted pairs are looked up symmetrically and case-insensitively;
/// identical tokens score 1.0, everything else the configured default.
/// The counter makes oracle traffic observable, e.g. to assert that a
/// cached result performed no lookups.
#[derive(Debug, Default)]
pub struct MockOracle {
    scores: HashMap<(String, String), f64>,
    default_score: f64,
    calls: AtomicUsize,
}

impl MockOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock returning `default_score` for every unscripted, non-identical pair.
    pub fn with_default(default_score: f64) -> Self {
        Self {
            default_score,
            ..Self::default()
        }
    }

    /// Script a score for a word pair.
    pub fn script(mut self, word_a: &str, word_b: &str, score: f64) -> Self {
        self.scores.insert(key(word_a, word_b), score);
        self
    }

    /// Number of similarity calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

fn key(word_a: &str, word_b: &str) -> (String, String) {
    let a = word_a.to_lowercase();
    let b = word_b.to_lowercase();
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl WordSimilarityOracle for MockOracle {
    fn similarity(
        &self,
        word_a: &str,
        _pos_a: PartOfSpeech,
        word_b: &str,
        _pos_b: PartOfSpeech,
    ) -> f64 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if let Some(score) = self.scores.get(&key(word_a, word_b)) {
            return *score;
        }
        if word_a.to_lowercase() == word_b.to_lowercase() {
            1.0
        } else {
            self.default_score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOUN: PartOfSpeech = PartOfSpeech::Noun;

    #[test]
    fn counts_every_call() {
        let oracle = MockOracle::new();
        assert_eq!(oracle.call_count(), 0);

        oracle.similarity("a", NOUN, "b", NOUN);
        oracle.similarity("a", NOUN, "a", NOUN);
        assert_eq!(oracle.call_count(), 2);
    }

    #[test]
    fn scripted_scores_win_over_defaults() {
        let oracle = MockOracle::with_default(0.25).script("car", "auto", 0.9);

        assert_eq!(oracle.similarity("auto", NOUN, "car", NOUN), 0.9);
        assert_eq!(oracle.similarity("car", NOUN, "bike", NOUN), 0.25);
        assert_eq!(oracle.similarity("car", NOUN, "car", NOUN), 1.0);
    }
}
