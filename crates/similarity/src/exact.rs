//! Exact-match fallback oracle

use crate::oracle::{PartOfSpeech, WordSimilarityOracle};

/// Oracle that scores case-insensitive equality to `{0, 1}`.
///
/// This is the degraded mode used when no lexical backend is available:
/// identical tokens score 1.0, everything else 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchOracle;

impl ExactMatchOracle {
    pub fn new() -> Self {
        Self
    }
}

impl WordSimilarityOracle for ExactMatchOracle {
    fn similarity(
        &self,
        word_a: &str,
        _pos_a: PartOfSpeech,
        word_b: &str,
        _pos_b: PartOfSpeech,
    ) -> f64 {
        if word_a.to_lowercase() == word_b.to_lowercase() {
            1.0
        } else {
            0.0
        }
    }
}
