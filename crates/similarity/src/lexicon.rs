//! In-memory lexicon oracle
//!
//! The deployment seam for a real lexical database: callers load word-pair
//! scores once (from whatever backend they use) and the resolver queries
//! them without further I/O.

use std::collections::HashMap;

use archmap_core::{Error, Result};

use crate::oracle::{PartOfSpeech, WordSimilarityOracle};

/// Oracle backed by an in-memory table of word-pair scores.
///
/// Lookups are symmetric and case-insensitive. Identical tokens score 1.0
/// without needing a table entry; pairs absent from the table score 0.0.
/// Part-of-speech tags are accepted for contract compatibility but not
/// consulted; entries are keyed on the word pair alone.
#[derive(Debug, Clone, Default)]
pub struct LexiconOracle {
    scores: HashMap<(String, String), f64>,
}

impl LexiconOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from `(word, word, score)` triples.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String, f64)>,
    {
        let mut lexicon = Self::new();
        for (word_a, word_b, score) in entries {
            lexicon.insert(&word_a, &word_b, score)?;
        }
        Ok(lexicon)
    }

    /// Record a similarity score for a word pair.
    ///
    /// # Errors
    ///
    /// Returns an error if `score` is not a finite number in `[0, 1]`.
    pub fn insert(&mut self, word_a: &str, word_b: &str, score: f64) -> Result<()> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(Error::lexicon(format!(
                "score for ({word_a:?}, {word_b:?}) must be in [0, 1], got {score}"
            )));
        }
        self.scores.insert(Self::key(word_a, word_b), score);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Canonical symmetric key: lowercased, lexicographically ordered.
    fn key(word_a: &str, word_b: &str) -> (String, String) {
        let a = word_a.to_lowercase();
        let b = word_b.to_lowercase();
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl WordSimilarityOracle for LexiconOracle {
    fn similarity(
        &self,
        word_a: &str,
        _pos_a: PartOfSpeech,
        word_b: &str,
        _pos_b: PartOfSpeech,
    ) -> f64 {
        if word_a.to_lowercase() == word_b.to_lowercase() {
            return 1.0;
        }
        self.scores
            .get(&Self::key(word_a, word_b))
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NOUN: PartOfSpeech = PartOfSpeech::Noun;

    #[test]
    fn lookup_is_symmetric() {
        let mut lexicon = LexiconOracle::new();
        lexicon.insert("car", "automobile", 0.9).unwrap();

        assert_eq!(lexicon.similarity("car", NOUN, "automobile", NOUN), 0.9);
        assert_eq!(lexicon.similarity("automobile", NOUN, "car", NOUN), 0.9);
    }

    #[test]
    fn identical_words_score_one_without_entry() {
        let lexicon = LexiconOracle::new();
        assert_eq!(lexicon.similarity("order", NOUN, "Order", NOUN), 1.0);
    }

    #[test]
    fn unknown_pairs_degrade_to_zero() {
        let lexicon = LexiconOracle::new();
        assert_eq!(lexicon.similarity("order", NOUN, "zebra", NOUN), 0.0);
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let mut lexicon = LexiconOracle::new();
        assert!(lexicon.insert("a", "b", 1.5).is_err());
        assert!(lexicon.insert("a", "b", -0.1).is_err());
        assert!(lexicon.insert("a", "b", f64::NAN).is_err());
        assert!(lexicon.is_empty());
    }

    #[test]
    fn from_entries_builds_table() {
        let lexicon = LexiconOracle::from_entries(vec![
            ("car".to_string(), "automobile".to_string(), 0.9),
            ("price".to_string(), "cost".to_string(), 0.8),
        ])
        .unwrap();

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.similarity("cost", NOUN, "price", NOUN), 0.8);
    }
}
