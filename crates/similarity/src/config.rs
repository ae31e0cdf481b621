//! Configuration for similarity scoring

use serde::{Deserialize, Serialize};

/// Word-similarity oracle backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OracleKind {
    /// In-memory lexicon of word-pair scores
    #[default]
    Lexicon,
    /// Case-insensitive exact matching only
    Exact,
    /// Scripted mock for testing
    Mock,
}

/// Configuration for the similarity engine's oracle backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Oracle backend to create
    pub(crate) oracle: OracleKind,

    /// Seed entries for the lexicon backend: (word, word, score)
    #[serde(default)]
    pub(crate) lexicon_entries: Vec<(String, String, f64)>,
}

impl SimilarityConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (word_a, word_b, score) in &self.lexicon_entries {
            if word_a.is_empty() || word_b.is_empty() {
                return Err("Lexicon entry words cannot be empty".to_string());
            }
            if !score.is_finite() || !(0.0..=1.0).contains(score) {
                return Err(format!(
                    "Lexicon entry ({word_a}, {word_b}) score must be in [0, 1], got {score}"
                ));
            }
        }
        if self.oracle != OracleKind::Lexicon && !self.lexicon_entries.is_empty() {
            return Err(format!(
                "Lexicon entries are only used by the Lexicon backend, not {:?}",
                self.oracle
            ));
        }
        Ok(())
    }
}

/// Builder for SimilarityConfig
pub struct SimilarityConfigBuilder {
    oracle: Option<OracleKind>,
    lexicon_entries: Vec<(String, String, f64)>,
}

impl SimilarityConfigBuilder {
    /// Create a new builder with no defaults set
    pub fn new() -> Self {
        Self {
            oracle: None,
            lexicon_entries: Vec::new(),
        }
    }

    /// Set the oracle backend
    pub fn oracle(mut self, oracle: OracleKind) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Add a lexicon seed entry
    pub fn lexicon_entry(
        mut self,
        word_a: impl Into<String>,
        word_b: impl Into<String>,
        score: f64,
    ) -> Self {
        self.lexicon_entries
            .push((word_a.into(), word_b.into(), score));
        self
    }

    /// Build the configuration, using defaults for unset fields
    pub fn build(self) -> SimilarityConfig {
        let defaults = SimilarityConfig::default();

        SimilarityConfig {
            oracle: self.oracle.unwrap_or(defaults.oracle),
            lexicon_entries: self.lexicon_entries,
        }
    }
}

impl Default for SimilarityConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
