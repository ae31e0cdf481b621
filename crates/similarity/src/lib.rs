//! Entity similarity scoring for archmap
//!
//! Given two data entities recovered from source code, this crate computes
//! a semantic similarity score for the pair and a best-effort one-to-one
//! correspondence between their fields, through a pluggable
//! word-similarity oracle.
//!
//! The pipeline: identifier normalization strips naming-convention noise,
//! the pairwise scorer builds a full candidate matrix through the oracle,
//! and the resolver reduces the matrix to an injective partial mapping by
//! iterative greedy conflict resolution. The engine orchestrates those
//! stages, aggregates name and field scores, and short-circuits repeat
//! queries for the most recent entity pair.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use std::sync::Arc;

use archmap_core::error::{Error, Result};

mod config;
mod correspondence;
mod engine;
mod exact;
mod lexicon;
mod matrix;
mod mock;
pub mod name;
mod oracle;
mod resolver;

pub use config::{OracleKind, SimilarityConfig, SimilarityConfigBuilder};
pub use correspondence::{FieldCorrespondence, FieldMatch, SimilarityBreakdown};
pub use engine::{EntitySimilarityEngine, PairCache, SimilarityOptions};
pub use exact::ExactMatchOracle;
pub use lexicon::LexiconOracle;
pub use matrix::{Candidate, FieldScorer, SimilarityMatrix};
pub use mock::MockOracle;
pub use oracle::{PartOfSpeech, WordSimilarityOracle};
pub use resolver::resolve_correspondence;

/// Create the word-similarity oracle selected by a configuration.
pub fn create_oracle(config: &SimilarityConfig) -> Result<Arc<dyn WordSimilarityOracle>> {
    config.validate().map_err(Error::config)?;

    match config.oracle {
        OracleKind::Exact => Ok(Arc::new(ExactMatchOracle::new())),
        OracleKind::Mock => Ok(Arc::new(MockOracle::new())),
        OracleKind::Lexicon => {
            let lexicon = LexiconOracle::from_entries(config.lexicon_entries.iter().cloned())?;
            Ok(Arc::new(lexicon))
        }
    }
}

/// Create a similarity engine straight from a configuration.
pub fn create_engine(config: &SimilarityConfig) -> Result<EntitySimilarityEngine> {
    Ok(EntitySimilarityEngine::new(create_oracle(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_builds_each_backend() {
        let exact = SimilarityConfigBuilder::new()
            .oracle(OracleKind::Exact)
            .build();
        assert!(create_oracle(&exact).is_ok());

        let lexicon = SimilarityConfigBuilder::new()
            .oracle(OracleKind::Lexicon)
            .lexicon_entry("car", "automobile", 0.9)
            .build();
        let oracle = create_oracle(&lexicon).unwrap();
        assert_eq!(
            oracle.similarity("car", PartOfSpeech::Noun, "automobile", PartOfSpeech::Noun),
            0.9
        );
    }

    #[test]
    fn factory_rejects_invalid_config() {
        let config = SimilarityConfigBuilder::new()
            .lexicon_entry("car", "automobile", 2.0)
            .build();
        assert!(create_oracle(&config).is_err());
    }
}
