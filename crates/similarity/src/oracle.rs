//! Trait definition for word-similarity oracles

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Part-of-speech tag passed alongside a word token.
///
/// Lexical backends that distinguish senses by part of speech consult it;
/// backends without that notion are free to ignore it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    #[default]
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// Trait for word-similarity oracles
///
/// This trait defines the boundary to the lexical-similarity backend,
/// whether an in-memory lexicon, a WordNet-class database, or a fallback
/// exact matcher.
pub trait WordSimilarityOracle: Send + Sync {
    /// Score the similarity of two word tokens.
    ///
    /// Returns a value in `[0, 1]`. Implementations must return `0.0` for
    /// tokens they cannot score (unknown words, backend failure) rather
    /// than panicking or surfacing an error; callers rely on graceful
    /// degradation.
    fn similarity(
        &self,
        word_a: &str,
        pos_a: PartOfSpeech,
        word_b: &str,
        pos_b: PartOfSpeech,
    ) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_of_speech_display_and_parse() {
        assert_eq!(PartOfSpeech::Noun.to_string(), "Noun");
        assert_eq!("Verb".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Verb);
    }

    #[test]
    fn part_of_speech_defaults_to_noun() {
        assert_eq!(PartOfSpeech::default(), PartOfSpeech::Noun);
    }
}
