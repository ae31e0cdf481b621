//! Pairwise field scoring
//!
//! Builds the full candidate matrix between two entities' field lists:
//! every source field is scored against every target field through the
//! word oracle, and each source field gets a best-first candidate list.

use archmap_core::EntityField;

use crate::name::normalize;
use crate::oracle::{PartOfSpeech, WordSimilarityOracle};

/// One candidate pairing: a target field index with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Similarity score, in `[0, 1]`
    pub score: f64,

    /// Index of the candidate field in the target entity's declaration order
    pub target: usize,
}

/// Candidate matrix between two field lists.
///
/// Row `i` holds the candidates for source field `i`, sorted descending
/// by score with ties broken by target declaration order. Rows shrink in
/// place as resolution rejects candidates.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<Candidate>>,
}

impl SimilarityMatrix {
    /// Number of source fields (rows).
    pub fn source_count(&self) -> usize {
        self.rows.len()
    }

    /// Current best candidate for a source field, if any remain.
    pub fn best(&self, source: usize) -> Option<Candidate> {
        self.rows.get(source).and_then(|row| row.first()).copied()
    }

    /// Remaining candidates for a source field, best first.
    pub fn candidates(&self, source: usize) -> &[Candidate] {
        self.rows.get(source).map_or(&[], Vec::as_slice)
    }

    /// Permanently reject `target` as a candidate for `source`.
    pub(crate) fn remove_candidate(&mut self, source: usize, target: usize) {
        if let Some(row) = self.rows.get_mut(source) {
            row.retain(|candidate| candidate.target != target);
        }
    }
}

/// Scores fields of one entity against another through a word oracle.
///
/// Holds the semantic-vs-exact switch in one place: with `use_semantic`
/// the configured oracle is queried; without it, scoring degrades to
/// exact matching of normalized names.
pub struct FieldScorer<'a> {
    oracle: &'a dyn WordSimilarityOracle,
    use_semantic: bool,
}

impl<'a> FieldScorer<'a> {
    pub fn new(oracle: &'a dyn WordSimilarityOracle, use_semantic: bool) -> Self {
        Self {
            oracle,
            use_semantic,
        }
    }

    /// Similarity of two raw identifiers after normalization.
    ///
    /// Non-finite or out-of-range scores from a misbehaving oracle are
    /// degraded to 0.0 / clamped into `[0, 1]`.
    pub fn word_similarity(&self, raw_a: &str, raw_b: &str) -> f64 {
        let word_a = normalize(raw_a);
        let word_b = normalize(raw_b);

        let score = if self.use_semantic {
            self.oracle
                .similarity(&word_a, PartOfSpeech::Noun, &word_b, PartOfSpeech::Noun)
        } else if word_a == word_b {
            1.0
        } else {
            0.0
        };

        if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Build the full candidate matrix for two field lists.
    pub fn score_pairwise(
        &self,
        fields_a: &[EntityField],
        fields_b: &[EntityField],
    ) -> SimilarityMatrix {
        let rows = fields_a
            .iter()
            .map(|field_a| {
                let mut row: Vec<Candidate> = fields_b
                    .iter()
                    .enumerate()
                    .map(|(target, field_b)| Candidate {
                        score: self.word_similarity(&field_a.name, &field_b.name),
                        target,
                    })
                    .collect();
                row.sort_by(|x, y| y.score.total_cmp(&x.score).then(x.target.cmp(&y.target)));
                row
            })
            .collect();

        SimilarityMatrix { rows }
    }
}
