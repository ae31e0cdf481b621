//! Field correspondence result types

use serde::{Deserialize, Serialize};

/// A matched target field with its similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldMatch {
    /// Similarity score of the pairing, in `[0, 1]`
    pub score: f64,

    /// Index of the matched field in the target entity's declaration order
    pub target: usize,
}

/// Injective partial mapping from one entity's fields to another's.
///
/// Holds one entry per source field, in declaration order; `None` means
/// the field found no counterpart. No two source fields share a target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldCorrespondence {
    matches: Vec<Option<FieldMatch>>,
}

impl FieldCorrespondence {
    pub(crate) fn new(matches: Vec<Option<FieldMatch>>) -> Self {
        Self { matches }
    }

    /// Correspondence with no source fields at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of source fields covered (mapped or not).
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Match for the source field at `source` index, if any.
    pub fn get(&self, source: usize) -> Option<FieldMatch> {
        self.matches.get(source).copied().flatten()
    }

    /// Iterate `(source index, match)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<FieldMatch>)> + '_ {
        self.matches.iter().copied().enumerate()
    }

    /// Number of source fields that found a counterpart.
    pub fn mapped_count(&self) -> usize {
        self.matches.iter().flatten().count()
    }

    /// Sum of all matched scores; unmapped fields contribute 0.
    pub fn total_score(&self) -> f64 {
        self.matches.iter().flatten().map(|m| m.score).sum()
    }

    /// True when no two source fields map to the same target.
    pub fn is_injective(&self) -> bool {
        let mut targets: Vec<usize> = self.matches.iter().flatten().map(|m| m.target).collect();
        targets.sort_unstable();
        targets.windows(2).all(|w| w[0] != w[1])
    }
}

/// Name + field similarity breakdown for an entity pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityBreakdown {
    /// Similarity of the two entity names
    pub name_similarity: f64,

    /// Correspondence between the entities' fields
    pub fields: FieldCorrespondence,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> FieldCorrespondence {
        FieldCorrespondence::new(vec![
            Some(FieldMatch {
                score: 1.0,
                target: 0,
            }),
            None,
            Some(FieldMatch {
                score: 0.5,
                target: 2,
            }),
        ])
    }

    #[test]
    fn counts_and_totals() {
        let correspondence = sample();
        assert_eq!(correspondence.len(), 3);
        assert_eq!(correspondence.mapped_count(), 2);
        assert_eq!(correspondence.total_score(), 1.5);
    }

    #[test]
    fn detects_injectivity() {
        assert!(sample().is_injective());

        let duplicated = FieldCorrespondence::new(vec![
            Some(FieldMatch {
                score: 0.9,
                target: 1,
            }),
            Some(FieldMatch {
                score: 0.4,
                target: 1,
            }),
        ]);
        assert!(!duplicated.is_injective());
    }

    #[test]
    fn breakdown_serde_roundtrip() {
        let breakdown = SimilarityBreakdown {
            name_similarity: 0.75,
            fields: sample(),
        };

        let json = serde_json::to_string(&breakdown).unwrap();
        let back: SimilarityBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, breakdown);
    }
}
