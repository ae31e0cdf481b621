//! Entity similarity orchestration
//!
//! Combines entity-name similarity with the field correspondence into a
//! single aggregate score, short-circuiting repeat queries for the most
//! recent entity pair.

use std::sync::Arc;

use tracing::debug;

use archmap_core::{same_entity, EntityRef};

use crate::correspondence::{FieldCorrespondence, SimilarityBreakdown};
use crate::matrix::FieldScorer;
use crate::oracle::WordSimilarityOracle;
use crate::resolver::resolve_correspondence;

/// Per-call scoring options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityOptions {
    /// Count entity-name similarity as one extra field in the aggregate
    pub include_name: bool,

    /// Query the configured oracle; when false, degrade to exact matching
    pub use_semantic: bool,
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        Self {
            include_name: true,
            use_semantic: true,
        }
    }
}

/// Single-slot cache of the most recent entity-pair breakdown.
///
/// A hit requires both handles to be identical (`same_entity`) to the
/// stored pair, in the same argument order; structurally equal entities
/// under fresh handles always miss. Storing a new pair overwrites the
/// previous slot.
///
/// The slot is keyed by the entity pair alone, not by scoring options:
/// callers switching between semantic and exact scoring for the same
/// handles should [`clear`](PairCache::clear) the cache in between.
#[derive(Debug, Default)]
pub struct PairCache {
    slot: Option<(EntityRef, EntityRef, SimilarityBreakdown)>,
}

impl PairCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    fn lookup(&self, one: &EntityRef, two: &EntityRef) -> Option<&SimilarityBreakdown> {
        self.slot
            .as_ref()
            .filter(|(cached_one, cached_two, _)| {
                same_entity(cached_one, one) && same_entity(cached_two, two)
            })
            .map(|(_, _, breakdown)| breakdown)
    }

    fn store(&mut self, one: EntityRef, two: EntityRef, breakdown: SimilarityBreakdown) {
        self.slot = Some((one, two, breakdown));
    }
}

/// Scores pairs of data entities through a word-similarity oracle.
///
/// Methods take `&mut self`: the engine is a single-caller, sequential
/// component, and the cache mutation makes that explicit. Concurrent use
/// requires per-caller engines or external synchronization.
pub struct EntitySimilarityEngine {
    oracle: Arc<dyn WordSimilarityOracle>,
    cache: PairCache,
}

impl EntitySimilarityEngine {
    pub fn new(oracle: Arc<dyn WordSimilarityOracle>) -> Self {
        Self::with_cache(oracle, PairCache::new())
    }

    /// Engine with a caller-owned cache, e.g. one pre-warmed elsewhere.
    pub fn with_cache(oracle: Arc<dyn WordSimilarityOracle>, cache: PairCache) -> Self {
        Self { oracle, cache }
    }

    /// Full name + field breakdown for an entity pair.
    ///
    /// Returns the cached breakdown when both handles match the most
    /// recently computed pair. Otherwise scores the entity names, builds
    /// and resolves the field candidate matrix, and caches the result.
    /// A pair of entities with no fields at all short-circuits to an
    /// empty correspondence without invoking the scorer or filling the
    /// cache slot.
    pub fn field_breakdown(
        &mut self,
        one: &EntityRef,
        two: &EntityRef,
        use_semantic: bool,
    ) -> SimilarityBreakdown {
        if let Some(hit) = self.cache.lookup(one, two) {
            debug!(entity_one = %one.name, entity_two = %two.name, "similarity cache hit");
            return hit.clone();
        }

        let scorer = FieldScorer::new(self.oracle.as_ref(), use_semantic);
        let name_similarity = scorer.word_similarity(&one.name, &two.name);

        if one.fields.is_empty() && two.fields.is_empty() {
            return SimilarityBreakdown {
                name_similarity,
                fields: FieldCorrespondence::empty(),
            };
        }

        let matrix = scorer.score_pairwise(&one.fields, &two.fields);
        let breakdown = SimilarityBreakdown {
            name_similarity,
            fields: resolve_correspondence(matrix),
        };

        self.cache
            .store(Arc::clone(one), Arc::clone(two), breakdown.clone());
        breakdown
    }

    /// Aggregate similarity of two entities, in `[0, 1]`.
    ///
    /// The combined score sums name similarity (when counted) with every
    /// mapped field's score, unmapped fields contributing 0, and divides
    /// by the number of `one`'s fields plus one when the name is counted.
    /// The degenerate zero-denominator case (name excluded, no fields)
    /// is defined as 0.0.
    pub fn calculate_similarity(
        &mut self,
        one: &EntityRef,
        two: &EntityRef,
        options: SimilarityOptions,
    ) -> f64 {
        let breakdown = self.field_breakdown(one, two, options.use_semantic);

        let name_part = if options.include_name {
            breakdown.name_similarity
        } else {
            0.0
        };
        let combined = name_part + breakdown.fields.total_score();

        let denominator = one.fields.len() + usize::from(options.include_name);
        if denominator == 0 {
            return 0.0;
        }

        combined / denominator as f64
    }
}
