//! Stable correspondence resolution
//!
//! Turns a candidate matrix into an injective partial mapping by iterative
//! greedy conflict resolution. This is a local approximation to stable
//! one-to-one assignment, chosen for explainability: it is not a
//! maximum-weight matcher, only a locally conflict-free one.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::correspondence::{FieldCorrespondence, FieldMatch};
use crate::matrix::SimilarityMatrix;

/// Resolve a candidate matrix into an injective partial mapping.
///
/// Scans source rows in declaration order, each claiming its current best
/// target. A claim conflict is settled by score: a strictly better
/// claimant revokes the earlier claim (the loser permanently loses that
/// candidate) and the scan restarts; otherwise the newcomer drops the
/// contested candidate and immediately retries with its next best.
///
/// Converges when a full scan completes without revocation. Every
/// rejection permanently removes one candidate, so the number of restarts
/// is bounded by source-count x target-count; the iteration count is
/// quadratic in the worst case, a known cost of the restart scheme.
/// Equal-score conflicts keep the earlier claim, and candidate lists
/// break score ties by target declaration order, so output is
/// deterministic for a fixed input order.
pub fn resolve_correspondence(mut matrix: SimilarityMatrix) -> FieldCorrespondence {
    let source_count = matrix.source_count();
    let mut rounds = 0usize;

    let mut changed = true;
    while changed {
        changed = false;
        rounds += 1;

        // target index -> (claim score, claiming source row)
        let mut encountered: HashMap<usize, (f64, usize)> = HashMap::new();

        'scan: for source in 0..source_count {
            loop {
                let Some(best) = matrix.best(source) else {
                    // candidates exhausted; this source stays unmapped
                    break;
                };

                match encountered.get(&best.target) {
                    None => {
                        encountered.insert(best.target, (best.score, source));
                        break;
                    }
                    Some(&(held_score, holder)) if best.score > held_score => {
                        // strictly better: revoke the holder and restart the scan
                        matrix.remove_candidate(holder, best.target);
                        trace!(
                            source,
                            target = best.target,
                            score = best.score,
                            revoked_from = holder,
                            "claim revoked"
                        );
                        changed = true;
                        break 'scan;
                    }
                    Some(_) => {
                        // holder keeps the claim; retry with the next best
                        matrix.remove_candidate(source, best.target);
                        trace!(source, target = best.target, "candidate rejected");
                    }
                }
            }
        }
    }

    debug!(rounds, source_count, "correspondence resolution converged");

    let matches = (0..source_count)
        .map(|source| {
            matrix.best(source).map(|candidate| FieldMatch {
                score: candidate.score,
                target: candidate.target,
            })
        })
        .collect();

    FieldCorrespondence::new(matches)
}
