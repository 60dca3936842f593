//! Match engine implementation.

use std::cmp::Ordering;

use tracing::debug;

use colrec_embed::{EmbeddingProvider, cosine_similarity};
use colrec_model::{ColumnAssignment, EmbedError, MatchError, MatchOutcome};

use crate::text::normalize;

/// Default similarity cutoff for accepting a match.
const DEFAULT_THRESHOLD: f64 = 0.7;

/// Similarity cutoff with strict-inequality semantics: a score equal to the
/// threshold is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThreshold(f64);

impl MatchThreshold {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// True when the score strictly exceeds the threshold.
    #[must_use]
    pub fn admits(&self, similarity: f64) -> bool {
        similarity > self.0
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for MatchThreshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

/// Engine for matching source headers against canonical target fields.
///
/// Both sides are normalized internally (exactly once; the normalization is
/// idempotent so pre-folded input is harmless), embedded in one batch call
/// each, and compared pairwise by cosine similarity. Each source header takes
/// its argmax target when the score clears the threshold; targets are claimed
/// exclusively, best score first, so two headers never map to the same field.
pub struct MatchEngine<'a> {
    provider: &'a dyn EmbeddingProvider,
    threshold: MatchThreshold,
}

struct Candidate {
    source_idx: usize,
    target_idx: usize,
    similarity: f64,
}

impl<'a> MatchEngine<'a> {
    #[must_use]
    pub fn new(provider: &'a dyn EmbeddingProvider) -> Self {
        Self {
            provider,
            threshold: MatchThreshold::default(),
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: MatchThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Matches source headers against target fields.
    ///
    /// Every source header lands in exactly one of the outcome's assignment
    /// or unmatched lists, in source order and with its original label. An
    /// all-unmatched result is valid, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] when the provider fails or violates its batch
    /// shape or dimension contract.
    pub fn align(
        &self,
        source_headers: &[String],
        target_fields: &[String],
    ) -> Result<MatchOutcome, MatchError> {
        let source_embeddings = self.embed_normalized(source_headers)?;
        let target_embeddings = self.embed_normalized(target_fields)?;

        // Per-source argmax; strictly-greater comparison keeps the first
        // occurrence on ties.
        let mut candidates: Vec<Candidate> = Vec::new();
        for (source_idx, source_embedding) in source_embeddings.iter().enumerate() {
            let mut best: Option<(usize, f64)> = None;
            for (target_idx, target_embedding) in target_embeddings.iter().enumerate() {
                let similarity = cosine_similarity(source_embedding, target_embedding);
                if best.is_none_or(|(_, best_similarity)| similarity > best_similarity) {
                    best = Some((target_idx, similarity));
                }
            }
            if let Some((target_idx, similarity)) = best
                && self.threshold.admits(similarity)
            {
                candidates.push(Candidate {
                    source_idx,
                    target_idx,
                    similarity,
                });
            }
        }

        // Exclusive target claims, best score first; ties go to the earlier
        // source column. A source whose argmax target was already claimed
        // becomes unmatched rather than falling back to a weaker target.
        candidates.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
                .then(a.source_idx.cmp(&b.source_idx))
        });

        let mut claimed_targets = vec![false; target_fields.len()];
        let mut chosen: Vec<Option<(usize, f64)>> = vec![None; source_headers.len()];
        for candidate in candidates {
            if claimed_targets[candidate.target_idx] {
                debug!(
                    source_column = %source_headers[candidate.source_idx],
                    target_field = %target_fields[candidate.target_idx],
                    similarity = candidate.similarity,
                    "target already claimed"
                );
                continue;
            }
            claimed_targets[candidate.target_idx] = true;
            chosen[candidate.source_idx] = Some((candidate.target_idx, candidate.similarity));
        }

        let mut assignments = Vec::new();
        let mut unmatched_columns = Vec::new();
        for (source_idx, header) in source_headers.iter().enumerate() {
            match chosen[source_idx] {
                Some((target_idx, similarity)) => assignments.push(ColumnAssignment {
                    source_column: header.clone(),
                    target_field: target_fields[target_idx].clone(),
                    similarity,
                }),
                None => unmatched_columns.push(header.clone()),
            }
        }

        Ok(MatchOutcome {
            assignments,
            unmatched_columns,
        })
    }

    fn embed_normalized(&self, labels: &[String]) -> Result<Vec<Vec<f32>>, MatchError> {
        let normalized: Vec<String> = labels.iter().map(|label| normalize(label)).collect();
        let embeddings = self.provider.embed(&normalized)?;
        if embeddings.len() != normalized.len() {
            return Err(EmbedError::BatchShape {
                expected: normalized.len(),
                actual: embeddings.len(),
            }
            .into());
        }
        let expected = self.provider.dimension();
        for embedding in &embeddings {
            if embedding.len() != expected {
                return Err(MatchError::Dimension {
                    expected,
                    actual: embedding.len(),
                });
            }
        }
        Ok(embeddings)
    }
}
