//! Deterministic character-feature embedding.

use colrec_model::EmbedError;

use crate::provider::EmbeddingProvider;
use crate::similarity::cosine_similarity;

/// Embedding width: 64 character-frequency buckets, 32 hashed-bigram
/// buckets, 32 position-weighted buckets.
const EMBEDDING_DIM: usize = 128;

/// Offline embedding provider built from character-level features.
///
/// Identical strings embed identically (cosine 1.0) and strings sharing no
/// characters score near zero, which is what header matching needs: the
/// headers have already been normalized, so remaining differences are
/// lexical, not orthographic.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashEmbedder;

impl HashEmbedder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn embed_one(text: &str) -> Vec<f32> {
        let mut embedding = vec![0.0f32; EMBEDDING_DIM];
        let lowered = text.to_lowercase();
        let chars: Vec<char> = lowered.chars().collect();

        // Character frequency features.
        for ch in &chars {
            let idx = (*ch as usize) % 64;
            embedding[idx] += 1.0;
        }

        // Hashed bigram features.
        for pair in chars.windows(2) {
            let bigram = (pair[0] as usize) * 31 + pair[1] as usize;
            embedding[64 + bigram % 32] += 1.0;
        }

        // Position-weighted features: earlier characters count more.
        for (i, ch) in chars.iter().enumerate() {
            let weight = 1.0 / (i + 1) as f32;
            embedding[96 + (*ch as usize) % 32] += weight;
        }

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut embedding {
                *value /= norm;
            }
        }
        embedding
    }
}

impl EmbeddingProvider for HashEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        Ok(texts.iter().map(|text| Self::embed_one(text)).collect())
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIM
    }
}
