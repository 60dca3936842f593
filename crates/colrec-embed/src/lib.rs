//! Embedding providers and vector similarity.
//!
//! The matcher only depends on the [`EmbeddingProvider`] trait, so the model
//! backing the vectors is swappable: the built-in [`HashEmbedder`] is a fully
//! offline, deterministic character-feature embedding, and tests can inject
//! stub providers returning fixed vectors.

pub mod hash;
pub mod provider;
pub mod similarity;

pub use hash::HashEmbedder;
pub use provider::EmbeddingProvider;
pub use similarity::cosine_similarity;
