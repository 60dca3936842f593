//! Column matching: text normalization plus the embedding-based match engine.

pub mod engine;
pub mod text;

pub use engine::{MatchEngine, MatchThreshold};
pub use text::normalize;
