use colrec_model::EmbedError;

/// A batch text-embedding backend.
///
/// Implementations must be order-preserving (one vector per input string,
/// in input order) and deterministic for a given provider value.
pub trait EmbeddingProvider {
    /// Embed every input string in one batch call.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::Provider`] when the backend fails.
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError>;

    /// Width of the vectors this provider produces.
    fn dimension(&self) -> usize;
}
