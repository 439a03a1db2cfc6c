use async_trait::async_trait;

use crate::errors::LumenResult;

/// An opaque text-embedding function.
#[async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> LumenResult<Vec<f32>>;

    /// Embedding dimensionality this provider produces.
    fn dimensions(&self) -> usize;

    /// Provider name for logs and degradation warnings.
    fn name(&self) -> &str;
}
