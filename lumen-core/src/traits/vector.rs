use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::LumenResult;

/// One raw nearest-neighbor hit from the backing store, before the
/// retriever's threshold filtering and truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborHit {
    pub content: String,
    pub embedding: Vec<f32>,
    /// Store-reported similarity, nominally in [0, 1].
    pub similarity: f32,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// A vector-similarity-search-capable store.
#[async_trait]
pub trait IVectorIndex: Send + Sync {
    /// Return up to `k` nearest neighbors of `embedding`, best first.
    async fn nearest_neighbors(&self, embedding: &[f32], k: usize)
        -> LumenResult<Vec<NeighborHit>>;
}
