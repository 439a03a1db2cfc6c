//! Configuration for the vector document retriever.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Retrieval tuning knobs.
///
/// The index is asked for `top_k * overfetch_factor` candidates so that
/// post-filtering by similarity threshold does not under-return when the
/// index's notion of "near" is looser than the product's quality bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of document chunks returned to the caller. Default: 5.
    pub top_k: usize,
    /// Minimum similarity for a chunk to be considered relevant. Default: 0.75.
    pub similarity_threshold: f32,
    /// Over-fetch multiplier applied to `top_k` when querying the index. Default: 3.
    pub overfetch_factor: usize,
    /// Budget for one embed + nearest-neighbor round trip, in milliseconds. Default: 3000.
    pub search_timeout_ms: u64,
    /// Max entries in the query-embedding cache. Default: 1024.
    pub embedding_cache_size: u64,
}

impl RetrievalConfig {
    /// The per-search budget as a `Duration`.
    pub fn search_timeout(&self) -> Duration {
        Duration::from_millis(self.search_timeout_ms)
    }

    /// How many candidates to request from the index.
    pub fn candidate_count(&self, top_k: usize) -> usize {
        top_k.saturating_mul(self.overfetch_factor).max(top_k)
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            similarity_threshold: 0.75,
            overfetch_factor: 3,
            search_timeout_ms: 3000,
            embedding_cache_size: 1024,
        }
    }
}
