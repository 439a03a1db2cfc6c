//! In-memory query-embedding cache using moka.
//!
//! Keys are blake3 hashes of the query text. Repeated questions — common in
//! dashboard surfaces that re-issue the same seed query — skip the
//! embedding call entirely.

use std::time::Duration;

use moka::sync::Cache;

/// Size-bounded embedding cache with an idle TTL.
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    /// Create a cache holding at most `max_entries` embeddings.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();

        Self { cache }
    }

    /// Cache key for a query string.
    pub fn key_for(query: &str) -> String {
        blake3::hash(query.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
