//! The retrieval pipeline: embed → over-fetch → filter → truncate.

use std::sync::Arc;

use tracing::{debug, warn};

use lumen_core::config::RetrievalConfig;
use lumen_core::errors::{LumenResult, RetrievalError};
use lumen_core::models::DocumentChunk;
use lumen_core::traits::{IEmbeddingProvider, IVectorIndex, NeighborHit};

use crate::cache::EmbeddingCache;

/// Retrieves ranked document chunks for a query.
///
/// The index is asked for more candidates than the caller wants
/// (`top_k * overfetch_factor`) because similarity thresholds are
/// approximate: the index's notion of "near" may be looser than the
/// product's quality bar, and over-fetch-then-filter avoids
/// under-returning at the boundary.
pub struct DocumentRetriever {
    embedder: Arc<dyn IEmbeddingProvider>,
    index: Arc<dyn IVectorIndex>,
    cache: EmbeddingCache,
    config: RetrievalConfig,
}

impl DocumentRetriever {
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        index: Arc<dyn IVectorIndex>,
        config: RetrievalConfig,
    ) -> Self {
        let cache = EmbeddingCache::new(config.embedding_cache_size);
        Self {
            embedder,
            index,
            cache,
            config,
        }
    }

    /// Search with the configured `top_k` and threshold.
    pub async fn search_default(&self, query_text: &str) -> Vec<DocumentChunk> {
        self.search(query_text, self.config.top_k, self.config.similarity_threshold)
            .await
    }

    /// Result-typed search with the configured `top_k` and threshold.
    pub async fn try_search_default(&self, query_text: &str) -> LumenResult<Vec<DocumentChunk>> {
        self.try_search(query_text, self.config.top_k, self.config.similarity_threshold)
            .await
    }

    /// Search, absorbing failures into an empty result.
    ///
    /// Retrieval failure is non-fatal to the caller: an unreachable index
    /// or failing embedder yields no excerpts, not an error.
    pub async fn search(
        &self,
        query_text: &str,
        top_k: usize,
        similarity_threshold: f32,
    ) -> Vec<DocumentChunk> {
        match self.try_search(query_text, top_k, similarity_threshold).await {
            Ok(chunks) => chunks,
            Err(e) => {
                warn!(error = %e, "document search degraded to empty result");
                Vec::new()
            }
        }
    }

    /// Result-typed search for callers that record degradation themselves
    /// (the context assembler turns the error into an assembly warning).
    pub async fn try_search(
        &self,
        query_text: &str,
        top_k: usize,
        similarity_threshold: f32,
    ) -> LumenResult<Vec<DocumentChunk>> {
        let search = self.search_inner(query_text, top_k, similarity_threshold);
        match tokio::time::timeout(self.config.search_timeout(), search).await {
            Ok(result) => result,
            Err(_) => Err(RetrievalError::Timeout {
                budget_ms: self.config.search_timeout_ms,
            }
            .into()),
        }
    }

    async fn search_inner(
        &self,
        query_text: &str,
        top_k: usize,
        similarity_threshold: f32,
    ) -> LumenResult<Vec<DocumentChunk>> {
        let embedding = self.query_embedding(query_text).await?;

        let candidate_count = self.config.candidate_count(top_k);
        let hits = self.index.nearest_neighbors(&embedding, candidate_count).await?;
        let fetched = hits.len();

        let mut chunks: Vec<DocumentChunk> = hits
            .into_iter()
            .filter(|hit| hit.similarity >= similarity_threshold)
            .map(hit_to_chunk)
            .collect();

        // Descending similarity; the index should already return best-first,
        // but the ordering contract is ours to keep.
        chunks.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        chunks.truncate(top_k);

        debug!(
            fetched,
            kept = chunks.len(),
            top_k,
            threshold = similarity_threshold,
            "vector search complete"
        );

        Ok(chunks)
    }

    /// Embed a query, going through the L1 cache.
    async fn query_embedding(&self, query_text: &str) -> LumenResult<Vec<f32>> {
        let key = EmbeddingCache::key_for(query_text);
        if let Some(cached) = self.cache.get(&key) {
            debug!(provider = self.embedder.name(), "embedding cache hit");
            return Ok(cached);
        }

        let embedding = self.embedder.embed(query_text).await?;
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }
}

fn hit_to_chunk(hit: NeighborHit) -> DocumentChunk {
    let chunk_id = hit
        .metadata
        .get("chunk_id")
        .and_then(|v| v.as_str())
        .map(String::from)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let source_document_id = hit
        .metadata
        .get("document_id")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string();

    DocumentChunk {
        chunk_id,
        source_document_id,
        content: hit.content,
        embedding: hit.embedding,
        similarity: hit.similarity.clamp(0.0, 1.0),
        metadata: hit.metadata,
    }
}
