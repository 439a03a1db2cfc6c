//! Semantically-retrieved document chunks.

use serde::{Deserialize, Serialize};

/// One retrieved document chunk. Immutable once retrieved; lists of chunks
/// are ordered by descending `similarity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub chunk_id: String,
    pub source_document_id: String,
    pub content: String,
    pub embedding: Vec<f32>,
    /// Similarity to the query embedding, in [0, 1].
    pub similarity: f32,
    #[serde(default)]
    pub metadata: serde_json::Value,
}
