/// Vector retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("vector index unavailable: {reason}")]
    IndexUnavailable { reason: String },

    #[error("vector search timed out after {budget_ms}ms")]
    Timeout { budget_ms: u64 },
}
