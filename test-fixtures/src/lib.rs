//! Shared test fakes and fixture builders for the Lumen workspace.
//!
//! Every collaborator port gets three flavors: a working in-memory fake, a
//! failing variant, and (where timeouts matter) a slow variant. Builders
//! produce the common value objects tests need.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use lumen_core::errors::{LumenError, LumenResult};
use lumen_core::models::{
    BusinessSnapshot, ContextBundle, DocumentChunk, MetricScope, MetricValue, UserProfile,
};
use lumen_core::models::AgentId;
use lumen_core::traits::{IEmbeddingProvider, IMetricsSource, IProfileStore, IVectorIndex, NeighborHit};

/// Install a tracing subscriber for tests that want log output.
/// Safe to call from multiple tests; only the first call wins.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// A plausible user profile for `user_id`.
pub fn profile(user_id: &str) -> UserProfile {
    UserProfile {
        user_id: user_id.to_string(),
        email: format!("{user_id}@example.com"),
        display_name: format!("User {user_id}"),
        company_id: "company-1".to_string(),
        role: "owner".to_string(),
        metadata: serde_json::json!({ "industry": "services" }),
    }
}

/// Build a snapshot from (name, value) pairs.
pub fn snapshot_of(entries: &[(&str, MetricValue)]) -> BusinessSnapshot {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// A context bundle carrying only the given snapshot.
pub fn bundle_with_snapshot(entries: &[(&str, MetricValue)]) -> ContextBundle {
    let mut bundle = ContextBundle::empty("user-1", AgentId::new("executive"));
    bundle.business_snapshot = snapshot_of(entries);
    bundle
}

/// A neighbor hit with the given similarity and chunk id in its metadata.
pub fn hit(chunk_id: &str, similarity: f32) -> NeighborHit {
    NeighborHit {
        content: format!("content of {chunk_id}"),
        embedding: vec![0.1, 0.2, 0.3],
        similarity,
        metadata: serde_json::json!({ "chunk_id": chunk_id, "document_id": "doc-1" }),
    }
}

/// A retrieved document chunk with the given similarity.
pub fn chunk(chunk_id: &str, similarity: f32) -> DocumentChunk {
    DocumentChunk {
        chunk_id: chunk_id.to_string(),
        source_document_id: "doc-1".to_string(),
        content: format!("content of {chunk_id}"),
        embedding: vec![0.1, 0.2, 0.3],
        similarity,
        metadata: serde_json::Value::Null,
    }
}

// ---------------------------------------------------------------------------
// Profile stores
// ---------------------------------------------------------------------------

/// In-memory profile store.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: HashMap<String, UserProfile>,
}

impl InMemoryProfileStore {
    pub fn with_user(user_id: &str) -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(user_id.to_string(), profile(user_id));
        Self { profiles }
    }
}

#[async_trait]
impl IProfileStore for InMemoryProfileStore {
    async fn user_profile(&self, user_id: &str) -> LumenResult<UserProfile> {
        self.profiles
            .get(user_id)
            .cloned()
            .ok_or_else(|| LumenError::source_unavailable("profile-store", "no such user"))
    }
}

/// Profile store that always fails.
pub struct FailingProfileStore;

#[async_trait]
impl IProfileStore for FailingProfileStore {
    async fn user_profile(&self, _user_id: &str) -> LumenResult<UserProfile> {
        Err(LumenError::source_unavailable("profile-store", "connection refused"))
    }
}

/// Profile store that answers after a fixed delay, for timeout tests.
pub struct SlowProfileStore {
    pub delay: Duration,
}

#[async_trait]
impl IProfileStore for SlowProfileStore {
    async fn user_profile(&self, user_id: &str) -> LumenResult<UserProfile> {
        tokio::time::sleep(self.delay).await;
        Ok(profile(user_id))
    }
}

// ---------------------------------------------------------------------------
// Metrics sources
// ---------------------------------------------------------------------------

/// Metrics source backed by a fixed map; serves the intersection of the
/// requested scope and what it has, like a real warehouse view would.
pub struct StaticMetricsSource {
    metrics: BusinessSnapshot,
}

impl StaticMetricsSource {
    pub fn new(entries: &[(&str, MetricValue)]) -> Self {
        Self {
            metrics: snapshot_of(entries),
        }
    }
}

#[async_trait]
impl IMetricsSource for StaticMetricsSource {
    async fn business_snapshot(
        &self,
        _user_id: &str,
        scope: &MetricScope,
    ) -> LumenResult<BusinessSnapshot> {
        Ok(self
            .metrics
            .iter()
            .filter(|(name, _)| scope.metric_names.iter().any(|m| &m == name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect())
    }
}

/// Metrics source that records the scopes it was asked for.
#[derive(Default)]
pub struct RecordingMetricsSource {
    pub requested_scopes: Mutex<Vec<MetricScope>>,
}

#[async_trait]
impl IMetricsSource for RecordingMetricsSource {
    async fn business_snapshot(
        &self,
        _user_id: &str,
        scope: &MetricScope,
    ) -> LumenResult<BusinessSnapshot> {
        self.requested_scopes
            .lock()
            .expect("scope log poisoned")
            .push(scope.clone());
        Ok(BusinessSnapshot::new())
    }
}

/// Metrics source that always fails.
pub struct FailingMetricsSource;

#[async_trait]
impl IMetricsSource for FailingMetricsSource {
    async fn business_snapshot(
        &self,
        _user_id: &str,
        _scope: &MetricScope,
    ) -> LumenResult<BusinessSnapshot> {
        Err(LumenError::source_unavailable("metrics-source", "warehouse offline"))
    }
}

// ---------------------------------------------------------------------------
// Embedding providers
// ---------------------------------------------------------------------------

/// Deterministic embedder: hashes bytes into a small fixed-dimension vector.
pub struct StubEmbedder {
    dims: usize,
    calls: AtomicUsize,
}

impl StubEmbedder {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many embed calls have been made (for cache assertions).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IEmbeddingProvider for StubEmbedder {
    async fn embed(&self, text: &str) -> LumenResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut vector = vec![0.0f32; self.dims];
        for (i, byte) in text.bytes().enumerate() {
            vector[i % self.dims] += byte as f32 / 255.0;
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "stub-embedder"
    }
}

/// Embedder that always fails.
pub struct FailingEmbedder;

#[async_trait]
impl IEmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> LumenResult<Vec<f32>> {
        Err(LumenError::source_unavailable("embedder", "model endpoint down"))
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "failing-embedder"
    }
}

// ---------------------------------------------------------------------------
// Vector indexes
// ---------------------------------------------------------------------------

/// Index serving a fixed candidate list, best-first, truncated to `k`.
pub struct StaticVectorIndex {
    hits: Vec<NeighborHit>,
}

impl StaticVectorIndex {
    pub fn new(mut hits: Vec<NeighborHit>) -> Self {
        hits.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { hits }
    }
}

#[async_trait]
impl IVectorIndex for StaticVectorIndex {
    async fn nearest_neighbors(
        &self,
        _embedding: &[f32],
        k: usize,
    ) -> LumenResult<Vec<NeighborHit>> {
        Ok(self.hits.iter().take(k).cloned().collect())
    }
}

/// Index that records the `k` values it was asked for.
#[derive(Default)]
pub struct RecordingVectorIndex {
    pub requested_k: Mutex<Vec<usize>>,
}

#[async_trait]
impl IVectorIndex for RecordingVectorIndex {
    async fn nearest_neighbors(
        &self,
        _embedding: &[f32],
        k: usize,
    ) -> LumenResult<Vec<NeighborHit>> {
        self.requested_k.lock().expect("k log poisoned").push(k);
        Ok(Vec::new())
    }
}

/// Index that always fails.
pub struct FailingVectorIndex;

#[async_trait]
impl IVectorIndex for FailingVectorIndex {
    async fn nearest_neighbors(
        &self,
        _embedding: &[f32],
        _k: usize,
    ) -> LumenResult<Vec<NeighborHit>> {
        Err(LumenError::source_unavailable("vector-index", "index unreachable"))
    }
}

/// Index that answers after a fixed delay, for timeout tests.
pub struct SlowVectorIndex {
    pub delay: Duration,
}

#[async_trait]
impl IVectorIndex for SlowVectorIndex {
    async fn nearest_neighbors(
        &self,
        _embedding: &[f32],
        _k: usize,
    ) -> LumenResult<Vec<NeighborHit>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}
