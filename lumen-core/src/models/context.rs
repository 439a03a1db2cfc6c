//! The fused context bundle handed to downstream consumers.

use serde::{Deserialize, Serialize};

use super::agent::AgentId;
use super::document::DocumentChunk;
use super::metrics::BusinessSnapshot;
use super::profile::UserProfile;

/// Everything the pipeline could gather for one request: profile, metrics,
/// and document excerpts, plus a record of which sub-fetches degraded.
///
/// Built once per request. A bundle is produced even when every sub-fetch
/// fails — the warnings then tell the story and all fields are empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextBundle {
    pub user_id: String,
    pub agent_id: AgentId,
    pub user_profile: Option<UserProfile>,
    pub business_snapshot: BusinessSnapshot,
    /// Ordered by descending similarity.
    pub document_excerpts: Vec<DocumentChunk>,
    /// One entry per degraded sub-fetch.
    pub assembly_warnings: Vec<String>,
}

impl ContextBundle {
    /// An empty bundle for the given request identity.
    pub fn empty(user_id: impl Into<String>, agent_id: AgentId) -> Self {
        Self {
            user_id: user_id.into(),
            agent_id,
            user_profile: None,
            business_snapshot: BusinessSnapshot::new(),
            document_excerpts: Vec::new(),
            assembly_warnings: Vec::new(),
        }
    }

    /// Look up a count metric from the snapshot.
    pub fn metric_count(&self, name: &str) -> Option<u64> {
        self.business_snapshot.get(name).and_then(|v| v.as_count())
    }

    /// Look up a numeric metric from the snapshot (counts widen).
    pub fn metric_amount(&self, name: &str) -> Option<f64> {
        self.business_snapshot.get(name).and_then(|v| v.as_amount())
    }

    /// Whether any sub-fetch degraded during assembly.
    pub fn is_degraded(&self) -> bool {
        !self.assembly_warnings.is_empty()
    }
}
