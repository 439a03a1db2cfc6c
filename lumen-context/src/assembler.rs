//! Concurrent three-way fan-out with per-fetch budgets.

use std::sync::Arc;

use tokio::time::timeout;
use tracing::{info, warn};

use lumen_core::config::AssemblyConfig;
use lumen_core::errors::AssemblyError;
use lumen_core::models::{Agent, BusinessSnapshot, ContextBundle};
use lumen_core::traits::{IMetricsSource, IProfileStore};
use lumen_retrieval::DocumentRetriever;

use crate::scope;

/// Builds the context bundle for one request.
///
/// The three sub-fetches (profile, agent-scoped snapshot, document search)
/// run concurrently; each is bounded by the configured per-fetch budget.
/// Success is "bundle produced" — that holds even if all three fail.
pub struct ContextAssembler {
    profiles: Arc<dyn IProfileStore>,
    metrics: Arc<dyn IMetricsSource>,
    retriever: Arc<DocumentRetriever>,
    config: AssemblyConfig,
}

impl ContextAssembler {
    pub fn new(
        profiles: Arc<dyn IProfileStore>,
        metrics: Arc<dyn IMetricsSource>,
        retriever: Arc<DocumentRetriever>,
        config: AssemblyConfig,
    ) -> Self {
        Self {
            profiles,
            metrics,
            retriever,
            config,
        }
    }

    /// Assemble a bundle for `user_id` scoped to `agent`, seeding document
    /// retrieval with the original query text.
    pub async fn assemble(&self, user_id: &str, agent: &Agent, query: &str) -> ContextBundle {
        let budget = self.config.fetch_timeout();
        let metric_scope = scope::scope_for(agent);

        // Document search carries its own internal timeout, so only the
        // profile and snapshot fetches get wrapped here.
        let (profile_result, snapshot_result, documents_result) = tokio::join!(
            timeout(budget, self.profiles.user_profile(user_id)),
            timeout(budget, self.metrics.business_snapshot(user_id, &metric_scope)),
            self.retriever.try_search_default(query),
        );

        let mut bundle = ContextBundle::empty(user_id, agent.id.clone());

        match profile_result {
            Ok(Ok(profile)) => bundle.user_profile = Some(profile),
            Ok(Err(e)) => self.degrade(&mut bundle, "profile", e.to_string()),
            Err(_) => self.degrade_timeout(&mut bundle, "profile"),
        }

        match snapshot_result {
            Ok(Ok(snapshot)) => bundle.business_snapshot = snapshot,
            Ok(Err(e)) => {
                bundle.business_snapshot = BusinessSnapshot::new();
                self.degrade(&mut bundle, "snapshot", e.to_string());
            }
            Err(_) => self.degrade_timeout(&mut bundle, "snapshot"),
        }

        match documents_result {
            Ok(chunks) => bundle.document_excerpts = chunks,
            Err(e) => self.degrade(&mut bundle, "documents", e.to_string()),
        }

        info!(
            user = user_id,
            agent = %bundle.agent_id,
            scope = metric_scope.name,
            metrics = bundle.business_snapshot.len(),
            excerpts = bundle.document_excerpts.len(),
            warnings = bundle.assembly_warnings.len(),
            "context assembled"
        );

        bundle
    }

    fn degrade(&self, bundle: &mut ContextBundle, source_name: &str, reason: String) {
        let warning = AssemblyError::FetchFailed {
            source_name: source_name.to_string(),
            reason,
        }
        .to_string();
        warn!(source = source_name, %warning, "sub-fetch degraded");
        bundle.assembly_warnings.push(warning);
    }

    fn degrade_timeout(&self, bundle: &mut ContextBundle, source_name: &str) {
        let warning = AssemblyError::FetchTimeout {
            source_name: source_name.to_string(),
            budget_ms: self.config.fetch_timeout_ms,
        }
        .to_string();
        warn!(source = source_name, %warning, "sub-fetch timed out");
        bundle.assembly_warnings.push(warning);
    }
}
