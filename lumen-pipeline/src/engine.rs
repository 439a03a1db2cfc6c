//! The pipeline engine: owns the stage objects and exposes the two
//! request-handler entry points.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use lumen_core::config::PipelineConfig;
use lumen_core::constants::{INSIGHT_CONTEXT_QUERY, MANUAL_OVERRIDE_REASONING};
use lumen_core::models::{
    Agent, AgentId, BusinessInsight, Confidence, ContextBundle, Observation, RoutingDecision,
};
use lumen_core::traits::{IEmbeddingProvider, IMetricsSource, IProfileStore, IVectorIndex};
use lumen_context::ContextAssembler;
use lumen_insights::{projection, Analyzer, ObservationEngine};
use lumen_registry::AgentRegistry;
use lumen_retrieval::DocumentRetriever;
use lumen_routing::IntentRouter;

use crate::cache::{AgentCommand, CommandCache};

/// A routed query and the context assembled for it, ready for the
/// downstream completion call.
#[derive(Debug, Clone)]
pub struct RoutedContext {
    pub routing: RoutingDecision,
    pub context: ContextBundle,
}

/// Orchestrates router, assembler, and observation engine for one process.
///
/// Both entry points are total: routing always resolves to an agent,
/// assembly always produces a bundle, and insight generation degrades to
/// an empty list rather than surfacing an error to the chat experience.
pub struct PipelineEngine {
    registry: Arc<AgentRegistry>,
    router: IntentRouter,
    assembler: ContextAssembler,
    observations: ObservationEngine,
    commands: CommandCache,
}

impl PipelineEngine {
    pub fn new(
        registry: Arc<AgentRegistry>,
        profiles: Arc<dyn IProfileStore>,
        metrics: Arc<dyn IMetricsSource>,
        embedder: Arc<dyn IEmbeddingProvider>,
        index: Arc<dyn IVectorIndex>,
        config: PipelineConfig,
    ) -> Self {
        let retriever = Arc::new(DocumentRetriever::new(
            embedder,
            index,
            config.retrieval.clone(),
        ));
        let router = IntentRouter::new(Arc::clone(&registry), config.routing.clone());
        let assembler = ContextAssembler::new(profiles, metrics, retriever, config.assembly.clone());

        Self {
            registry,
            router,
            assembler,
            observations: ObservationEngine::with_defaults(),
            commands: CommandCache::new(&config.cache),
        }
    }

    /// Add a custom analyzer to the observation engine.
    pub fn register_analyzer(&mut self, analyzer: Box<dyn Analyzer>) {
        self.observations.register(analyzer);
    }

    /// Route a query and assemble its context bundle.
    ///
    /// With `agent_override` the router is skipped and a synthetic
    /// full-confidence decision is produced; an unknown override id falls
    /// back to the executive agent.
    pub async fn route_and_assemble(
        &self,
        query: &str,
        user_id: &str,
        agent_override: Option<&AgentId>,
    ) -> RoutedContext {
        let request_id = Uuid::new_v4();

        let routing = match agent_override {
            Some(id) => {
                let agent = self.resolve_or_executive(id);
                RoutingDecision {
                    agent_id: agent.id.clone(),
                    confidence: Confidence::new(1.0),
                    matched_keywords: Vec::new(),
                    reasoning: MANUAL_OVERRIDE_REASONING.to_string(),
                }
            }
            None => self.router.route(query),
        };

        info!(
            %request_id,
            agent = %routing.agent_id,
            confidence = %routing.confidence,
            "query routed"
        );

        let agent = self.resolve_or_executive(&routing.agent_id);
        let context = self.assembler.assemble(user_id, agent, query).await;

        RoutedContext { routing, context }
    }

    /// Generate the ranked observation list for dashboard surfaces.
    ///
    /// Total-source failure surfaces as an empty list, never an error:
    /// every degraded fetch is already an empty default on the bundle, and
    /// analyzers find nothing in an empty snapshot.
    pub async fn get_observations(&self, user_id: &str, company_id: &str) -> Vec<Observation> {
        let executive = self.registry.executive();
        let bundle = self
            .assembler
            .assemble(user_id, executive, INSIGHT_CONTEXT_QUERY)
            .await;

        if bundle.is_degraded() {
            debug!(
                company = company_id,
                warnings = bundle.assembly_warnings.len(),
                "insight context degraded"
            );
        }

        self.observations.generate(&bundle)
    }

    /// Project observations into dashboard insights, optionally filtered
    /// to those relevant on `page_id`.
    pub async fn get_insights(
        &self,
        user_id: &str,
        company_id: &str,
        page_id: Option<&str>,
    ) -> Vec<BusinessInsight> {
        self.get_observations(user_id, company_id)
            .await
            .iter()
            .map(projection::to_insight)
            .filter(|insight| {
                page_id.map_or(true, |page| insight.context.page_relevance.contains(page))
            })
            .collect()
    }

    /// The cached agent-command directory for a tenant.
    pub async fn agent_commands(&self, company_id: &str) -> Arc<Vec<AgentCommand>> {
        let registry = Arc::clone(&self.registry);
        self.commands
            .get_or_populate(company_id, async move {
                registry
                    .list(None)
                    .into_iter()
                    .map(|agent| AgentCommand {
                        agent_id: agent.id.clone(),
                        display_name: agent.display_name.clone(),
                        tools: agent.tools.iter().cloned().collect(),
                    })
                    .collect()
            })
            .await
    }

    /// Force the next command-directory read for a tenant to refetch.
    pub async fn invalidate_commands(&self, company_id: &str) {
        self.commands.invalidate(company_id).await;
    }

    fn resolve_or_executive(&self, id: &AgentId) -> &Agent {
        match self.registry.get(id) {
            Ok(agent) => agent,
            Err(_) => {
                warn!(agent = %id, "unknown agent id, falling back to executive");
                self.registry.executive()
            }
        }
    }
}
