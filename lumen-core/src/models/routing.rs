//! The router's output: which agent answers, and how sure we are.

use serde::{Deserialize, Serialize};

use super::agent::AgentId;
use super::confidence::Confidence;

/// Outcome of classifying a raw query against the agent catalog.
///
/// Created once per query, never mutated. Routing never fails — a query with
/// zero domain signal resolves to the executive agent at low confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub agent_id: AgentId,
    pub confidence: Confidence,
    /// Keywords that matched, in catalog order.
    pub matched_keywords: Vec<String>,
    pub reasoning: String,
}
