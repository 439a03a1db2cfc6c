//! Keyword-substring intent classification.

use std::sync::Arc;

use tracing::debug;

use lumen_core::config::RoutingConfig;
use lumen_core::constants::{
    ROUTING_BASE_CONFIDENCE, ROUTING_CONFIDENCE_PER_MATCH, ROUTING_FALLBACK_CONFIDENCE,
    ROUTING_FALLBACK_REASONING, ROUTING_MAX_CONFIDENCE,
};
use lumen_core::models::{Confidence, RoutingDecision};
use lumen_registry::AgentRegistry;

use crate::normalize::normalize;

/// Classifies a raw query into a target agent.
///
/// For every agent, counts how many domain keywords occur as substrings of
/// the normalized query; the raw score is the match count times a per-tier
/// weight (executive hits weigh more, biasing high-level phrasing toward
/// strategic routing). Ties prefer the more specific tier; zero signal
/// falls back to the executive agent.
pub struct IntentRouter {
    registry: Arc<AgentRegistry>,
    config: RoutingConfig,
}

struct Candidate<'a> {
    agent_id: &'a lumen_core::models::AgentId,
    display_name: &'a str,
    specificity: u8,
    raw_score: f64,
    matched: Vec<String>,
}

impl IntentRouter {
    pub fn new(registry: Arc<AgentRegistry>, config: RoutingConfig) -> Self {
        Self { registry, config }
    }

    /// Route a query. Total by construction: every query resolves to some
    /// agent, possibly the executive fallback at confidence 0.3.
    pub fn route(&self, query: &str) -> RoutingDecision {
        let normalized = normalize(query);

        let mut best: Option<Candidate<'_>> = None;
        for agent in self.registry.list(None) {
            let matched: Vec<String> = agent
                .domain_keywords
                .iter()
                .filter(|kw| normalized.contains(kw.as_str()))
                .cloned()
                .collect();
            if matched.is_empty() {
                continue;
            }

            let raw_score = matched.len() as f64 * self.config.match_weight(agent.tier);
            let candidate = Candidate {
                agent_id: &agent.id,
                display_name: &agent.display_name,
                specificity: agent.tier.specificity(),
                raw_score,
                matched,
            };

            // Agents iterate in id order, so on a full tie the first
            // (lexicographically smallest) id sticks — deterministic.
            let wins = match &best {
                None => true,
                Some(current) => {
                    candidate.raw_score > current.raw_score
                        || (candidate.raw_score == current.raw_score
                            && candidate.specificity > current.specificity)
                }
            };
            if wins {
                best = Some(candidate);
            }
        }

        match best {
            Some(winner) => {
                let confidence = ROUTING_MAX_CONFIDENCE.min(
                    ROUTING_BASE_CONFIDENCE
                        + ROUTING_CONFIDENCE_PER_MATCH * winner.matched.len() as f64,
                );
                debug!(
                    agent = %winner.agent_id,
                    score = winner.raw_score,
                    matches = winner.matched.len(),
                    "routed query"
                );
                RoutingDecision {
                    agent_id: winner.agent_id.clone(),
                    confidence: Confidence::new(confidence),
                    reasoning: format!(
                        "{} keyword match(es) for {}: {}",
                        winner.matched.len(),
                        winner.display_name,
                        winner.matched.join(", ")
                    ),
                    matched_keywords: winner.matched,
                }
            }
            None => {
                debug!("no domain signal, routing to executive fallback");
                RoutingDecision {
                    agent_id: self.registry.executive().id.clone(),
                    confidence: Confidence::new(ROUTING_FALLBACK_CONFIDENCE),
                    matched_keywords: Vec::new(),
                    reasoning: ROUTING_FALLBACK_REASONING.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use lumen_core::models::{Agent, AgentId, AgentTier};

    fn router() -> IntentRouter {
        IntentRouter::new(
            Arc::new(AgentRegistry::builtin().unwrap()),
            RoutingConfig::default(),
        )
    }

    #[test]
    fn sales_query_routes_to_sales() {
        let decision = router().route("How is my sales pipeline looking this quarter?");
        assert_eq!(decision.agent_id.as_str(), "sales");
        assert!(decision.matched_keywords.contains(&"pipeline".to_string()));
        // Two matches: 0.5 + 0.2.
        assert!((decision.confidence.value() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn strategic_phrasing_routes_to_executive() {
        let decision = router().route("What should our growth strategy priorities be?");
        assert_eq!(decision.agent_id.as_str(), "executive");
    }

    #[test]
    fn email_query_routes_to_specialist() {
        let decision = router().route("Why do my emails land in spam? Check DNS and SPF.");
        assert_eq!(decision.agent_id.as_str(), "email-deliverability");
    }

    #[test]
    fn empty_query_falls_back_at_exactly_0_3() {
        let decision = router().route("");
        assert_eq!(decision.agent_id.as_str(), "executive");
        assert_eq!(decision.confidence.value(), 0.3);
        assert_eq!(decision.reasoning, "no domain signal; default to executive");
        assert!(decision.matched_keywords.is_empty());
    }

    #[test]
    fn gibberish_falls_back() {
        let decision = router().route("qwxz 12345 blorp");
        assert_eq!(decision.agent_id.as_str(), "executive");
        assert_eq!(decision.confidence.value(), 0.3);
    }

    #[test]
    fn confidence_caps_at_0_95() {
        let decision = router()
            .route("finance financial cash burn runway invoice expenses budget mrr margin profit");
        assert_eq!(decision.agent_id.as_str(), "finance");
        assert_eq!(decision.confidence.value(), 0.95);
    }

    #[test]
    fn matched_keywords_are_in_catalog_order() {
        let decision = router().route("check my dns and dkim and spf records for email");
        let mut sorted = decision.matched_keywords.clone();
        sorted.sort();
        assert_eq!(decision.matched_keywords, sorted);
    }

    fn tiny_agent(id: &str, tier: AgentTier, kw: &[&str], parent: Option<&str>) -> Agent {
        Agent {
            id: AgentId::new(id),
            tier,
            display_name: id.to_string(),
            domain_keywords: kw.iter().map(|k| k.to_string()).collect(),
            tools: BTreeSet::new(),
            system_prompt_template: String::new(),
            parent_agent_id: parent.map(AgentId::new),
        }
    }

    #[test]
    fn equal_scores_prefer_more_specific_tier() {
        let registry = AgentRegistry::new(vec![
            tiny_agent("executive", AgentTier::Executive, &[], None),
            tiny_agent("dept", AgentTier::Departmental, &["alpha"], Some("executive")),
            tiny_agent("spec", AgentTier::Specialist, &["alpha"], Some("dept")),
        ])
        .unwrap();
        // Equal per-match weights force a raw-score tie.
        let config = RoutingConfig {
            executive_match_weight: 2.0,
            departmental_match_weight: 1.0,
            specialist_match_weight: 1.0,
        };
        let decision = IntentRouter::new(Arc::new(registry), config).route("tell me about alpha");
        assert_eq!(decision.agent_id.as_str(), "spec");
    }

    #[test]
    fn full_tie_is_deterministic_by_id() {
        let registry = AgentRegistry::new(vec![
            tiny_agent("executive", AgentTier::Executive, &[], None),
            tiny_agent("a-dept", AgentTier::Departmental, &["alpha"], Some("executive")),
            tiny_agent("b-dept", AgentTier::Departmental, &["alpha"], Some("executive")),
        ])
        .unwrap();
        let decision = IntentRouter::new(Arc::new(registry), RoutingConfig::default())
            .route("tell me about alpha");
        assert_eq!(decision.agent_id.as_str(), "a-dept");
    }
}
