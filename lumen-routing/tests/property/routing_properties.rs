//! Property tests for the intent router.

use std::sync::Arc;

use proptest::prelude::*;

use lumen_core::config::RoutingConfig;
use lumen_registry::AgentRegistry;
use lumen_routing::IntentRouter;

fn router() -> (Arc<AgentRegistry>, IntentRouter) {
    let registry = Arc::new(AgentRegistry::builtin().expect("builtin catalog"));
    let router = IntentRouter::new(Arc::clone(&registry), RoutingConfig::default());
    (registry, router)
}

proptest! {
    /// For all queries, confidence is in [0, 1] and the agent id resolves.
    #[test]
    fn confidence_in_unit_range_and_agent_resolves(query in ".{0,200}") {
        let (registry, router) = router();
        let decision = router.route(&query);
        let confidence = decision.confidence.value();
        prop_assert!((0.0..=1.0).contains(&confidence));
        prop_assert!(registry.get(&decision.agent_id).is_ok());
    }

    /// Queries that cannot contain any keyword fall back to the executive
    /// at exactly 0.3.
    #[test]
    fn keyword_free_queries_take_executive_fallback(query in "[0-9 ]{0,64}") {
        let (registry, router) = router();
        let decision = router.route(&query);
        prop_assert_eq!(&decision.agent_id, &registry.executive().id);
        prop_assert_eq!(decision.confidence.value(), 0.3);
        prop_assert!(decision.matched_keywords.is_empty());
    }

    /// Routing is a pure function of the query.
    #[test]
    fn routing_is_deterministic(query in ".{0,120}") {
        let (_registry, router) = router();
        let a = router.route(&query);
        let b = router.route(&query);
        prop_assert_eq!(&a.agent_id, &b.agent_id);
        prop_assert_eq!(a.confidence.value(), b.confidence.value());
        prop_assert_eq!(a.matched_keywords, b.matched_keywords);
    }
}
