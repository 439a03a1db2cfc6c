//! The observation engine: run analyzers, rank findings.

use tracing::debug;

use lumen_core::models::{ContextBundle, Observation};

use crate::analyzer::Analyzer;
use crate::analyzers;

/// Runs the registered analyzers over a bundle and sorts the combined
/// findings by priority rank descending, ties broken by confidence
/// descending. Analyzers are pure, so the output is identical for an
/// identical bundle.
pub struct ObservationEngine {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl ObservationEngine {
    pub fn new(analyzers: Vec<Box<dyn Analyzer>>) -> Self {
        Self { analyzers }
    }

    /// Engine with the built-in analyzer set.
    pub fn with_defaults() -> Self {
        Self::new(analyzers::default_analyzers())
    }

    /// Register an additional analyzer. Additive: existing analyzers and
    /// their relative order are untouched.
    pub fn register(&mut self, analyzer: Box<dyn Analyzer>) {
        self.analyzers.push(analyzer);
    }

    /// Run every analyzer and return the ranked findings.
    pub fn generate(&self, bundle: &ContextBundle) -> Vec<Observation> {
        let mut observations: Vec<Observation> = self
            .analyzers
            .iter()
            .filter_map(|analyzer| {
                let finding = analyzer.analyze(bundle);
                debug!(
                    analyzer = analyzer.name(),
                    found = finding.is_some(),
                    "analyzer complete"
                );
                finding
            })
            .collect();

        observations.sort_by(|a, b| {
            b.priority.rank().cmp(&a.priority.rank()).then_with(|| {
                b.confidence
                    .value()
                    .partial_cmp(&a.confidence.value())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });

        debug!(findings = observations.len(), "observation generation complete");
        observations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::models::{
        Confidence, EstimatedImpact, ObservationKind, Priority,
    };
    use test_fixtures::bundle_with_snapshot;

    struct FixedAnalyzer {
        name: &'static str,
        priority: Priority,
        confidence: f64,
    }

    impl Analyzer for FixedAnalyzer {
        fn name(&self) -> &'static str {
            self.name
        }

        fn analyze(&self, _bundle: &ContextBundle) -> Option<Observation> {
            Some(Observation {
                category: self.name.to_string(),
                kind: ObservationKind::Info,
                title: self.name.to_string(),
                priority: self.priority,
                confidence: Confidence::new(self.confidence),
                insights: vec![],
                action_items: vec![],
                estimated_impact: EstimatedImpact {
                    business_value: 0.0,
                    time_saved_hours_per_week: 0.0,
                },
                automation_potential: None,
            })
        }
    }

    struct SilentAnalyzer;

    impl Analyzer for SilentAnalyzer {
        fn name(&self) -> &'static str {
            "silent"
        }

        fn analyze(&self, _bundle: &ContextBundle) -> Option<Observation> {
            None
        }
    }

    fn fixed(name: &'static str, priority: Priority, confidence: f64) -> Box<dyn Analyzer> {
        Box::new(FixedAnalyzer {
            name,
            priority,
            confidence,
        })
    }

    #[test]
    fn sorts_by_priority_then_confidence() {
        let engine = ObservationEngine::new(vec![
            fixed("low", Priority::Low, 0.9),
            fixed("high-weak", Priority::High, 0.4),
            fixed("critical", Priority::Critical, 0.2),
            fixed("high-strong", Priority::High, 0.8),
            fixed("medium", Priority::Medium, 0.99),
        ]);

        let observations = engine.generate(&bundle_with_snapshot(&[]));
        let order: Vec<&str> = observations.iter().map(|o| o.category.as_str()).collect();
        assert_eq!(order, vec!["critical", "high-strong", "high-weak", "medium", "low"]);

        for pair in observations.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.priority.rank() >= b.priority.rank());
            if a.priority.rank() == b.priority.rank() {
                assert!(a.confidence.value() >= b.confidence.value());
            }
        }
    }

    #[test]
    fn silent_analyzers_contribute_nothing() {
        let engine = ObservationEngine::new(vec![
            Box::new(SilentAnalyzer),
            fixed("only", Priority::Low, 0.5),
        ]);
        assert_eq!(engine.generate(&bundle_with_snapshot(&[])).len(), 1);
    }

    #[test]
    fn generation_is_idempotent() {
        let engine = ObservationEngine::with_defaults();
        let bundle = bundle_with_snapshot(&[
            (
                "generic_domain_count",
                lumen_core::models::MetricValue::Count(10),
            ),
            ("total_emails", lumen_core::models::MetricValue::Count(60)),
            (
                "custom_domain_count",
                lumen_core::models::MetricValue::Count(4),
            ),
            ("seat_count", lumen_core::models::MetricValue::Count(8)),
            (
                "mfa_enabled_count",
                lumen_core::models::MetricValue::Count(2),
            ),
        ]);

        let first = engine.generate(&bundle);
        let second = engine.generate(&bundle);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.category, b.category);
            assert_eq!(a.priority, b.priority);
            assert_eq!(a.confidence.value(), b.confidence.value());
        }
    }

    #[test]
    fn empty_bundle_produces_no_observations() {
        let engine = ObservationEngine::with_defaults();
        assert!(engine.generate(&bundle_with_snapshot(&[])).is_empty());
    }

    #[test]
    fn register_is_additive() {
        let mut engine = ObservationEngine::new(vec![fixed("first", Priority::Low, 0.5)]);
        engine.register(fixed("second", Priority::High, 0.5));
        assert_eq!(engine.generate(&bundle_with_snapshot(&[])).len(), 2);
    }
}
