//! End-to-end scenarios for the default analyzer set.

use lumen_core::models::{MetricValue, ObservationKind, Priority};
use lumen_insights::ObservationEngine;
use test_fixtures::bundle_with_snapshot;

fn count(n: u64) -> MetricValue {
    MetricValue::Count(n)
}

/// Small business, all contacts on generic domains: exactly one
/// credibility opportunity, medium priority.
#[test]
fn small_generic_domain_business() {
    let engine = ObservationEngine::with_defaults();
    let bundle = bundle_with_snapshot(&[
        ("generic_domain_count", count(5)),
        ("total_emails", count(5)),
    ]);

    let observations = engine.generate(&bundle);

    let credibility: Vec<_> = observations
        .iter()
        .filter(|o| o.category == "Business Credibility")
        .collect();
    assert_eq!(credibility.len(), 1);
    assert_eq!(credibility[0].kind, ObservationKind::Opportunity);
    assert_eq!(credibility[0].priority, Priority::Medium);
}

/// Large email volume: high priority and a value estimate above 5000.
#[test]
fn large_generic_domain_business() {
    let engine = ObservationEngine::with_defaults();
    let bundle = bundle_with_snapshot(&[
        ("generic_domain_count", count(75)),
        ("total_emails", count(75)),
    ]);

    let observations = engine.generate(&bundle);

    let credibility: Vec<_> = observations
        .iter()
        .filter(|o| o.category == "Business Credibility")
        .collect();
    assert_eq!(credibility.len(), 1);
    assert_eq!(credibility[0].priority, Priority::High);
    assert!(credibility[0].estimated_impact.business_value > 5000.0);
}

/// All contacts on a custom domain: no credibility opportunity, but the
/// security finding still appears — the two checks are independent.
#[test]
fn custom_domain_business_gets_security_finding_only() {
    let engine = ObservationEngine::with_defaults();
    let bundle = bundle_with_snapshot(&[
        ("generic_domain_count", count(0)),
        ("custom_domain_count", count(15)),
    ]);

    let observations = engine.generate(&bundle);

    assert!(!observations.iter().any(|o| o.category == "Business Credibility"));
    assert!(!observations.iter().any(|o| o.kind == ObservationKind::Opportunity
        && o.category == "Business Credibility"));
    assert!(observations.iter().any(|o| o.category == "Email Security"));
}

/// A rich snapshot produces several findings in strict rank order.
#[test]
fn combined_findings_come_out_ranked() {
    let engine = ObservationEngine::with_defaults();
    let bundle = bundle_with_snapshot(&[
        ("generic_domain_count", count(10)),
        ("total_emails", count(80)),
        ("custom_domain_count", count(5)),
        ("active_integrations", count(1)),
        ("available_integrations", count(7)),
        ("seat_count", count(12)),
        ("mfa_enabled_count", count(0)),
        ("manual_task_hours", count(25)),
    ]);

    let observations = engine.generate(&bundle);
    assert!(observations.len() >= 4);

    // The zero-MFA risk outranks everything.
    assert_eq!(observations[0].category, "Security Posture");
    assert_eq!(observations[0].priority, Priority::Critical);

    for pair in observations.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.priority.rank() >= b.priority.rank());
        if a.priority.rank() == b.priority.rank() {
            assert!(a.confidence.value() >= b.confidence.value());
        }
    }
}
