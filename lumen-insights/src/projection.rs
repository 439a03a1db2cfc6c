//! Observation → insight projection for dashboard surfaces.

use std::collections::BTreeSet;

use lumen_core::models::{
    BusinessInsight, InsightContext, InsightMetrics, InsightStatus, Observation,
};

/// Dashboard pages an insight category is relevant to.
///
/// Every category is at least dashboard-relevant; specific categories add
/// their focused pages.
pub fn page_relevance(category: &str) -> BTreeSet<String> {
    let pages: &[&str] = match category {
        "Business Credibility" => &["dashboard", "email", "settings"],
        "Email Security" => &["dashboard", "email", "security"],
        "Integration Coverage" => &["dashboard", "integrations"],
        "Security Posture" => &["dashboard", "security"],
        "Automation" => &["dashboard", "automation"],
        _ => &["dashboard"],
    };
    pages.iter().map(|p| p.to_string()).collect()
}

/// Project an observation into its presentation form. One-to-one and
/// deterministic; new insights always start active.
pub fn to_insight(observation: &Observation) -> BusinessInsight {
    BusinessInsight {
        category: observation.category.clone(),
        kind: observation.kind,
        title: observation.title.clone(),
        metrics: InsightMetrics {
            impact: observation.estimated_impact.business_value,
            confidence: observation.confidence.value(),
        },
        suggested_actions: observation.action_items.clone(),
        automation_potential: observation.automation_potential.clone(),
        status: InsightStatus::Active,
        context: InsightContext {
            page_relevance: page_relevance(&observation.category),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::models::{
        Confidence, EstimatedImpact, ObservationKind, Priority,
    };

    fn observation() -> Observation {
        Observation {
            category: "Security Posture".to_string(),
            kind: ObservationKind::Risk,
            title: "Close the MFA gap".to_string(),
            priority: Priority::High,
            confidence: Confidence::new(0.9),
            insights: vec!["gap".to_string()],
            action_items: vec!["require mfa".to_string()],
            estimated_impact: EstimatedImpact {
                business_value: 2100.0,
                time_saved_hours_per_week: 0.0,
            },
            automation_potential: None,
        }
    }

    #[test]
    fn projection_is_one_to_one() {
        let insight = to_insight(&observation());
        assert_eq!(insight.category, "Security Posture");
        assert_eq!(insight.kind, ObservationKind::Risk);
        assert_eq!(insight.metrics.impact, 2100.0);
        assert_eq!(insight.metrics.confidence, 0.9);
        assert_eq!(insight.suggested_actions, vec!["require mfa".to_string()]);
        assert_eq!(insight.status, InsightStatus::Active);
    }

    #[test]
    fn security_insights_surface_on_the_security_page() {
        let insight = to_insight(&observation());
        assert!(insight.context.page_relevance.contains("security"));
        assert!(insight.context.page_relevance.contains("dashboard"));
    }

    #[test]
    fn unknown_categories_stay_dashboard_only() {
        let pages = page_relevance("Some Future Category");
        assert_eq!(pages.len(), 1);
        assert!(pages.contains("dashboard"));
    }
}
