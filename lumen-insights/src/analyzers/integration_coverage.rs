//! Integration coverage check.

use lumen_core::models::{
    AutomationPotential, Confidence, ContextBundle, EstimatedImpact, Observation, ObservationKind,
    Priority,
};

use crate::analyzer::Analyzer;

/// Estimated annual value of each unconnected tool integration.
const VALUE_PER_CONNECTOR: f64 = 400.0;

/// Flags available-but-unconnected tool integrations.
pub struct IntegrationCoverageAnalyzer;

impl Analyzer for IntegrationCoverageAnalyzer {
    fn name(&self) -> &'static str {
        "integration-coverage"
    }

    fn analyze(&self, bundle: &ContextBundle) -> Option<Observation> {
        let active = bundle.metric_count("active_integrations").unwrap_or(0);
        let available = bundle.metric_count("available_integrations").unwrap_or(0);
        if available <= active {
            return None;
        }
        let gap = available - active;

        let priority = if active == 0 {
            Priority::High
        } else {
            Priority::Medium
        };

        Some(Observation {
            category: "Integration Coverage".to_string(),
            kind: ObservationKind::Opportunity,
            title: "Connect the tools the business already uses".to_string(),
            priority,
            confidence: Confidence::new(0.75),
            insights: vec![format!(
                "{gap} relevant integration(s) are available but not connected ({active} of {available} active)"
            )],
            action_items: vec![
                "Review the connector catalog for the highest-traffic tools".to_string(),
                "Connect the accounting and CRM integrations first".to_string(),
            ],
            estimated_impact: EstimatedImpact {
                business_value: gap as f64 * VALUE_PER_CONNECTOR,
                time_saved_hours_per_week: gap as f64 * 0.5,
            },
            automation_potential: Some(AutomationPotential {
                can_automate: true,
                automation_kind: "connector_setup".to_string(),
            }),
        })
    }
}
