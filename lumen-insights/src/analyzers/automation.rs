//! Manual-work automation check.

use lumen_core::models::{
    AutomationPotential, Confidence, ContextBundle, EstimatedImpact, Observation, ObservationKind,
    Priority,
};

use crate::analyzer::Analyzer;

/// Weekly manual hours below which automation is not worth surfacing.
const MIN_MANUAL_HOURS: f64 = 5.0;
/// Weekly manual hours at which the opportunity becomes high priority.
const HIGH_MANUAL_HOURS: f64 = 20.0;
/// Share of manual work typically recoverable by workflow automation.
const RECOVERABLE_SHARE: f64 = 0.6;
/// Estimated annual value per recovered weekly hour.
const VALUE_PER_WEEKLY_HOUR: f64 = 120.0;

/// Flags recurring manual work worth automating.
pub struct AutomationAnalyzer;

impl Analyzer for AutomationAnalyzer {
    fn name(&self) -> &'static str {
        "automation"
    }

    fn analyze(&self, bundle: &ContextBundle) -> Option<Observation> {
        let manual_hours = bundle.metric_amount("manual_task_hours").unwrap_or(0.0);
        if manual_hours < MIN_MANUAL_HOURS {
            return None;
        }

        let recoverable = manual_hours * RECOVERABLE_SHARE;
        let priority = if manual_hours >= HIGH_MANUAL_HOURS {
            Priority::High
        } else {
            Priority::Medium
        };

        Some(Observation {
            category: "Automation".to_string(),
            kind: ObservationKind::Opportunity,
            title: "Automate recurring manual tasks".to_string(),
            priority,
            confidence: Confidence::new(0.8),
            insights: vec![format!(
                "{manual_hours:.0} hours a week go to manual, repetitive tasks"
            )],
            action_items: vec![
                "Mine the task log for the most repeated workflows".to_string(),
                "Build automations for the top three recurring tasks".to_string(),
            ],
            estimated_impact: EstimatedImpact {
                business_value: recoverable * VALUE_PER_WEEKLY_HOUR,
                time_saved_hours_per_week: recoverable,
            },
            automation_potential: Some(AutomationPotential {
                can_automate: true,
                automation_kind: "workflow".to_string(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::models::MetricValue;
    use test_fixtures::bundle_with_snapshot;

    #[test]
    fn heavy_manual_load_is_high_priority() {
        let bundle = bundle_with_snapshot(&[("manual_task_hours", MetricValue::Amount(25.0))]);
        let observation = AutomationAnalyzer.analyze(&bundle).unwrap();
        assert_eq!(observation.priority, Priority::High);
        assert!(observation.estimated_impact.time_saved_hours_per_week > 0.0);
    }

    #[test]
    fn light_manual_load_is_not_surfaced() {
        let bundle = bundle_with_snapshot(&[("manual_task_hours", MetricValue::Amount(2.0))]);
        assert!(AutomationAnalyzer.analyze(&bundle).is_none());
    }

    #[test]
    fn count_metric_also_works() {
        let bundle = bundle_with_snapshot(&[("manual_task_hours", MetricValue::Count(8))]);
        assert_eq!(
            AutomationAnalyzer.analyze(&bundle).unwrap().priority,
            Priority::Medium
        );
    }
}
