//! Account security posture check.

use lumen_core::models::{
    AutomationPotential, Confidence, ContextBundle, EstimatedImpact, Observation, ObservationKind,
    Priority,
};

use crate::analyzer::Analyzer;

/// Exposure proxy per seat without multi-factor auth.
const EXPOSURE_PER_SEAT: f64 = 350.0;

/// Flags seats without multi-factor authentication as a risk.
pub struct SecurityPostureAnalyzer;

impl Analyzer for SecurityPostureAnalyzer {
    fn name(&self) -> &'static str {
        "security-posture"
    }

    fn analyze(&self, bundle: &ContextBundle) -> Option<Observation> {
        let seats = bundle.metric_count("seat_count").unwrap_or(0);
        if seats == 0 {
            return None;
        }
        let covered = bundle.metric_count("mfa_enabled_count").unwrap_or(0).min(seats);
        let uncovered = seats - covered;
        if uncovered == 0 {
            return None;
        }

        let priority = if covered == 0 {
            Priority::Critical
        } else if (covered as f64) < (seats as f64) * 0.5 {
            Priority::High
        } else {
            Priority::Medium
        };

        Some(Observation {
            category: "Security Posture".to_string(),
            kind: ObservationKind::Risk,
            title: "Close the multi-factor authentication gap".to_string(),
            priority,
            confidence: Confidence::new(0.9),
            insights: vec![format!(
                "{uncovered} of {seats} seats sign in without multi-factor authentication"
            )],
            action_items: vec![
                "Require MFA for every seat in the workspace settings".to_string(),
                "Start with accounts holding billing or admin permissions".to_string(),
            ],
            estimated_impact: EstimatedImpact {
                business_value: uncovered as f64 * EXPOSURE_PER_SEAT,
                time_saved_hours_per_week: 0.0,
            },
            automation_potential: Some(AutomationPotential {
                can_automate: false,
                automation_kind: "policy_rollout".to_string(),
            }),
        })
    }
}
