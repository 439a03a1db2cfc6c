//! Email security hardening check.

use lumen_core::models::{
    AutomationPotential, Confidence, ContextBundle, EstimatedImpact, Observation, ObservationKind,
    Priority,
};

use crate::analyzer::Analyzer;

/// Suggests sender-authentication hardening whenever the business uses a
/// custom mail domain. Independent of the credibility opportunity: a
/// business with zero generic domains still gets this finding.
pub struct EmailSecurityAnalyzer;

impl Analyzer for EmailSecurityAnalyzer {
    fn name(&self) -> &'static str {
        "email-security"
    }

    fn analyze(&self, bundle: &ContextBundle) -> Option<Observation> {
        let custom = bundle.metric_count("custom_domain_count").unwrap_or(0);
        if custom == 0 {
            return None;
        }

        Some(Observation {
            category: "Email Security".to_string(),
            kind: ObservationKind::Info,
            title: "Harden sender authentication on the custom domain".to_string(),
            priority: Priority::Medium,
            confidence: Confidence::new(0.7),
            insights: vec![
                format!("{custom} contacts are reached from a custom mail domain"),
                "Enforcing DMARC protects the domain from spoofing and phishing".to_string(),
            ],
            action_items: vec![
                "Verify SPF and DKIM records resolve for every sending service".to_string(),
                "Move the DMARC policy from monitor to quarantine".to_string(),
            ],
            estimated_impact: EstimatedImpact {
                business_value: 250.0 + 10.0 * custom as f64,
                time_saved_hours_per_week: 0.0,
            },
            automation_potential: Some(AutomationPotential {
                can_automate: true,
                automation_kind: "dns_records".to_string(),
            }),
        })
    }
}
