//! Email domain professionalism check.

use lumen_core::models::{
    AutomationPotential, Confidence, ContextBundle, EstimatedImpact, Observation, ObservationKind,
    Priority,
};

use crate::analyzer::Analyzer;

/// Email volume at which the upgrade opportunity becomes high priority.
const HIGH_VOLUME_EMAILS: u64 = 50;
/// Estimated value floor for any upgrade opportunity.
const BASE_VALUE: f64 = 500.0;
/// Estimated value per email contact; larger audiences mean the generic
/// domain is seen more, so value grows strictly with volume.
const VALUE_PER_EMAIL: f64 = 75.0;

/// Flags businesses emailing from generic domains (gmail, outlook, ...) as
/// a credibility opportunity. Evaluated independently of the email
/// security check — the two are not mutually exclusive.
pub struct EmailDomainAnalyzer;

impl Analyzer for EmailDomainAnalyzer {
    fn name(&self) -> &'static str {
        "email-domain"
    }

    fn analyze(&self, bundle: &ContextBundle) -> Option<Observation> {
        let generic = bundle.metric_count("generic_domain_count").unwrap_or(0);
        if generic == 0 {
            return None;
        }
        let total = bundle.metric_count("total_emails").unwrap_or(0).max(generic);

        let priority = if total >= HIGH_VOLUME_EMAILS {
            Priority::High
        } else {
            Priority::Medium
        };

        Some(Observation {
            category: "Business Credibility".to_string(),
            kind: ObservationKind::Opportunity,
            title: "Upgrade to a professional email domain".to_string(),
            priority,
            confidence: Confidence::new(0.85),
            insights: vec![
                format!("{generic} of {total} email contacts use a generic mail domain"),
                "A custom domain raises open rates and makes the business look established"
                    .to_string(),
            ],
            action_items: vec![
                "Register a custom domain matching the business name".to_string(),
                "Migrate mailboxes to the custom domain".to_string(),
                "Publish SPF, DKIM and DMARC records for the new domain".to_string(),
            ],
            estimated_impact: EstimatedImpact {
                business_value: BASE_VALUE + VALUE_PER_EMAIL * total as f64,
                time_saved_hours_per_week: 0.0,
            },
            automation_potential: Some(AutomationPotential {
                can_automate: true,
                automation_kind: "domain_migration".to_string(),
            }),
        })
    }
}
