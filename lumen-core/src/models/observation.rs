//! Business observations produced by analyzers.

use serde::{Deserialize, Serialize};

use super::confidence::Confidence;

/// What kind of finding an observation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservationKind {
    Opportunity,
    Risk,
    Info,
}

/// Observation priority, with a fixed rank order for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Fixed sort rank: critical=4, high=3, medium=2, low=1.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// Estimated business impact of acting on an observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedImpact {
    /// Estimated annual value in the account's currency.
    pub business_value: f64,
    #[serde(default)]
    pub time_saved_hours_per_week: f64,
}

/// Whether and how a finding can be acted on automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationPotential {
    pub can_automate: bool,
    /// Automation family, e.g. "dns_records" or "workflow".
    pub automation_kind: String,
}

/// A single generated business finding.
///
/// Produced by one analyzer, read-only after creation, generated fresh per
/// request and never persisted by this pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub category: String,
    pub kind: ObservationKind,
    pub title: String,
    pub priority: Priority,
    pub confidence: Confidence,
    pub insights: Vec<String>,
    pub action_items: Vec<String>,
    pub estimated_impact: EstimatedImpact,
    #[serde(default)]
    pub automation_potential: Option<AutomationPotential>,
}
