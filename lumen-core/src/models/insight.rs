//! Presentation projection of observations for dashboard surfaces.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::observation::{AutomationPotential, ObservationKind};

/// Lifecycle state of a surfaced insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightStatus {
    Active,
    Dismissed,
}

/// Headline numbers for an insight card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightMetrics {
    pub impact: f64,
    pub confidence: f64,
}

/// Where in the dashboard an insight is relevant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightContext {
    pub page_relevance: BTreeSet<String>,
}

/// The presentation-layer projection of an `Observation`: one-to-one,
/// derived deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessInsight {
    pub category: String,
    pub kind: ObservationKind,
    pub title: String,
    pub metrics: InsightMetrics,
    pub suggested_actions: Vec<String>,
    #[serde(default)]
    pub automation_potential: Option<AutomationPotential>,
    pub status: InsightStatus,
    pub context: InsightContext,
}
