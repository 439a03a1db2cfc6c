//! Configuration for the keyword intent router.

use serde::{Deserialize, Serialize};

use crate::models::AgentTier;

/// Per-tier keyword match weights for intent routing.
///
/// The executive tier carries a higher per-match weight so high-level
/// phrasing ("strategy", "priorities", "growth") routes to the executive
/// agent even when a specialist also matches a keyword. The exact values
/// are tunable; the scenario tests pin the observable behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Weight per matched keyword for executive-tier agents. Default: 2.0.
    pub executive_match_weight: f64,
    /// Weight per matched keyword for departmental-tier agents. Default: 1.0.
    pub departmental_match_weight: f64,
    /// Weight per matched keyword for specialist-tier agents. Default: 1.25.
    pub specialist_match_weight: f64,
}

impl RoutingConfig {
    /// The per-match weight for a given tier.
    pub fn match_weight(&self, tier: AgentTier) -> f64 {
        match tier {
            AgentTier::Executive => self.executive_match_weight,
            AgentTier::Departmental => self.departmental_match_weight,
            AgentTier::Specialist => self.specialist_match_weight,
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            executive_match_weight: 2.0,
            departmental_match_weight: 1.0,
            specialist_match_weight: 1.25,
        }
    }
}
