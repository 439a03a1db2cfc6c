//! The validated, immutable agent registry.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use lumen_core::errors::RegistryError;
use lumen_core::models::{Agent, AgentId, AgentTier};

use crate::catalog;

/// Immutable catalog of agents, looked up by id or enumerated by tier.
///
/// Construction validates the hierarchy invariant: exactly one
/// executive-tier agent, and every non-executive agent has an ancestor
/// chain terminating at it. A catalog that violates this is a hard
/// startup error — nothing per-request ever re-validates.
#[derive(Debug)]
pub struct AgentRegistry {
    agents: BTreeMap<AgentId, Agent>,
    executive_id: AgentId,
}

/// On-disk catalog shape for TOML-configured registries.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    agents: Vec<Agent>,
}

impl AgentRegistry {
    /// Build a registry from a list of agents, validating the hierarchy.
    pub fn new(agents: Vec<Agent>) -> Result<Self, RegistryError> {
        let mut map = BTreeMap::new();
        for agent in agents {
            let id = agent.id.clone();
            if map.insert(id.clone(), agent).is_some() {
                return Err(RegistryError::InvalidCatalog {
                    reason: format!("duplicate agent id '{id}'"),
                });
            }
        }

        let mut executives = map
            .values()
            .filter(|a| a.tier == AgentTier::Executive)
            .map(|a| a.id.clone());
        let executive_id = executives.next().ok_or_else(|| RegistryError::InvalidCatalog {
            reason: "catalog has no executive-tier agent".to_string(),
        })?;
        if let Some(extra) = executives.next() {
            return Err(RegistryError::InvalidCatalog {
                reason: format!("catalog has more than one executive-tier agent ('{executive_id}', '{extra}')"),
            });
        }

        let registry = Self { agents: map, executive_id };
        registry.validate_chains()?;

        debug!(agents = registry.agents.len(), executive = %registry.executive_id, "agent registry loaded");
        Ok(registry)
    }

    /// Build the registry from the built-in catalog.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(catalog::builtin_agents())
    }

    /// Parse and validate a registry from a TOML catalog.
    pub fn from_toml_str(raw: &str) -> Result<Self, RegistryError> {
        let file: CatalogFile = toml::from_str(raw).map_err(|e| RegistryError::InvalidCatalog {
            reason: format!("catalog parse error: {e}"),
        })?;
        Self::new(file.agents)
    }

    /// Every non-executive agent must walk up `parent_agent_id` links to the
    /// executive, with no dangling parents and no cycles.
    fn validate_chains(&self) -> Result<(), RegistryError> {
        for agent in self.agents.values() {
            if agent.tier == AgentTier::Executive {
                if agent.parent_agent_id.is_some() {
                    return Err(RegistryError::InvalidCatalog {
                        reason: format!("executive agent '{}' must not have a parent", agent.id),
                    });
                }
                continue;
            }

            let mut current = agent;
            // Chain length is bounded by the catalog size; anything longer is a cycle.
            for _ in 0..self.agents.len() {
                let parent_id = match &current.parent_agent_id {
                    Some(id) => id,
                    None => {
                        return Err(RegistryError::InvalidCatalog {
                            reason: format!(
                                "agent '{}' chain ends at non-executive '{}'",
                                agent.id, current.id
                            ),
                        })
                    }
                };
                current = self.agents.get(parent_id).ok_or_else(|| {
                    RegistryError::InvalidCatalog {
                        reason: format!("agent '{}' references unknown parent '{parent_id}'", current.id),
                    }
                })?;
                if current.tier == AgentTier::Executive {
                    break;
                }
            }
            if current.tier != AgentTier::Executive {
                return Err(RegistryError::InvalidCatalog {
                    reason: format!("agent '{}' parent chain does not terminate at the executive", agent.id),
                });
            }
        }
        Ok(())
    }

    /// Look up an agent by id. Unknown ids are a typed not-found, never a
    /// panic, so callers can fall back to the executive unconditionally.
    pub fn get(&self, id: &AgentId) -> Result<&Agent, RegistryError> {
        self.agents.get(id).ok_or_else(|| RegistryError::UnknownAgent {
            id: id.to_string(),
        })
    }

    /// The unique executive-tier agent.
    pub fn executive(&self) -> &Agent {
        // Validated at construction; the executive id always resolves.
        &self.agents[&self.executive_id]
    }

    /// Enumerate agents, optionally filtered by tier, in stable id order.
    pub fn list(&self, tier: Option<AgentTier>) -> Vec<&Agent> {
        self.agents
            .values()
            .filter(|a| tier.map_or(true, |t| a.tier == t))
            .collect()
    }

    /// Agents whose keyword domain covers `task_tag`, most specific tier
    /// first, then id order.
    pub fn recommended_for(&self, task_tag: &str) -> Vec<&Agent> {
        let tag = task_tag.to_lowercase();
        let mut matches: Vec<&Agent> = self
            .agents
            .values()
            .filter(|a| a.domain_keywords.contains(&tag))
            .collect();
        matches.sort_by(|a, b| {
            b.tier
                .specificity()
                .cmp(&a.tier.specificity())
                .then_with(|| a.id.cmp(&b.id))
        });
        matches
    }

    /// Number of agents in the catalog.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
