//! Specialized answering personas and their capability metadata.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique agent identifier, e.g. `"sales"` or `"email-deliverability"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of a tool an agent may invoke, e.g. `"crm_query"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToolId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Hierarchy tier of an agent. `Specialist` is the most specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentTier {
    Executive,
    Departmental,
    Specialist,
}

impl AgentTier {
    /// Specificity rank used for routing tie-breaks: specialist beats
    /// departmental beats executive.
    pub fn specificity(self) -> u8 {
        match self {
            AgentTier::Executive => 0,
            AgentTier::Departmental => 1,
            AgentTier::Specialist => 2,
        }
    }
}

/// A specialized answering persona: domain keywords, tools, and prompt.
///
/// The catalog of agents is immutable at runtime. Every non-executive agent
/// has a parent chain terminating at the executive tier; the registry
/// enforces this at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub tier: AgentTier,
    pub display_name: String,
    pub domain_keywords: BTreeSet<String>,
    pub tools: BTreeSet<ToolId>,
    pub system_prompt_template: String,
    #[serde(default)]
    pub parent_agent_id: Option<AgentId>,
}
