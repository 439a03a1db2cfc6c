//! Request-scoped value objects flowing through the pipeline.
//!
//! Everything here is owned by the pipeline invocation that created it;
//! nothing is shared mutable across concurrent requests.

mod agent;
mod confidence;
mod context;
mod document;
mod insight;
mod metrics;
mod observation;
mod profile;
mod routing;

pub use agent::{Agent, AgentId, AgentTier, ToolId};
pub use confidence::Confidence;
pub use context::ContextBundle;
pub use document::DocumentChunk;
pub use insight::{BusinessInsight, InsightContext, InsightMetrics, InsightStatus};
pub use metrics::{BusinessSnapshot, MetricScope, MetricValue};
pub use observation::{
    AutomationPotential, EstimatedImpact, Observation, ObservationKind, Priority,
};
pub use profile::UserProfile;
pub use routing::RoutingDecision;
