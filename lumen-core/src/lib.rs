//! # lumen-core
//!
//! Foundation crate for the Lumen query-intelligence pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PipelineConfig;
pub use errors::{LumenError, LumenResult};
pub use models::{
    Agent, AgentId, AgentTier, BusinessInsight, Confidence, ContextBundle, DocumentChunk,
    Observation, ObservationKind, Priority, RoutingDecision,
};
