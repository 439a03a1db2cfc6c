//! # lumen-registry
//!
//! The agent capability registry: a static, configured catalog of
//! specialized experts, their keyword domains, tools, and tiered hierarchy.
//! Pure lookup — no I/O, no mutation after load. Unknown ids come back as a
//! typed not-found so callers can fall back to the executive agent
//! unconditionally.

pub mod catalog;
pub mod registry;

pub use registry::AgentRegistry;
