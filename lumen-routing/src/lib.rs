//! # lumen-routing
//!
//! Classifies a free-text query into a target agent with a confidence
//! score. Keyword-substring matching is a known-fragile heuristic; it lives
//! behind `IntentRouter` so an embedding-based classifier can replace it
//! later without changing callers. Routing never fails — zero domain signal
//! resolves to the executive agent at low confidence.

pub mod normalize;
pub mod router;

pub use router::IntentRouter;
