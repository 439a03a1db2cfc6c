//! # lumen-pipeline
//!
//! The orchestration facade over the query-intelligence pipeline:
//! `route_and_assemble` for chat handlers (route a question, build the
//! grounded context for the downstream completion call) and
//! `get_observations`/`get_insights` for dashboard surfaces. Failures are
//! absorbed below this layer; neither entry point returns an error.

pub mod cache;
pub mod engine;

pub use cache::{AgentCommand, CommandCache};
pub use engine::{PipelineEngine, RoutedContext};
