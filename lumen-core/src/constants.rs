/// Lumen system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base routing confidence before per-keyword increments.
pub const ROUTING_BASE_CONFIDENCE: f64 = 0.5;

/// Confidence added per matched domain keyword.
pub const ROUTING_CONFIDENCE_PER_MATCH: f64 = 0.1;

/// Ceiling for keyword-derived routing confidence.
pub const ROUTING_MAX_CONFIDENCE: f64 = 0.95;

/// Confidence assigned when no domain keyword matches.
pub const ROUTING_FALLBACK_CONFIDENCE: f64 = 0.3;

/// Reasoning string for the zero-signal executive fallback.
pub const ROUTING_FALLBACK_REASONING: &str = "no domain signal; default to executive";

/// Reasoning string for a caller-supplied agent override.
pub const MANUAL_OVERRIDE_REASONING: &str = "manual override";

/// Query used to seed document retrieval for dashboard insight surfaces,
/// where no user question exists.
pub const INSIGHT_CONTEXT_QUERY: &str = "business health overview";
