//! The analyzer seam.

use lumen_core::models::{ContextBundle, Observation};

/// One independent business check.
///
/// Analyzers are pure functions of the bundle: read-only over shared
/// immutable data, writing only to their own return value. "Nothing to
/// report" is `None`, never an error.
pub trait Analyzer: Send + Sync {
    /// Stable name for logs.
    fn name(&self) -> &'static str;

    fn analyze(&self, bundle: &ContextBundle) -> Option<Observation>;
}
