//! Configuration for the context assembler.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Budgets for the assembler's concurrent sub-fetches.
///
/// A fetch that exceeds its budget is treated as a failure for that fetch
/// only; the bundle is still produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Per-fetch timeout in milliseconds. Default: 2000.
    pub fetch_timeout_ms: u64,
}

impl AssemblyConfig {
    /// The per-fetch budget as a `Duration`.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: 2000,
        }
    }
}
