//! Configuration for the process-wide response cache.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tuning for the command-directory response cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Time-to-live for cached command listings, in seconds. Default: 300.
    pub command_ttl_secs: u64,
    /// Max cached entries (one per tenant). Default: 256.
    pub max_entries: u64,
}

impl CacheConfig {
    /// The command-listing TTL as a `Duration`.
    pub fn command_ttl(&self) -> Duration {
        Duration::from_secs(self.command_ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            command_ttl_secs: 300,
            max_entries: 256,
        }
    }
}
