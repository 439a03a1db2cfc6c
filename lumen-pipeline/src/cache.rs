//! Process-owned response cache for the agent-command directory.
//!
//! Modeled as an explicit object rather than ambient module state so tests
//! can reset it deterministically. Population is single-flight: concurrent
//! callers awaiting the same cold key share one backing fetch.

use std::future::Future;
use std::sync::Arc;

use moka::future::Cache;
use serde::Serialize;

use lumen_core::config::CacheConfig;
use lumen_core::models::{AgentId, ToolId};

/// One entry in the dashboard's command directory: an agent and the tools
/// it exposes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentCommand {
    pub agent_id: AgentId,
    pub display_name: String,
    pub tools: Vec<ToolId>,
}

/// TTL-bounded command-directory cache, keyed per tenant.
pub struct CommandCache {
    inner: Cache<String, Arc<Vec<AgentCommand>>>,
}

impl CommandCache {
    pub fn new(config: &CacheConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.command_ttl())
            .build();
        Self { inner }
    }

    /// Return the cached listing for `key`, populating it with `init` on a
    /// cold read. A population in flight is memoized: concurrent callers
    /// await the same fetch instead of triggering duplicates.
    pub async fn get_or_populate<F>(&self, key: &str, init: F) -> Arc<Vec<AgentCommand>>
    where
        F: Future<Output = Vec<AgentCommand>>,
    {
        self.inner
            .get_with(key.to_string(), async move { Arc::new(init.await) })
            .await
    }

    /// Force the next read for `key` to refetch.
    pub async fn invalidate(&self, key: &str) {
        self.inner.invalidate(&key.to_string()).await;
    }

    /// Drop every cached listing.
    pub fn clear(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn command(n: usize) -> AgentCommand {
        AgentCommand {
            agent_id: AgentId::new(format!("agent-{n}")),
            display_name: format!("Agent {n}"),
            tools: vec![ToolId::new("tool")],
        }
    }

    fn cache() -> CommandCache {
        CommandCache::new(&CacheConfig::default())
    }

    #[tokio::test]
    async fn cold_read_populates_then_hits() {
        let cache = cache();
        let loads = AtomicUsize::new(0);

        for _ in 0..3 {
            let listing = cache
                .get_or_populate("tenant-1", async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    vec![command(1)]
                })
                .await;
            assert_eq!(listing.len(), 1);
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_cold_readers_share_one_fetch() {
        let cache = Arc::new(cache());
        let loads = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let loads = Arc::clone(&loads);
                tokio::spawn(async move {
                    cache
                        .get_or_populate("tenant-1", async move {
                            loads.fetch_add(1, Ordering::SeqCst);
                            // Hold the population open long enough for the
                            // other readers to pile up behind it.
                            tokio::time::sleep(Duration::from_millis(30)).await;
                            vec![command(1)]
                        })
                        .await
                })
            })
            .collect();

        for task in tasks {
            task.await.expect("reader task panicked");
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let cache = cache();
        let loads = AtomicUsize::new(0);

        cache
            .get_or_populate("tenant-1", async {
                loads.fetch_add(1, Ordering::SeqCst);
                vec![command(1)]
            })
            .await;
        cache.invalidate("tenant-1").await;
        cache
            .get_or_populate("tenant-1", async {
                loads.fetch_add(1, Ordering::SeqCst);
                vec![command(2)]
            })
            .await;

        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn tenants_are_cached_independently() {
        let cache = cache();
        let a = cache
            .get_or_populate("tenant-a", async { vec![command(1)] })
            .await;
        let b = cache
            .get_or_populate("tenant-b", async { vec![command(2)] })
            .await;
        assert_ne!(a[0].agent_id, b[0].agent_id);
    }
}
