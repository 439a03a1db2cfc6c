use async_trait::async_trait;

use crate::errors::LumenResult;
use crate::models::{BusinessSnapshot, MetricScope};

/// Read access to live business metrics, scoped per agent.
#[async_trait]
pub trait IMetricsSource: Send + Sync {
    /// Fetch the metrics named by `scope` for one user's business.
    /// Metrics the source cannot produce are simply absent from the map.
    async fn business_snapshot(
        &self,
        user_id: &str,
        scope: &MetricScope,
    ) -> LumenResult<BusinessSnapshot>;
}
