//! Business metric values and agent-scoped fetch requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single business metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum MetricValue {
    Count(u64),
    Amount(f64),
    Flag(bool),
    Text(String),
}

impl MetricValue {
    /// The value as an integer count, if it is one.
    pub fn as_count(&self) -> Option<u64> {
        match self {
            MetricValue::Count(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a float. Counts widen; flags and text do not coerce.
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            MetricValue::Amount(v) => Some(*v),
            MetricValue::Count(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            MetricValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

/// A business snapshot: metric name → value, as fetched for one agent scope.
pub type BusinessSnapshot = BTreeMap<String, MetricValue>;

/// Which metrics to fetch for a given agent.
///
/// The agent → scope mapping is a static table owned by the assembler;
/// the metrics source only ever sees the resolved scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricScope {
    /// Scope label, used in warnings and logs (e.g. "sales").
    pub name: String,
    /// Metric names to fetch.
    pub metric_names: Vec<String>,
}

impl MetricScope {
    pub fn new(name: impl Into<String>, metric_names: &[&str]) -> Self {
        Self {
            name: name.into(),
            metric_names: metric_names.iter().map(|m| m.to_string()).collect(),
        }
    }
}
