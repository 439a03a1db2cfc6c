//! Pipeline configuration, loadable from TOML.
//!
//! Every sub-config carries `#[serde(default)]` so a partial TOML file only
//! overrides the fields it names. Invalid values are rejected at load time;
//! nothing re-validates per request.
//!
//! # Examples
//!
//! ```
//! use lumen_core::config::PipelineConfig;
//!
//! let config = PipelineConfig::default();
//! assert_eq!(config.retrieval.top_k, 5);
//! assert_eq!(config.assembly.fetch_timeout_ms, 2000);
//! ```

mod assembly_config;
mod cache_config;
mod retrieval_config;
mod routing_config;

pub use assembly_config::AssemblyConfig;
pub use cache_config::CacheConfig;
pub use retrieval_config::RetrievalConfig;
pub use routing_config::RoutingConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration for the query-intelligence pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub routing: RoutingConfig,
    pub assembly: AssemblyConfig,
    pub retrieval: RetrievalConfig,
    pub cache: CacheConfig,
}

impl PipelineConfig {
    /// Parse a config from a TOML string and validate it.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retrieval.top_k == 0 {
            return Err(ConfigError::Invalid {
                reason: "retrieval.top_k must be at least 1".to_string(),
            });
        }
        if self.retrieval.overfetch_factor == 0 {
            return Err(ConfigError::Invalid {
                reason: "retrieval.overfetch_factor must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.retrieval.similarity_threshold) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "retrieval.similarity_threshold must be in [0, 1], got {}",
                    self.retrieval.similarity_threshold
                ),
            });
        }
        if self.assembly.fetch_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: "assembly.fetch_timeout_ms must be nonzero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        PipelineConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = PipelineConfig::from_toml_str(
            r#"
            [retrieval]
            top_k = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.retrieval.top_k, 8);
        // Untouched sections keep their defaults.
        assert_eq!(config.assembly.fetch_timeout_ms, 2000);
        assert!((config.routing.executive_match_weight - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_top_k_rejected() {
        let err = PipelineConfig::from_toml_str("[retrieval]\ntop_k = 0\n").unwrap_err();
        assert!(err.to_string().contains("top_k"));
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let err =
            PipelineConfig::from_toml_str("[retrieval]\nsimilarity_threshold = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("similarity_threshold"));
    }

    #[test]
    fn garbage_toml_is_a_parse_error() {
        let err = PipelineConfig::from_toml_str("not toml at all [[[").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
