/// Configuration load errors. Startup-only.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("invalid config value: {reason}")]
    Invalid { reason: String },
}
