//! Error types for the Lumen pipeline, one enum per subsystem.
//!
//! Per-request failures are absorbed at the lowest layer and converted into
//! degraded-but-valid outputs; only startup/configuration errors (a malformed
//! agent catalog, unparseable config) surface as hard errors.

mod assembly_error;
mod config_error;
mod registry_error;
mod retrieval_error;

pub use assembly_error::AssemblyError;
pub use config_error::ConfigError;
pub use registry_error::RegistryError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the Lumen pipeline.
#[derive(Debug, thiserror::Error)]
pub enum LumenError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A collaborator (profile store, metrics source, embedding model,
    /// vector index) could not be reached at all.
    #[error("source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },
}

/// Result alias used across the workspace.
pub type LumenResult<T> = Result<T, LumenError>;

impl LumenError {
    /// Convenience constructor for collaborator-side failures.
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
