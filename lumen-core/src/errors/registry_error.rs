/// Agent registry errors.
///
/// `UnknownAgent` is the typed not-found result callers use to fall back to
/// the executive agent; `InvalidCatalog` is a load-time hard error.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown agent: {id}")]
    UnknownAgent { id: String },

    #[error("invalid agent catalog: {reason}")]
    InvalidCatalog { reason: String },
}
