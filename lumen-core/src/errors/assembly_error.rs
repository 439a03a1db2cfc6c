/// Context assembly errors.
///
/// These never escape the assembler per-request; they are rendered into
/// `assembly_warnings` strings on the bundle.
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("{source_name} fetch failed: {reason}")]
    FetchFailed { source_name: String, reason: String },

    #[error("{source_name} fetch timed out after {budget_ms}ms")]
    FetchTimeout { source_name: String, budget_ms: u64 },
}
