//! # lumen-context
//!
//! Assembles the grounded context bundle for one request: user profile,
//! agent-scoped business metrics, and semantically-retrieved document
//! excerpts, fetched concurrently. A failed or slow sub-fetch becomes a
//! warning on the bundle, never an error — partial context beats no
//! context, and a bundle is produced even when every source is down.

pub mod assembler;
pub mod scope;

pub use assembler::ContextAssembler;
