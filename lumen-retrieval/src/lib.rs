//! # lumen-retrieval
//!
//! Semantic document retrieval: embed the query, over-fetch nearest
//! neighbors from the backing index, filter by similarity threshold, and
//! truncate to the requested size. Retrieval failure is non-fatal to
//! callers — it degrades to an empty list.

pub mod cache;
pub mod retriever;

pub use retriever::DocumentRetriever;
