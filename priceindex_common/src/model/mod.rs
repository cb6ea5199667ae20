//! Data model types.
//!
//! - `quote` — quote results returned by the fetcher.
//! - `summary` — provider quoteSummary response payloads.
pub mod quote;
#[allow(missing_docs)]
pub mod summary;
