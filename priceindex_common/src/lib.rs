//!
//! Quote lookup library shared by the price index client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError`.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `instruments` — the instruments looked up and how each is read.
//! - `model` — quote results and provider response payloads.
//! - `net` — provider endpoints and URL helpers.
//! - `provider` — the `QuoteSource` seam and its Yahoo Finance implementation.
//! - `time` — display time zone conversion.
//! - `fetcher` — `QuoteFetcher`, which turns provider responses into quotes.
#![warn(missing_docs)]
pub mod error;
pub mod fetcher;
pub mod instruments;
pub mod model;
pub mod net;
pub mod provider;
pub mod result;
pub mod time;

pub use error::QuoteError;
pub use fetcher::QuoteFetcher;
pub use model::quote::{CryptoQuote, EquityQuote, QuoteOutcome};
pub use provider::{QuoteSource, YahooSource};
pub use result::Result;
