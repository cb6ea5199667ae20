//! Error types shared by the fetcher, the provider transport and the client.
//!
//! The `QuoteError` enum unifies the failure cases of a single quote lookup:
//! transport (HTTP, I/O), decoding (JSON), provider-reported errors and
//! responses that lack the fields the fetcher needs.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by the library and the client binary.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error, e.g. while writing the report to the console.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status and no usable body.
    #[error("Unexpected HTTP status {status} for {symbol}")]
    Status {
        /// Status code returned by the provider.
        status: u16,
        /// Instrument identifier of the request.
        symbol: String,
    },

    /// Failure while decoding the provider response via serde_json.
    #[error("JSON deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The provider reported an error object in its response.
    #[error("Provider error: {code} - {description}")]
    Provider {
        /// Short error code, e.g. `Not Found`.
        code: String,
        /// Human-readable description from the provider.
        description: String,
    },

    /// The provider returned no result for the identifier.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The session cookie/crumb handshake failed or expired.
    #[error("Session error: {0}")]
    Session(String),

    /// A price section was present but a required field was absent.
    #[error("missing field {0}")]
    MissingField(&'static str),

    /// A field was present but its value is unusable, e.g. a negative or
    /// fractional volume.
    #[error("invalid field {0}")]
    InvalidField(&'static str),

    /// The market time could not be interpreted as a UTC instant.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
