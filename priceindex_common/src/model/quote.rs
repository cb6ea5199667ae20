//! Quote results handed back to the caller.
//!
//! Values are transient: produced per lookup, printed, discarded.

/// Price summary of an equity-index proxy or market index.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityQuote {
    /// Market time rendered in the display time zone.
    pub display_timestamp: String,
    /// Regular-market open, 2 decimal places.
    pub open: f64,
    /// Day high, 2 decimal places.
    pub high: f64,
    /// Day low, 2 decimal places.
    pub low: f64,
    /// Previous close, 2 decimal places.
    pub previous_close: f64,
    /// Regular-market volume, unrounded.
    pub volume: u64,
}

/// Latest price of a cryptocurrency pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoQuote {
    /// Market time rendered in the display time zone.
    pub display_timestamp: String,
    /// Regular-market price, 2 decimal places.
    pub price: f64,
}

/// Outcome of a single lookup.
///
/// The driver treats both non-`Ok` variants the same way; they are kept apart
/// so other callers can tell "the provider had nothing" from "the call failed".
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome<T> {
    /// Price section present and complete.
    Ok(T),
    /// The response carried no price section.
    NoData,
    /// Transport, provider or decoding failure, with its cause.
    RequestFailed(String),
}

impl<T> QuoteOutcome<T> {
    /// Collapse to "quote or nothing".
    pub fn ok(self) -> Option<T> {
        match self {
            QuoteOutcome::Ok(quote) => Some(quote),
            QuoteOutcome::NoData | QuoteOutcome::RequestFailed(_) => None,
        }
    }
}
