//! Provider quoteSummary response models.
//!
//! Only the `price` module is modelled. Numeric fields come either as bare
//! numbers or wrapped as `{"raw": 123.45, "fmt": "123.45"}`; the market time
//! comes either as epoch seconds or as an RFC 3339 string.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::QuoteError;
use crate::result::Result;

/// Top-level response wrapper.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    pub quote_summary: QuoteSummary,
}

/// Result list plus the provider's error object, if any.
#[derive(Debug, Deserialize)]
pub struct QuoteSummary {
    #[serde(default)]
    pub result: Option<Vec<QuoteSummaryResult>>,
    #[serde(default)]
    pub error: Option<ProviderErrorBody>,
}

/// Error object reported by the provider, e.g. for an unknown symbol.
#[derive(Debug, Deserialize)]
pub struct ProviderErrorBody {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

/// One result entry; modules the request did not ask for stay `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    pub price: Option<PriceSection>,
}

/// The `price` module.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSection {
    pub regular_market_open: Option<NumberField>,
    pub regular_market_day_high: Option<NumberField>,
    pub regular_market_day_low: Option<NumberField>,
    pub regular_market_previous_close: Option<NumberField>,
    pub regular_market_volume: Option<NumberField>,
    pub regular_market_price: Option<NumberField>,
    pub regular_market_time: Option<MarketTime>,
}

/// A numeric field, bare or wrapped.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Plain(f64),
    Wrapped {
        #[serde(default)]
        raw: Option<f64>,
    },
}

impl NumberField {
    /// The numeric value, or `None` for an empty wrapper.
    pub fn value(&self) -> Option<f64> {
        match self {
            NumberField::Plain(v) => Some(*v),
            NumberField::Wrapped { raw } => *raw,
        }
    }
}

/// Market event time.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MarketTime {
    EpochSeconds(i64),
    Iso(String),
}

impl MarketTime {
    /// Interpret the value as a UTC instant.
    pub fn to_utc(&self) -> Result<DateTime<Utc>> {
        match self {
            MarketTime::EpochSeconds(secs) => Utc
                .timestamp_opt(*secs, 0)
                .single()
                .ok_or_else(|| QuoteError::InvalidTimestamp(secs.to_string())),
            MarketTime::Iso(text) => DateTime::parse_from_rfc3339(text)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| QuoteError::InvalidTimestamp(format!("{text}: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_wrapped_price_section() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {
                        "regularMarketOpen": {"raw": 450.123, "fmt": "450.12"},
                        "regularMarketDayHigh": {"raw": 452.5, "fmt": "452.50"},
                        "regularMarketDayLow": {},
                        "regularMarketVolume": {"raw": 75000000, "fmt": "75M", "longFmt": "75,000,000"},
                        "regularMarketTime": 1704897000,
                        "currency": "USD"
                    }
                }],
                "error": null
            }
        }"#;
        let response: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let result = response.quote_summary.result.unwrap().remove(0);
        let price = result.price.unwrap();

        assert_eq!(price.regular_market_open.and_then(|f| f.value()), Some(450.123));
        assert_eq!(price.regular_market_day_high.and_then(|f| f.value()), Some(452.5));
        assert_eq!(price.regular_market_day_low.and_then(|f| f.value()), None);
        assert!(price.regular_market_previous_close.is_none());
        assert_eq!(price.regular_market_volume.and_then(|f| f.value()), Some(75_000_000.0));
        let time = price.regular_market_time.unwrap().to_utc().unwrap();
        assert_eq!(time.to_rfc3339(), "2024-01-10T14:30:00+00:00");
    }

    #[test]
    fn deserialize_plain_numbers_and_iso_time() {
        let json = r#"{
            "regularMarketPrice": 43210.995,
            "regularMarketTime": "2024-01-10T14:30:00.000Z"
        }"#;
        let price: PriceSection = serde_json::from_str(json).unwrap();
        assert_eq!(price.regular_market_price.and_then(|f| f.value()), Some(43210.995));
        let time = price.regular_market_time.unwrap().to_utc().unwrap();
        assert_eq!(time.timestamp(), 1_704_897_000);
    }

    #[test]
    fn deserialize_not_found_error() {
        let json = r#"{
            "quoteSummary": {
                "result": null,
                "error": {"code": "Not Found", "description": "Quote not found for symbol: NOPE"}
            }
        }"#;
        let response: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        assert!(response.quote_summary.result.is_none());
        let error = response.quote_summary.error.unwrap();
        assert_eq!(error.code, "Not Found");
        assert_eq!(error.description, "Quote not found for symbol: NOPE");
    }

    #[test]
    fn result_without_price_module() {
        let json = r#"{"quoteSummary": {"result": [{}], "error": null}}"#;
        let response: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let results = response.quote_summary.result.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].price.is_none());
    }

    #[test]
    fn malformed_iso_time_is_rejected() {
        let time = MarketTime::Iso("yesterday".to_string());
        assert!(matches!(time.to_utc(), Err(QuoteError::InvalidTimestamp(_))));
    }
}
