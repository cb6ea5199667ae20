//! Quote fetcher: request the `price` module, extract and round the fields,
//! convert the market time to the display zone.
//!
//! Every failure is absorbed here. A missing price section is logged at
//! `info` and yields `QuoteOutcome::NoData`; transport, provider and decoding
//! errors (including a price section missing one of the required fields) are
//! logged at `error` and yield `QuoteOutcome::RequestFailed`. Exactly one line
//! is logged per failed lookup and nothing is retried.
use std::str::FromStr;

use log::{debug, error, info};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::QuoteError;
use crate::model::quote::{CryptoQuote, EquityQuote, QuoteOutcome};
use crate::model::summary::{NumberField, PriceSection};
use crate::net::PRICE_MODULE;
use crate::provider::QuoteSource;
use crate::result::Result;
use crate::time::format_display_time;

/// Looks up price summaries through a `QuoteSource`.
pub struct QuoteFetcher<S> {
    source: S,
}

impl<S: QuoteSource> QuoteFetcher<S> {
    /// Create a fetcher backed by `source`.
    pub fn new(source: S) -> Self {
        QuoteFetcher { source }
    }

    /// Open/high/low/previous close/volume for an ETF or index symbol.
    pub fn fetch_equity_summary(&self, symbol: &str) -> QuoteOutcome<EquityQuote> {
        self.fetch(symbol, "最新数据", equity_from_price)
    }

    /// Latest market price for a cryptocurrency pair.
    pub fn fetch_crypto_summary(&self, symbol: &str) -> QuoteOutcome<CryptoQuote> {
        self.fetch(symbol, "最新价格", crypto_from_price)
    }

    /// Same as [`Self::fetch_equity_summary`]; market indices are read the same way.
    pub fn fetch_index_summary(&self, symbol: &str) -> QuoteOutcome<EquityQuote> {
        self.fetch_equity_summary(symbol)
    }

    fn fetch<T>(
        &self,
        symbol: &str,
        subject: &str,
        extract: fn(&PriceSection) -> Result<T>,
    ) -> QuoteOutcome<T> {
        debug!("Requesting {} module for {}", PRICE_MODULE, symbol);
        let extracted = self
            .source
            .quote_summary(symbol, &[PRICE_MODULE])
            .and_then(|result| result.price.as_ref().map(extract).transpose());

        match extracted {
            Ok(Some(quote)) => QuoteOutcome::Ok(quote),
            Ok(None) => {
                info!("未能获取 {} 的{}。", symbol, subject);
                QuoteOutcome::NoData
            }
            Err(e) => {
                error!("获取 {} 数据时发生错误: {}", symbol, e);
                QuoteOutcome::RequestFailed(e.to_string())
            }
        }
    }
}

fn equity_from_price(price: &PriceSection) -> Result<EquityQuote> {
    Ok(EquityQuote {
        display_timestamp: display_time(price)?,
        open: round2(required(price.regular_market_open, "regularMarketOpen")?),
        high: round2(required(price.regular_market_day_high, "regularMarketDayHigh")?),
        low: round2(required(price.regular_market_day_low, "regularMarketDayLow")?),
        previous_close: round2(required(
            price.regular_market_previous_close,
            "regularMarketPreviousClose",
        )?),
        volume: whole_count(
            required(price.regular_market_volume, "regularMarketVolume")?,
            "regularMarketVolume",
        )?,
    })
}

fn crypto_from_price(price: &PriceSection) -> Result<CryptoQuote> {
    Ok(CryptoQuote {
        display_timestamp: display_time(price)?,
        price: round2(required(price.regular_market_price, "regularMarketPrice")?),
    })
}

fn required(field: Option<NumberField>, name: &'static str) -> Result<f64> {
    field
        .and_then(|f| f.value())
        .ok_or(QuoteError::MissingField(name))
}

fn whole_count(value: f64, name: &'static str) -> Result<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(QuoteError::InvalidField(name));
    }
    Ok(value as u64)
}

fn display_time(price: &PriceSection) -> Result<String> {
    let time = price
        .regular_market_time
        .as_ref()
        .ok_or(QuoteError::MissingField("regularMarketTime"))?;
    Ok(format_display_time(time.to_utc()?))
}

/// Round half away from zero to 2 decimal places.
///
/// Rounds the shortest decimal form of `value`, so `43210.995` becomes
/// `43211.0` even though its binary value sits just below the midpoint.
/// Non-finite values and values outside the decimal range pass through.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .and_then(|d| {
            d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .to_f64()
        })
        .unwrap_or(value)
}
