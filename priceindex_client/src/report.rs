//! Sequential lookup driver and console rendering.
//!
//! Instruments are looked up one at a time in the given order; each lookup
//! finishes before the next starts. Lookups that produce no quote are skipped
//! here, the fetcher has already logged why.
use std::io::Write;

use log::debug;
use priceindex_common::instruments::{Instrument, InstrumentKind};
use priceindex_common::{CryptoQuote, EquityQuote, QuoteFetcher, QuoteSource, Result};

/// Header plus one labelled line per field, followed by a blank line.
pub fn render_equity(label: &str, quote: &EquityQuote) -> String {
    format!(
        "{} 最新数据 ({}):\n  开盘价: {}\n  最高价: {}\n  最低价: {}\n  收盘价: {}\n  成交量: {}\n\n",
        label,
        quote.display_timestamp,
        quote.open,
        quote.high,
        quote.low,
        quote.previous_close,
        quote.volume
    )
}

/// Single line with the price, followed by a blank line.
pub fn render_crypto(label: &str, quote: &CryptoQuote) -> String {
    format!(
        "{} 最新数据 ({}): {}\n\n",
        label, quote.display_timestamp, quote.price
    )
}

/// Look up `instruments` in order and write each available quote to `out`.
///
/// Returns how many blocks were written. Only write errors are propagated.
pub fn run<S: QuoteSource, W: Write>(
    fetcher: &QuoteFetcher<S>,
    instruments: &[Instrument],
    out: &mut W,
) -> Result<usize> {
    let mut printed = 0;
    for instrument in instruments {
        debug!("Looking up {} ({})", instrument.symbol, instrument.kind);
        let block = match instrument.kind {
            InstrumentKind::Equity => fetcher
                .fetch_equity_summary(instrument.symbol)
                .ok()
                .map(|q| render_equity(instrument.label, &q)),
            InstrumentKind::Index => fetcher
                .fetch_index_summary(instrument.symbol)
                .ok()
                .map(|q| render_equity(instrument.label, &q)),
            InstrumentKind::Crypto => fetcher
                .fetch_crypto_summary(instrument.symbol)
                .ok()
                .map(|q| render_crypto(instrument.label, &q)),
        };
        if let Some(block) = block {
            out.write_all(block.as_bytes())?;
            printed += 1;
        }
    }
    out.flush()?;
    Ok(printed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use priceindex_common::QuoteError;
    use priceindex_common::instruments::DEFAULT_INSTRUMENTS;
    use priceindex_common::model::summary::{PriceSection, QuoteSummaryResult};
    use std::cell::RefCell;
    use std::io;

    /// Answers from canned price sections and records the call order.
    struct StubSource {
        calls: RefCell<Vec<String>>,
    }

    impl StubSource {
        fn new() -> Self {
            StubSource {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl QuoteSource for StubSource {
        fn quote_summary(&self, symbol: &str, _modules: &[&str]) -> Result<QuoteSummaryResult> {
            self.calls.borrow_mut().push(symbol.to_string());
            let price = match symbol {
                "SPY" => r#"{
                    "regularMarketOpen": 450.123,
                    "regularMarketDayHigh": 452.5,
                    "regularMarketDayLow": 449.0,
                    "regularMarketPreviousClose": 448.75,
                    "regularMarketVolume": 75000000,
                    "regularMarketTime": "2024-01-10T14:30:00Z"
                }"#,
                "BTC-USD" => r#"{
                    "regularMarketPrice": 43210.995,
                    "regularMarketTime": 1704897000
                }"#,
                "QQQ" => {
                    return Err(QuoteError::Io(io::Error::new(
                        io::ErrorKind::TimedOut,
                        "operation timed out",
                    )));
                }
                _ => return Ok(QuoteSummaryResult::default()),
            };
            let price: PriceSection = serde_json::from_str(price)?;
            Ok(QuoteSummaryResult { price: Some(price) })
        }
    }

    #[test]
    fn render_equity_block() {
        let quote = EquityQuote {
            display_timestamp: "2024/01/10 22:30:00".to_string(),
            open: 450.12,
            high: 452.5,
            low: 449.0,
            previous_close: 448.75,
            volume: 75_000_000,
        };
        assert_eq!(
            render_equity("SP500 (SPY)", &quote),
            "SP500 (SPY) 最新数据 (2024/01/10 22:30:00):\n  开盘价: 450.12\n  最高价: 452.5\n  最低价: 449\n  收盘价: 448.75\n  成交量: 75000000\n\n"
        );
    }

    #[test]
    fn render_crypto_line() {
        let quote = CryptoQuote {
            display_timestamp: "2024/01/10 22:30:00".to_string(),
            price: 43211.0,
        };
        assert_eq!(
            render_crypto("比特币价格 (USD)", &quote),
            "比特币价格 (USD) 最新数据 (2024/01/10 22:30:00): 43211\n\n"
        );
    }

    #[test]
    fn failed_lookup_does_not_stop_the_sequence() {
        let source = StubSource::new();
        let fetcher = QuoteFetcher::new(&source);
        let mut out = Vec::new();

        let printed = run(&fetcher, &DEFAULT_INSTRUMENTS, &mut out).unwrap();

        assert_eq!(printed, 2);
        assert_eq!(
            *source.calls.borrow(),
            vec!["SPY", "QQQ", "BTC-USD", "000001.SS"]
        );
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "SP500 (SPY) 最新数据 (2024/01/10 22:30:00):\n  开盘价: 450.12\n  最高价: 452.5\n  最低价: 449\n  收盘价: 448.75\n  成交量: 75000000\n\n\
             比特币价格 (USD) 最新数据 (2024/01/10 22:30:00): 43211\n\n"
        );
    }
}
