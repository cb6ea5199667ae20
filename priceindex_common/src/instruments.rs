//! Instruments looked up by the client, in display order.

use strum_macros::Display;

/// How an instrument's price section is read and rendered.
#[derive(Debug, Clone, Copy, Display, Hash, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum InstrumentKind {
    /// Equity-index proxy ETF: open/high/low/previous close/volume.
    Equity,
    /// Cryptocurrency pair: single market price.
    Crypto,
    /// Market index; read the same way as an equity.
    Index,
}

/// A provider-recognized identifier with its console label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrument {
    /// Label printed in the report header.
    pub label: &'static str,
    /// Provider symbol, e.g. `SPY` or `BTC-USD`.
    pub symbol: &'static str,
    /// Field set to extract.
    pub kind: InstrumentKind,
}

impl Instrument {
    /// Creates a new instrument entry.
    pub const fn new(label: &'static str, symbol: &'static str, kind: InstrumentKind) -> Self {
        Instrument { label, symbol, kind }
    }
}

/// Fixed lookup sequence: S&P 500 proxy, Nasdaq proxy, bitcoin, Shanghai composite.
pub const DEFAULT_INSTRUMENTS: [Instrument; 4] = [
    Instrument::new("SP500 (SPY)", "SPY", InstrumentKind::Equity),
    Instrument::new("纳斯达克 (QQQ)", "QQQ", InstrumentKind::Equity),
    Instrument::new("比特币价格 (USD)", "BTC-USD", InstrumentKind::Crypto),
    Instrument::new("上证指数", "000001.SS", InstrumentKind::Index),
];
