//! Price Index Client — looks up a fixed set of instruments (S&P 500 and Nasdaq
//! proxy ETFs, bitcoin, the Shanghai composite) from the quote-data provider and
//! prints a summary of each to stdout, with market times shown in China Standard
//! Time.
//!
//! Usage example (CLI):
//! ```bash
//! RUST_LOG=debug priceindex_client --endpoint https://query2.finance.yahoo.com
//! ```
//!
//! Lookups run one after another. A lookup that fails or finds no data is
//! logged to stderr and skipped; the process still exits normally.
#![warn(missing_docs)]
mod args;
mod report;

use crate::args::Args;
use clap::Parser;
use log::debug;
use priceindex_common::instruments::DEFAULT_INSTRUMENTS;
use priceindex_common::{QuoteError, QuoteFetcher, Result, YahooSource};
use std::io;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let source = YahooSource::new(&args.endpoint)?;
    debug!("Quote provider: {}", source.endpoint());

    let fetcher = QuoteFetcher::new(source);
    let mut stdout = io::stdout().lock();
    let printed = report::run(&fetcher, &DEFAULT_INSTRUMENTS, &mut stdout)?;

    debug!("{} of {} lookups printed", printed, DEFAULT_INSTRUMENTS.len());
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
