//! Command-line arguments for the price index client.
//!
//! Every flag has a default; a bare invocation runs the standard lookup sequence
//! against the public provider endpoint.
use clap::Parser;
use priceindex_common::net::DEFAULT_ENDPOINT;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote-data provider API.
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}
