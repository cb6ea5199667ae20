//! Provider endpoints and request constants.

/// Base URL of the quote-data provider API.
pub const DEFAULT_ENDPOINT: &str = "https://query1.finance.yahoo.com";
/// Page that hands out the anonymous session cookie.
pub const COOKIE_URL: &str = "https://fc.yahoo.com";
/// Name of the quoteSummary data module carrying the price section.
pub const PRICE_MODULE: &str = "price";
/// Browser-like user agent; the provider rejects unknown clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Build the quoteSummary URL for `symbol` under `endpoint`.
pub fn quote_summary_url(endpoint: &str, symbol: &str, modules: &[&str], crumb: &str) -> String {
    format!(
        "{}/v10/finance/quoteSummary/{}?modules={}&crumb={}",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(symbol),
        modules.join(","),
        urlencoding::encode(crumb)
    )
}

/// Build the crumb URL under `endpoint`.
pub fn crumb_url(endpoint: &str) -> String {
    format!("{}/v1/test/getcrumb", endpoint.trim_end_matches('/'))
}
