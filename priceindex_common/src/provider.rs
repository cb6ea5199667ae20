//! Transport to the quote-data provider.
//!
//! `QuoteSource` is the seam the fetcher depends on: given an identifier and
//! the data modules wanted, return the provider's result entry or fail.
//! `YahooSource` implements it over blocking HTTP.
//!
//! The provider only answers quoteSummary requests that carry an anonymous
//! session: a cookie handed out by `COOKIE_URL` plus a crumb fetched with that
//! cookie. The pair is cached for the life of the source and dropped when the
//! provider answers 401; the failing call is not retried.
use std::sync::Mutex;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header;

use crate::error::QuoteError;
use crate::model::summary::{QuoteSummaryResponse, QuoteSummaryResult};
use crate::net::{COOKIE_URL, USER_AGENT, crumb_url, quote_summary_url};
use crate::result::Result;

/// Anything that can answer a quoteSummary request.
pub trait QuoteSource {
    /// Fetch the result entry for `symbol` restricted to `modules`.
    fn quote_summary(&self, symbol: &str, modules: &[&str]) -> Result<QuoteSummaryResult>;
}

impl<S: QuoteSource + ?Sized> QuoteSource for &S {
    fn quote_summary(&self, symbol: &str, modules: &[&str]) -> Result<QuoteSummaryResult> {
        (**self).quote_summary(symbol, modules)
    }
}

#[derive(Debug, Clone)]
struct Session {
    cookie: String,
    crumb: String,
}

/// Yahoo Finance quoteSummary client.
pub struct YahooSource {
    client: Client,
    endpoint: String,
    cookie_url: String,
    session: Mutex<Option<Session>>,
}

impl YahooSource {
    /// Create a client for the API rooted at `endpoint`, taking the session
    /// cookie from the public `COOKIE_URL`.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_urls(endpoint, COOKIE_URL)
    }

    /// Create a client with an explicit session cookie page.
    pub fn with_urls(endpoint: &str, cookie_url: &str) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(YahooSource {
            client,
            endpoint: endpoint.to_string(),
            cookie_url: cookie_url.to_string(),
            session: Mutex::new(None),
        })
    }

    /// Base URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> Result<Session> {
        if let Some(session) = self.session.lock()?.as_ref() {
            return Ok(session.clone());
        }
        let session = self.open_session()?;
        *self.session.lock()? = Some(session.clone());
        Ok(session)
    }

    fn open_session(&self) -> Result<Session> {
        debug!("Requesting session cookie from {}", self.cookie_url);
        let response = self.client.get(&self.cookie_url).send()?;
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| QuoteError::Session("no cookie in handshake response".to_string()))?;

        let url = crumb_url(&self.endpoint);
        debug!("Requesting crumb from {}", url);
        let response = self.client.get(&url).header(header::COOKIE, &cookie).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Session(format!("crumb request returned {}", status)));
        }
        let crumb = response.text()?.trim().to_string();
        if crumb.is_empty() {
            return Err(QuoteError::Session("empty crumb".to_string()));
        }
        debug!("Provider session established");
        Ok(Session { cookie, crumb })
    }

    fn clear_session(&self) -> Result<()> {
        *self.session.lock()? = None;
        Ok(())
    }
}

impl QuoteSource for YahooSource {
    fn quote_summary(&self, symbol: &str, modules: &[&str]) -> Result<QuoteSummaryResult> {
        let session = self.session()?;
        let url = quote_summary_url(&self.endpoint, symbol, modules, &session.crumb);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::COOKIE, &session.cookie)
            .send()?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.clear_session()?;
            return Err(QuoteError::Session("provider session expired".to_string()));
        }

        let body = response.text()?;
        let parsed: QuoteSummaryResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => {
                return Err(QuoteError::Status {
                    status: status.as_u16(),
                    symbol: symbol.to_string(),
                });
            }
        };
        first_result(symbol, parsed)
    }
}

/// Pick the single result entry out of a decoded response.
///
/// A provider error object wins over any result; an absent or empty result
/// list means the provider does not know `symbol`.
pub fn first_result(symbol: &str, response: QuoteSummaryResponse) -> Result<QuoteSummaryResult> {
    let summary = response.quote_summary;
    if let Some(error) = summary.error {
        return Err(QuoteError::Provider {
            code: error.code,
            description: error.description,
        });
    }
    summary
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| QuoteError::SymbolNotFound(symbol.to_string()))
}
