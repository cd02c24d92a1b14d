//! HTTP fetching for listing and article pages.
//!
//! A single shared [`reqwest::Client`] serves every request in the run. The
//! transport policy is deliberately plain: no retries, no auth, redirects as
//! the client handles them, and a per-request timeout so one stalled server
//! cannot hang a collection pass. A timeout or non-2xx status surfaces as an
//! ordinary fetch error that callers record as sentinel field values.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client wrapper used by the whole run.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build the shared client. Fails only on TLS/backend construction
    /// problems, which is process-fatal.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a URL and return the response body.
    ///
    /// Any non-2xx status is converted into an error, so callers see exactly
    /// two outcomes: a body, or a fetch failure.
    #[instrument(level = "debug", skip(self))]
    pub async fn get(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        debug!(bytes = body.len(), "fetched page");
        Ok(body)
    }
}
