//! The HTTP capability the client is built on.
//!
//! [`Fetch`] is the seam: the client only ever asks for "GET this URL, give me
//! the status and body". [`HttpFetcher`] implements it with `reqwest`; tests and
//! embedders can inject anything else.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::Error;

/// Request timeout used by [`HttpFetcher::new`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest body snippet kept in errors and log lines.
const MAX_BODY_SNIPPET: usize = 2000;

/// Raw outcome of a GET request.
#[derive(Clone, Debug)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str::<T>(&self.body).map_err(|e| Error::Decode {
            message: e.to_string(),
            body: truncate_body(&self.body),
        })
    }
}

/// Issues GET requests on behalf of the client.
#[async_trait::async_trait]
pub trait Fetch: Send + Sync {
    /// Performs a GET request. Only failures to obtain a response are errors;
    /// any status code is returned as part of the [`FetchResponse`].
    async fn get(&self, url: &Url) -> Result<FetchResponse, Error>;
}

/// [`Fetch`] implementation backed by `reqwest`.
///
/// Each request builds a fresh `reqwest::Client` with the configured timeout.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    timeout: Duration,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Creates a fetcher with a 30-second timeout.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait::async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &Url) -> Result<FetchResponse, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::from(e)
            })?;
        let resp = client
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {}: {}", url, e);
                Error::from(e)
            })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            Error::from(e)
        })?;

        Ok(FetchResponse { status, body })
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_BODY_SNIPPET {
        return body.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
