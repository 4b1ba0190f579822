//! HTTP client for the `/records` collection.

use url::Url;

use crate::{
    config::{ClientConfig, StatusPolicy},
    fetch::{truncate_body, Fetch, HttpFetcher},
    query::build_query_href,
    transform::transform,
    types::{Record, RetrieveOptions, RetrieveResult},
    Error,
};

/// Client for the `/records` collection.
///
/// Holds its configuration and the [`Fetch`] capability used for requests.
/// Calls share no mutable state, so one client can serve concurrent
/// retrievals.
pub struct Client<F: Fetch = HttpFetcher> {
    config: ClientConfig,
    fetcher: F,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client for the default endpoint, `http://localhost:3000/records`.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    /// Creates a client from a full configuration, using the default `reqwest` fetcher.
    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_fetcher(config, HttpFetcher::new())
    }
}

impl<F: Fetch> Client<F> {
    /// Creates a client that issues its requests through `fetcher`.
    pub fn with_fetcher(config: ClientConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn base_url(&self) -> Result<Url, Error> {
        Url::parse(&self.config.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.config.base_url, e);
            Error::InvalidUrl {
                url: self.config.base_url.clone(),
                reason: e.to_string(),
            }
        })
    }

    /// Builds the request URL for the page and colors in `options`.
    pub fn query_href(&self, options: &RetrieveOptions) -> Result<Url, Error> {
        let base_url = self.base_url()?;
        Ok(build_query_href(
            &base_url,
            self.config.page_size,
            options.page_to_display(),
            &options.colors,
        ))
    }

    /// Fetches `href` and decodes the body as an array of records.
    ///
    /// A status other than 200 fails under [`StatusPolicy::Strict`]; under
    /// [`StatusPolicy::Lenient`] it is only logged and the body is decoded anyway.
    pub async fn fetch_page(&self, href: &Url) -> Result<Vec<Record>, Error> {
        tracing::debug!("Fetching {}", href);
        let resp = self.fetcher.get(href).await?;
        tracing::debug!("Response status {} for {}", resp.status, href);

        if resp.status != 200 {
            match self.config.status_policy {
                StatusPolicy::Strict => {
                    let snippet = truncate_body(&resp.body);
                    tracing::error!(
                        "Unexpected response status {} for {}: {}",
                        resp.status,
                        href,
                        snippet
                    );
                    return Err(Error::HttpStatus {
                        status: resp.status,
                        body: snippet,
                    });
                }
                StatusPolicy::Lenient => {
                    tracing::warn!(
                        "Unexpected response status {} for {}, decoding body anyway",
                        resp.status,
                        href
                    );
                }
            }
        }

        resp.json::<Vec<Record>>().map_err(|e| {
            tracing::error!("Failed to decode records from {}: {}", href, e);
            e
        })
    }

    /// Retrieves one page of records and derives cursors and aggregates from it.
    pub async fn retrieve(&self, options: &RetrieveOptions) -> Result<RetrieveResult, Error> {
        let page_to_display = options.page_to_display();
        let href = self.query_href(options)?;
        let records = self.fetch_page(&href).await?;
        Ok(transform(records, page_to_display, self.config.page_size))
    }
}
