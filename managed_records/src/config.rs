//! Static configuration for a [`Client`](crate::Client).

/// Endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/records";

/// Number of records shown per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// How a response status other than 200 is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Any status other than 200 fails the retrieval with [`Error::HttpStatus`](crate::Error::HttpStatus).
    #[default]
    Strict,
    /// Log the status and still try to decode the body.
    Lenient,
}

/// Endpoint, page size and status policy used by a client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the records collection. Defaults to [`DEFAULT_BASE_URL`].
    pub base_url: String,
    /// Records per page. Always at least 1.
    pub page_size: u32,
    /// Defaults to [`StatusPolicy::Strict`].
    pub status_policy: StatusPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            status_policy: StatusPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Sets the page size. A size of 0 is raised to 1.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }
}
