use url::Url;

use crate::config::DEFAULT_PAGE_SIZE;

use super::Query;

/// Query parameter carrying one color filter. Repeated once per color.
const COLOR_PARAM: &str = "color[]";

/// Query for one page of the records collection.
///
/// Always asks for one record more than the page size (`limit`); if that
/// lookahead record comes back, a following page exists.
#[derive(Clone, Debug)]
pub struct RecordQuery {
    /// Page number (1-indexed). Defaults to 1.
    pub page: u32,
    /// Records per page. Defaults to [`DEFAULT_PAGE_SIZE`].
    pub page_size: u32,
    /// Color filters, sent in order and without deduplication.
    pub colors: Vec<String>,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            colors: Vec::new(),
        }
    }
}

impl Query for RecordQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &self.limit().to_string())
            .append_pair("offset", &self.offset().to_string());
        for color in self.colors.iter() {
            url.query_pairs_mut().append_pair(COLOR_PARAM, color.as_str());
        }
        url
    }
}

impl RecordQuery {
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.colors.push(color.to_string());
        self
    }
    pub fn with_colors(mut self, colors: &[String]) -> Self {
        self.colors.extend_from_slice(colors);
        self
    }

    /// Page size plus the lookahead record.
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size) + 1
    }

    /// Index of the first record of the page. Page 0 is treated as page 1.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// Builds the request URL for `page_to_display` against `base_url`.
pub fn build_query_href(
    base_url: &Url,
    page_size: u32,
    page_to_display: u32,
    colors: &[String],
) -> Url {
    RecordQuery::default()
        .with_page(page_to_display)
        .with_page_size(page_size)
        .with_colors(colors)
        .add_to_url(base_url)
}
