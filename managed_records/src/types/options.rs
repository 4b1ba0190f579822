use serde::{Deserialize, Serialize};

/// Caller-supplied options for [`Client::retrieve`](crate::Client::retrieve).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveOptions {
    /// Page to retrieve (1-indexed). `None` or `0` means the first page.
    #[serde(default)]
    pub page: Option<u32>,
    /// Color filters, in the order they should be sent.
    #[serde(default)]
    pub colors: Vec<String>,
}

impl RetrieveOptions {
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
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

    /// The page that will actually be requested.
    pub fn page_to_display(&self) -> u32 {
        match self.page {
            Some(page) if page > 0 => page,
            _ => 1,
        }
    }
}
