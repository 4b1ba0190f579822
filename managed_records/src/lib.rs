//! Client for the paginated `/records` collection.
//!
//! Fetches one page of records (plus a lookahead item), then derives the
//! pagination cursors, the id list, the open records tagged with color
//! primacy, and the count of closed records with a primary color.

mod client;
mod config;
mod errors;
mod fetch;
mod query;
mod transform;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, StatusPolicy, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use self::errors::{Error, ErrorKind};
pub use self::fetch::{Fetch, FetchResponse, HttpFetcher};
pub use self::query::{build_query_href, Query, RecordQuery};
pub use self::transform::transform;
